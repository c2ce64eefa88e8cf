use dippy_ui::{Composition, Dp, LayoutBox, LayoutTree, NodeError, Size};

/// Composes a screen headlessly and lays it out for a given viewport and density.
///
/// Example: `DemoLauncher::new().with_size(360.0, 640.0).with_density(2.0).run(DeeplyDippy)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoLauncher {
    size: Size,
    density: f32,
}

impl Default for DemoLauncher {
    fn default() -> Self {
        Self {
            size: Size::new(360.0, 640.0),
            density: 1.0,
        }
    }
}

impl DemoLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport size in dp.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Physical pixels per dp.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn run(&self, content: impl FnOnce()) -> Result<LayoutTree, NodeError> {
        log::info!(
            "laying out {}x{} dp at density {:.2}x",
            self.size.width,
            self.size.height,
            self.density
        );
        let composition = Composition::compose(content);
        let root = composition.root().ok_or(NodeError::EmptyComposition)?;
        let layout = composition.compute_layout(root, self.size)?;
        self.log_texts(layout.root());
        Ok(layout)
    }

    fn log_texts(&self, node: &LayoutBox) {
        if let Some(text) = &node.text {
            let px = node.rect_px(self.density);
            log::info!(
                "{text}: padding {} -> {:.1}x{:.1} dp at ({:.1}, {:.1}), {:.0}x{:.0} px",
                Dp(node.padding.left),
                node.rect.width,
                node.rect.height,
                node.rect.x,
                node.rect.y,
                px.width,
                px.height
            );
        }
        for child in &node.children {
            self.log_texts(child);
        }
    }
}
