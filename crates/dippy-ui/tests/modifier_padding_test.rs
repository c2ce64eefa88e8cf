//! Padding built from dip arithmetic must land in layout exactly as the arithmetic says.

use dippy_ui::*;

fn text_rect(padding: Modifier) -> Rect {
    let composition = Composition::compose(|| {
        Text("Hello", padding);
    });
    let root = composition.root().expect("has root");
    composition
        .compute_layout(root, Size::new(800.0, 600.0))
        .expect("layout computation")
        .root()
        .rect
}

#[test]
fn equivalent_expressions_produce_identical_layout() {
    let expected = text_rect(Modifier::empty().padding(24.dip()));
    let expressions = [
        Modifier::empty().padding(16.dip() + 8.dp()),
        Modifier::empty().padding(Dip(16.0) + 8.dip()),
        Modifier::empty().padding(Dip(16.0) + Dip(8.0)),
        Modifier::empty().padding(Dip(48.0) / 2),
        Modifier::empty().padding(12 * 2.dip()),
        Modifier::empty().padding(Dip(30.0) - 6.dip()),
    ];
    for modifier in expressions {
        assert_eq!(text_rect(modifier), expected);
    }
    assert_eq!(expected.width, 40.0 + 48.0);
    assert_eq!(expected.height, 20.0 + 48.0);
}

#[test]
fn coerced_and_fallback_padding() {
    let clamped = text_rect(Modifier::empty().padding(Dip(50.0).coerce_in(Dip(1.0), Dip(3.0))));
    assert_eq!(clamped.width, 40.0 + 6.0);

    let fallback = text_rect(Modifier::empty().padding(Dip::UNSPECIFIED.take_or_else(|| 5.dp())));
    assert_eq!(fallback.width, 40.0 + 10.0);
}

#[test]
fn column_children_follow_each_other_by_padded_height() {
    let composition = Composition::compose(|| {
        Column(Modifier::empty().padding(4.dip()), ColumnSpec::default(), || {
            for step in 1..=3_i32 {
                Text(format!("Item {step}"), Modifier::empty().padding(step.dip()));
            }
        });
    });
    let root = composition.root().expect("has root");
    let layout = composition
        .compute_layout(root, Size::new(360.0, 640.0))
        .expect("layout computation");

    let ys: Vec<f32> = layout.root().children.iter().map(|c| c.rect.y).collect();
    assert_eq!(ys, vec![4.0, 4.0 + 22.0, 4.0 + 22.0 + 24.0]);
}
