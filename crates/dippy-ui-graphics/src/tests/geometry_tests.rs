use super::*;

#[test]
fn rect_to_px_scales_every_component() {
    let rect = Rect {
        x: 4.0,
        y: 10.0,
        width: 100.0,
        height: 20.0,
    };
    let px = rect.to_px(2.0);
    assert_eq!(
        px,
        Rect {
            x: 8.0,
            y: 20.0,
            width: 200.0,
            height: 40.0,
        }
    );
}

#[test]
fn insets_sum_per_axis() {
    let insets = EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0);
    assert_eq!(insets.horizontal_sum(), 4.0);
    assert_eq!(insets.vertical_sum(), 6.0);
    assert!(!insets.is_zero());
    assert!(EdgeInsets::ZERO.is_zero());
}

#[test]
fn accumulated_insets_add_per_edge() {
    let mut insets = EdgeInsets::uniform(4.0);
    insets += EdgeInsets::symmetric(2.0, 1.0);
    assert_eq!(insets, EdgeInsets::from_components(6.0, 5.0, 6.0, 5.0));
}

#[test]
fn nan_or_negative_insets_are_invalid() {
    assert!(EdgeInsets::uniform(0.0).is_valid());
    assert!(!EdgeInsets::uniform(f32::NAN).is_valid());
    assert!(!EdgeInsets::horizontal(-1.0).is_valid());
}

#[test]
fn translate_moves_origin_and_keeps_size() {
    let rect = Rect::from_size(Size::new(30.0, 20.0)).translate(Point::new(4.0, -2.0));
    assert_eq!(
        rect,
        Rect {
            x: 4.0,
            y: -2.0,
            width: 30.0,
            height: 20.0,
        }
    );
}

#[test]
fn contains_includes_edges() {
    let rect = Rect::from_origin_size(Point::new(10.0, 10.0), Size::new(20.0, 10.0));
    assert!(rect.contains(Point::new(10.0, 10.0)));
    assert!(rect.contains(Point::new(30.0, 20.0)));
    assert!(rect.contains(Point::new(15.0, 12.5)));
    assert!(!rect.contains(Point::new(9.9, 15.0)));
    assert!(!rect.contains(Point::new(15.0, 20.1)));
}

#[test]
fn rect_with_unspecified_size_contains_nothing() {
    let rect = Rect::from_size(Size::new(f32::NAN, 10.0));
    assert!(!rect.contains(Point::ZERO));
}
