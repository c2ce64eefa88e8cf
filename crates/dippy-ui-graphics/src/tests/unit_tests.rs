use super::*;

#[test]
fn adding_then_subtracting_round_trips() {
    let samples = [0.0, 1.0, -3.5, 16.0, 1234.5, -0.25, 1e6];
    for &a in &samples {
        for &b in &samples {
            let round_trip = (Dip(a) + Dip(b)) - Dip(b);
            let tolerance = 1e-4 * a.abs().max(b.abs()).max(1.0);
            assert!(
                (round_trip.0 - a).abs() <= tolerance,
                "({a} + {b}) - {b} = {}",
                round_trip.0
            );
        }
    }
}

#[test]
fn arithmetic_on_dip_yields_dp() {
    assert_eq!(Dip(16.0) + Dip(8.0), Dp(24.0));
    assert_eq!(Dip(16.0) + Dp(8.0), Dp(24.0));
    assert_eq!(Dip(16.0) - Dip(6.0), Dp(10.0));
    assert_eq!(Dip(16.0) - Dp(20.0), Dp(-4.0));
    assert_eq!(-Dip(5.0), Dp(-5.0));
    assert_eq!(Dip(16.0) * 2, Dp(32.0));
    assert_eq!(Dip(16.0) * 0.5_f32, Dp(8.0));
    assert_eq!(3 * Dip(2.0), Dp(6.0));
    assert_eq!(1.5_f32 * Dip(2.0), Dp(3.0));
    assert_eq!(Dip(3.0) * Dip(4.0), Dp(12.0));
    assert_eq!(Dip(3.0) * Dp(4.0), Dp(12.0));
    assert_eq!(Dip(9.0) / 3, Dp(3.0));
    assert_eq!(Dip(9.0) / 2.0_f32, Dp(4.5));
}

#[test]
fn dp_mixes_with_dip_operands() {
    assert_eq!(Dp(10.0) + Dip(2.0), Dp(12.0));
    assert_eq!(Dp(10.0) - Dip(2.0), Dp(8.0));
    assert_eq!(Dp(10.0) / Dip(4.0), 2.5);
    assert_eq!(2 * Dp(10.0), Dp(20.0));
    assert_eq!(Dp(10.0) / 4, Dp(2.5));
    assert_eq!(-Dp(1.0), Dp(-1.0));
}

#[test]
fn dividing_by_itself_yields_one() {
    for value in [1.0_f32, -7.25, 0.001, 4096.0] {
        assert_eq!(Dip(value) / Dip(value), 1.0);
        assert_eq!(Dip(value) / Dp(value), 1.0);
    }
}

#[test]
fn hairline_is_zero_and_infinity_exceeds_finite_values() {
    assert_eq!(Dip::HAIRLINE.0, 0.0);
    assert_eq!(Dp::HAIRLINE.0, 0.0);
    for value in [f32::MIN, -1.0, 0.0, 1.0, f32::MAX] {
        assert!(Dip::INFINITY > Dip(value));
        assert_eq!(Dip::INFINITY.compare_to(Dip(value)), Ordering::Greater);
    }
    assert!(!Dip::INFINITY.is_finite());
    assert!(Dip(1.0).is_finite());
}

#[test]
fn unspecified_falls_back() {
    assert!(!Dip::UNSPECIFIED.is_specified());
    assert!(Dip::UNSPECIFIED.is_unspecified());
    assert!(Dip(0.0).is_specified());
    assert_eq!(Dip::UNSPECIFIED.take_or_else(|| Dp(3.0)), Dp(3.0));
    assert_eq!(Dip(5.0).take_or_else(|| Dp(3.0)), Dp(5.0));
    assert_eq!(Dp::UNSPECIFIED.take_or_else(|| Dp(1.0)), Dp(1.0));
}

#[test]
fn unspecified_propagates_through_arithmetic() {
    assert!((Dip::UNSPECIFIED + Dip(1.0)).is_unspecified());
    assert!((Dip(1.0) - Dip::UNSPECIFIED).is_unspecified());
    assert!((Dip::UNSPECIFIED * 2).is_unspecified());
    assert!((Dip::UNSPECIFIED / Dip(2.0)).is_nan());
    assert!(Dip::UNSPECIFIED.coerce_in(Dip(0.0), Dip(10.0)).is_unspecified());
    // The unspecified sentinel is not "infinite".
    assert!(Dip::UNSPECIFIED.is_finite());
}

#[test]
fn coerce_in_clamps_to_range() {
    let min = Dip(1.0);
    let max = Dip(3.0);
    assert_eq!(Dip(0.5).coerce_in(min, max), Dp(1.0));
    assert_eq!(Dip(2.0).coerce_in(min, max), Dp(2.0));
    assert_eq!(Dip(3.0).coerce_in(min, max), Dp(3.0));
    assert_eq!(Dip(7.0).coerce_in(min, max), Dp(3.0));
    assert_eq!(Dip::INFINITY.coerce_in(min, max), Dp(3.0));
}

#[test]
fn coerce_at_least_and_at_most() {
    assert_eq!(Dip(-2.0).coerce_at_least(Dip::HAIRLINE), Dp(0.0));
    assert_eq!(Dip(2.0).coerce_at_least(Dip::HAIRLINE), Dp(2.0));
    assert_eq!(Dip(12.0).coerce_at_most(Dip(10.0)), Dp(10.0));
    assert_eq!(Dip(8.0).coerce_at_most(Dip(10.0)), Dp(8.0));
}

#[test]
fn inverted_range_does_not_panic() {
    assert_eq!(Dip(0.0).coerce_in(Dip(5.0), Dip(1.0)), Dp(5.0));
    assert_eq!(Dip(9.0).coerce_in(Dip(5.0), Dip(1.0)), Dp(1.0));
}

#[test]
fn compare_to_is_total() {
    assert_eq!(Dip(3.0).compare_to(Dip(1.0)), Ordering::Greater);
    assert_eq!(Dip(1.0).compare_to(Dip(3.0)), Ordering::Less);
    assert_eq!(Dip(2.0).compare_to(Dip(2.0)), Ordering::Equal);
    assert_eq!(Dip(-0.0).compare_to(Dip(0.0)), Ordering::Less);
    assert_eq!(Dip::UNSPECIFIED.compare_to(Dip::UNSPECIFIED), Ordering::Equal);
    assert_eq!(Dip::UNSPECIFIED.compare_to(Dip::INFINITY), Ordering::Greater);
    assert_eq!(Dip(0.0).compare_to(Dip::UNSPECIFIED), Ordering::Less);
    assert_eq!(Dip::UNSPECIFIED.partial_cmp(&Dip(1.0)), None);
}

#[test]
fn literal_conversions() {
    assert_eq!(10.dip(), Dip(10.0));
    assert_eq!(10f32.dip(), Dip(10.0));
    assert_eq!(20.0_f64.dip(), Dip(20.0));
    assert_eq!(8.dp(), Dp(8.0));
    assert_eq!(Dp::from(4.dip()), Dp(4.0));
    assert_eq!(Dip::from(Dp(4.0)), Dip(4.0));
    assert_eq!(f32::from(Dip(2.5)), 2.5);
}

#[test]
fn display_formats_value_or_unspecified() {
    assert_eq!(Dip(16.0).to_string(), "16.0.dip");
    assert_eq!(Dip(0.5).to_string(), "0.5.dip");
    assert_eq!(Dip::UNSPECIFIED.to_string(), "Dip.Unspecified");
    assert_eq!(Dp(24.0).to_string(), "24.0.dp");
    assert_eq!(Dp::UNSPECIFIED.to_string(), "Dp.Unspecified");
}

#[test]
fn display_spells_out_infinity_and_large_magnitudes() {
    assert_eq!(Dip::INFINITY.to_string(), "Infinity.dip");
    assert_eq!((-Dip::INFINITY).to_string(), "-Infinity.dp");
    assert_eq!(Dip(1e10).to_string(), "1.0E10.dip");
    assert_eq!(Dp(2.5e7).to_string(), "2.5E7.dp");
    assert_eq!(Dp(1.5e-5).to_string(), "1.5E-5.dp");
    assert_eq!(Dip(9_999_999.0).to_string(), "9999999.0.dip");
    assert_eq!(Dip(-0.0).to_string(), "-0.0.dip");
}

#[test]
fn pixel_conversion_scales_by_density() {
    assert_eq!(Dip(10.0).to_px(2.5), 25.0);
    assert_eq!(Dip::from_px(30.0, 3.0), Dip(10.0));
    assert_eq!(Dp(4.0).to_px(2.0), 8.0);
    assert_eq!(Dp::from_px(8.0, 2.0), Dp(4.0));
}

#[test]
fn dip_rect_reports_width_and_height() {
    let rect = DipRect::new(Dip(10.0), Dip(20.0), Dip(110.0), Dip(70.0));
    assert_eq!(rect.width(), Dp(100.0));
    assert_eq!(rect.height(), Dp(50.0));
}
