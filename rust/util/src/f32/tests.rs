use proptest::prelude::*;

use crate::f32::{lerp, rescale, rescale_points};

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn lerp_hits_endpoints(a in -1e6f32..1e6, b in -1e6f32..1e6) {
        prop_assert_eq!(lerp(a, b, 0.0), a);
        prop_assert_eq!(lerp(a, b, 1.0), b);
    }
}

proptest! {
    #[test]
    #[cfg_attr(miri, ignore)]
    fn rescale_maps_range_ends(
        from_low in -1e3f32..1e3,
        from_width in 0.1f32..1e3,
        to_low in -1e3f32..1e3,
        to_width in 0.1f32..1e3,
    ) {
        let from = from_low..=(from_low + from_width);
        let to = to_low..=(to_low + to_width);
        let at_start = rescale(*from.start(), from.clone(), to.clone());
        let at_end = rescale(*from.end(), from, to);
        prop_assert!((at_start - to_low).abs() <= 1e-2);
        prop_assert!((at_end - (to_low + to_width)).abs() <= 1e-2);
    }
}

#[test]
fn rescale_points_midpoint() {
    assert!((rescale_points(0.5, 0., 1., 10., 20.) - 15.).abs() <= 1e-6);
}
