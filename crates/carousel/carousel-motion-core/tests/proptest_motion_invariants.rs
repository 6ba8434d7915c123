use carousel_motion_core::position::{normalize_wrapped, PositionValue};
use carousel_motion_core::{ManualFrames, MotionConfig, MotionEngine, TrackGeometry};
use proptest::prelude::*;

proptest! {
    /// it should strictly shrink |velocity| every tick for any friction in (0, 1)
    #[test]
    fn velocity_decays_monotonically(friction in 0.01f64..0.99, v0 in 1.0f64..1000.0, sign in any::<bool>()) {
        let mut eng = MotionEngine::new(MotionConfig { friction, ..MotionConfig::default() });
        eng.apply_force(if sign { v0 } else { -v0 });
        let mut last = eng.velocity().abs();
        for _ in 0..20 {
            eng.integrate_physics();
            let v = eng.velocity().abs();
            prop_assert!(v < last);
            last = v;
        }
    }

    /// it should fold any position into [-extent, 0)
    #[test]
    fn wrap_normalization_in_range(position in -1.0e6f64..1.0e6, extent in 1.0f64..5000.0) {
        let n = normalize_wrapped(position, extent);
        prop_assert!(n >= -extent && n < 0.0, "position={position} extent={extent} n={n}");
    }

    /// it should keep pixel output on whole pixels
    #[test]
    fn pixel_values_are_whole(value in -1.0e5f64..1.0e5) {
        let v = PositionValue::from_offset(value, 500.0, false);
        prop_assert_eq!(v.amount().fract(), 0.0);
        prop_assert!((v.amount() - value).abs() <= 0.5);
    }

    /// it should always settle once released with no forces
    #[test]
    fn released_motion_settles(v0 in -200.0f64..200.0, friction in 0.05f64..0.95) {
        let mut eng = MotionEngine::new(MotionConfig { friction, percent_position: false, ..MotionConfig::default() });
        eng.set_geometry(TrackGeometry { viewport_extent: 400.0, ..TrackGeometry::default() });
        eng.apply_force(v0);
        let mut frames = ManualFrames::default();
        eng.start_animation(&mut frames);
        let mut ticks = 0;
        while frames.take_pending() {
            eng.on_frame(&mut frames);
            ticks += 1;
            prop_assert!(ticks < 10_000);
        }
        prop_assert!(!eng.is_animating());
        prop_assert!(eng.resting_frames() > 2);
    }
}
