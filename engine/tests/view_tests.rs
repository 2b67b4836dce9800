//! View Tests - Transform Composition and Inversion
//!
//! Tests for the world-to-screen mapping: forward/inverse agreement, the
//! component-replacing model transform and recovery from singular inputs.

use std::cell::RefCell;
use std::sync::Once;

use glam::{Mat4, Vec2};
use log::{Level, LevelFilter, Log, Metadata, Record};
use shapely_engine::view::{
    ModelTransform, ViewInputs, ViewState, ViewTransform, ViewUpdate, Viewport,
};

// ============================================================================
// Log capture
// ============================================================================

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records each message on the thread that logged it, so parallel tests
/// only see their own output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn start_capture() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

fn captured_warnings() -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

fn assert_close(a: Vec2, b: Vec2, tolerance: f32) {
    assert!((a - b).length() <= tolerance, "{a:?} vs {b:?}");
}

fn sample_points() -> Vec<Vec2> {
    vec![
        Vec2::ZERO,
        Vec2::new(1.0, -1.0),
        Vec2::new(250.0, 75.5),
        Vec2::new(-640.0, 480.0),
        Vec2::new(0.125, 3000.0),
    ]
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_identity_model_round_trip() {
    let view = ViewTransform::compose(&ViewInputs::default()).unwrap();
    for p in sample_points() {
        assert_close(view.unproject(view.project(p)), p, 1e-2);
    }
}

#[test]
fn test_full_transform_round_trip() {
    let model = ModelTransform {
        translation: Vec2::new(12.0, -7.0),
        rotation: 1.1,
        scale: Vec2::new(2.5, 0.75),
        shear: Vec2::new(0.3, -0.2),
        reflected: true,
    };
    let inputs = ViewInputs {
        camera: Vec2::new(-40.0, 18.0),
        model,
        viewport: Viewport::new(1024.0, 768.0),
    };
    let view = ViewTransform::compose(&inputs).unwrap();
    for p in sample_points() {
        let tolerance = 1e-4 * p.length().max(1.0);
        assert_close(view.unproject(view.project(p)), p, tolerance.max(1e-2));
    }
}

#[test]
fn test_forward_and_inverse_matrices_multiply_to_identity() {
    let mut model = ModelTransform::default();
    model.set_rotation_degrees(45.0);
    model.set_scale_y(3.0);
    let view = ViewTransform::compose(&ViewInputs {
        model,
        ..Default::default()
    })
    .unwrap();

    let product = view.world_to_screen() * view.screen_to_world();
    assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
}

#[test]
fn test_model_transform_applied_before_camera() {
    let mut model = ModelTransform::default();
    model.set_scale_x(2.0);
    let inputs = ViewInputs {
        camera: Vec2::new(10.0, 0.0),
        model,
        viewport: Viewport::new(100.0, 100.0),
    };
    let view = ViewTransform::compose(&inputs).unwrap();

    // (5, 0) -> scaled to (10, 0) -> camera to (20, 0) -> 20 / 100
    assert_close(view.project(Vec2::new(5.0, 0.0)), Vec2::new(0.2, 0.0), 1e-6);
}

// ============================================================================
// Singular inputs
// ============================================================================

#[test]
fn test_zero_scale_warns_and_keeps_previous_transform() {
    start_capture();
    let mut state = ViewState::default();
    assert_eq!(state.recompute(), ViewUpdate::Adopted);

    let mut inputs = *state.inputs();
    inputs.model.set_translate_x(50.0);
    state.submit(inputs);
    assert_eq!(state.recompute(), ViewUpdate::Adopted);
    let good = *state.transform();
    assert!(captured_warnings().is_empty());

    inputs.model.set_scale_x(0.0);
    state.submit(inputs);
    assert_eq!(state.recompute(), ViewUpdate::Rejected);
    assert_eq!(*state.transform(), good);

    let warnings = captured_warnings();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].starts_with("[ViewState] Non-invertible view transform"));

    // Restoring the scale recovers without another warning
    inputs.model.set_scale_x(1.0);
    state.submit(inputs);
    assert_eq!(state.recompute(), ViewUpdate::Adopted);
    assert_eq!(*state.transform(), good);
    assert_eq!(captured_warnings().len(), 1);
}

#[test]
fn test_collapsing_shear_is_rejected() {
    // shear.x * shear.y == 1 makes the shear matrix singular
    let mut model = ModelTransform::default();
    model.set_shear_x(2.0);
    model.set_shear_y(0.5);
    let inputs = ViewInputs {
        model,
        ..Default::default()
    };
    assert!(ViewTransform::compose(&inputs).is_none());
}

#[test]
fn test_non_finite_matrix_is_rejected() {
    let broken = Mat4::from_scale(glam::Vec3::new(f32::NAN, 1.0, 1.0));
    assert!(ViewTransform::from_matrix(broken).is_none());
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn test_pointer_round_trip_through_view() {
    let viewport = Viewport::new(800.0, 600.0);
    let view = ViewTransform::compose(&ViewInputs {
        camera: Vec2::new(-25.0, 40.0),
        viewport,
        ..Default::default()
    })
    .unwrap();

    let world = Vec2::new(-120.0, 65.0);
    let pixel = viewport.from_ndc(view.project(world));
    let back = view.unproject(viewport.to_ndc(pixel));
    assert_close(back, world, 1e-2);
}

#[test]
fn test_world_origin_at_surface_centre_without_camera() {
    let viewport = Viewport::new(640.0, 480.0);
    let view = ViewTransform::compose(&ViewInputs {
        viewport,
        ..Default::default()
    })
    .unwrap();
    assert_close(viewport.from_ndc(view.project(Vec2::ZERO)), Vec2::new(320.0, 240.0), 1e-4);
}
