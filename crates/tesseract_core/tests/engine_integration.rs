//! Integration tests for the frame pipeline
//!
//! These tests drive the engine the way a renderer does:
//! 1. Initialize once and index draw objects by vertex/edge position
//! 2. Pull angles from the animation driver each frame
//! 3. Rotate and project every vertex

use std::f64::consts::FRAC_PI_2;

use tesseract_core::{
    color_class_of, AnimationDriver, EngineError, RotationMode, TesseractEngine, Wireframe4D,
};
use tesseract_math::{project, Projector, RotationAngles, Rotor4D, Vec4};

const EPSILON: f64 = 1e-9;

// ==================== Initialization Tests ====================

#[test]
fn test_tables_match_renderer_contract() {
    let engine = TesseractEngine::initialize(16).unwrap();

    assert_eq!(engine.vertices().len(), 16);
    assert_eq!(engine.edges().len(), 32);

    for edge in engine.edges() {
        assert_eq!(edge.color_class, color_class_of(edge.a, edge.b));
        assert_eq!((edge.a ^ edge.b).count_ones(), 1);
    }
}

#[test]
fn test_invalid_counts_fail_fast() {
    for n in [0usize, 3, 6, 12, 15] {
        assert_eq!(
            TesseractEngine::initialize(n).unwrap_err(),
            EngineError::InvalidVertexCount(n)
        );
    }
}

#[test]
fn test_tables_are_shared_across_threads() {
    let engine = TesseractEngine::initialize(16).unwrap();
    let shape = engine.shape();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shape = shape.clone();
            std::thread::spawn(move || shape.edge_count())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 32);
    }
}

// ==================== Frame Tests ====================

#[test]
fn test_identity_frame_is_plain_projection() {
    let engine = TesseractEngine::initialize(16).unwrap();
    let frame = engine.compute_frame(RotationAngles::ZERO).unwrap();

    for (v, p) in engine.vertices().iter().zip(&frame) {
        assert_eq!(*p, project(*v, 1.5).unwrap());
    }
}

#[test]
fn test_quarter_xw_turn_swaps_x_into_w() {
    let r = Rotor4D::compose(RotationAngles::new(FRAC_PI_2, 0.0, 0.0));
    let v = r.apply(Vec4::X);
    assert!((v - Vec4::W).length() < EPSILON, "got {:?}", v);
}

#[test]
fn test_autorotated_frames_stay_finite_and_bounded() {
    let engine = TesseractEngine::initialize(16).unwrap();
    let driver = AnimationDriver::new();

    // A unit-radius tesseract under L = 1.5 has scale at most 1 / 0.5 = 2
    for step in 0..600 {
        let t = step as f64 / 60.0;
        let frame = engine.compute_frame(driver.angles(t)).unwrap();
        for p in &frame {
            assert!(p.is_finite());
            assert!(p.length() <= 2.0 + EPSILON, "step {} point {:?}", step, p);
        }
    }
}

#[test]
fn test_manual_mode_freezes_the_frame() {
    let engine = TesseractEngine::initialize(16).unwrap();
    let driver = AnimationDriver::new().with_mode(RotationMode::Manual);

    let a = engine.compute_frame(driver.angles(1.0)).unwrap();
    let b = engine.compute_frame(driver.angles(42.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_buffer_reuse_across_frames() {
    let engine = TesseractEngine::initialize(16).unwrap();
    let driver = AnimationDriver::new();
    let mut buffer = Vec::new();

    for step in 0..10 {
        let angles = driver.angles(step as f64 * 0.1);
        engine.compute_frame_into(&mut buffer, angles).unwrap();
        assert_eq!(buffer, engine.compute_frame(angles).unwrap());
    }
}

#[test]
fn test_light_inside_geometry_is_an_error() {
    let engine = TesseractEngine::initialize(16)
        .unwrap()
        .with_projector(Projector::new(0.5).unwrap());

    // Label 1 = 0b0001 has w = 0.5 before rotation
    match engine.compute_frame(RotationAngles::ZERO) {
        Err(EngineError::Projection { vertex, .. }) => assert_eq!(vertex, 1),
        other => panic!("expected projection error, got {:?}", other),
    }
}
