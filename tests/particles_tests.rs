// Host-side tests for the particle field, the camera projection helpers and
// the backdrop capability state.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use camera::*;
use glam::{Vec2, Vec3};
use particles::*;

fn small_params() -> ParticleParams {
    ParticleParams {
        count: 256,
        ..ParticleParams::default()
    }
}

#[test]
fn default_params() {
    let p = ParticleParams::default();
    assert_eq!(p.count, 2000);
    assert_eq!(p.extent, 40.0);
    assert_eq!(p.repel_radius, 4.0);
    assert_eq!(p.repel_strength, 0.5);
    assert_eq!(p.return_ratio, 0.05);
}

#[test]
fn homes_lie_inside_the_cube_and_are_seeded() {
    let a = ParticleField::new(small_params(), 7);
    let b = ParticleField::new(small_params(), 7);
    let c = ParticleField::new(small_params(), 8);
    assert_eq!(a.len(), 256);
    assert_eq!(a.home(), b.home());
    assert_ne!(a.home(), c.home());
    for h in a.home() {
        assert!(h.abs().max_element() <= 20.0);
    }
    assert_eq!(a.positions(), a.home());
}

#[test]
fn buffer_length_never_changes() {
    let mut f = ParticleField::new(small_params(), 1);
    let ptr = f.positions().as_ptr();
    for frame in 0..120 {
        let t = frame as f32 / 60.0;
        f.step(t, Vec3::new(t.sin() * 5.0, t.cos() * 5.0, 0.0));
        assert_eq!(f.len(), 256);
    }
    assert_eq!(f.positions().as_ptr(), ptr);
}

#[test]
fn far_cursor_keeps_particles_near_home() {
    let mut f = ParticleField::new(small_params(), 3);
    let far = Vec3::splat(1.0e4);
    for frame in 0..600 {
        f.step(frame as f32 / 60.0, far);
    }
    // Floating offset is at most amplitude * sqrt(3) from home.
    let bound = f.params().float_amplitude * 3.0_f32.sqrt() + 1e-3;
    for (p, h) in f.positions().iter().zip(f.home()) {
        assert!(p.distance(*h) <= bound, "{p:?} drifted from {h:?}");
    }
}

#[test]
fn nearby_particle_is_pushed_away() {
    let params = ParticleParams {
        count: 1,
        float_amplitude: 0.0,
        ..ParticleParams::default()
    };
    let mut f = ParticleField::new(params, 11);
    let home = f.home()[0];
    let cursor = home + Vec3::new(1.0, 0.0, 0.0);
    let before = f.positions()[0].distance(cursor);
    f.step(0.0, cursor);
    let after = f.positions()[0].distance(cursor);
    assert!(after > before, "before={before} after={after}");
    // Pushed along -x, away from a cursor sitting at +x.
    assert!(f.positions()[0].x < home.x);
}

#[test]
fn cursor_outside_radius_has_no_effect() {
    let params = ParticleParams {
        count: 1,
        float_amplitude: 0.0,
        ..ParticleParams::default()
    };
    let mut f = ParticleField::new(params, 11);
    let home = f.home()[0];
    f.step(0.0, home + Vec3::new(4.5, 0.0, 0.0));
    assert!(f.positions()[0].distance(home) < 1e-5);
}

#[test]
fn cursor_on_particle_does_not_produce_nan() {
    let params = ParticleParams {
        count: 1,
        ..ParticleParams::default()
    };
    let mut f = ParticleField::new(params, 5);
    let at = f.positions()[0];
    f.step(0.0, at);
    assert!(f.positions()[0].is_finite());
}

#[test]
fn rotation_grows_with_time() {
    let f = ParticleField::new(small_params(), 0);
    assert_eq!(f.rotation(0.0), (0.0, 0.0));
    let (x, y) = f.rotation(100.0);
    assert!((x - 1.0).abs() < 1e-6);
    assert!((y - 2.0).abs() < 1e-6);
}

#[test]
fn backdrop_mode_is_decided_once() {
    assert_eq!(BackdropMode::Pending.resolve(true), BackdropMode::Particles);
    assert_eq!(BackdropMode::Pending.resolve(false), BackdropMode::Fallback);
    assert!(BackdropMode::Particles.is_animating());
    assert!(!BackdropMode::Pending.is_animating());

    // Fallback is sticky.
    let lost = BackdropMode::Particles.context_lost();
    assert_eq!(lost, BackdropMode::Fallback);
    assert_eq!(lost.resolve(true), BackdropMode::Fallback);
    assert_eq!(BackdropMode::Particles.resolve(false), BackdropMode::Particles);
}

#[test]
fn client_coordinates_map_to_ndc() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn cursor_projects_onto_visible_plane() {
    let cam = Camera::with_viewport(1600, 900);
    let extent = cam.visible_extent();
    // 2 * tan(37.5 deg) * 15
    assert!((extent.y - 23.02).abs() < 0.01, "{extent:?}");
    assert!((extent.x / extent.y - 16.0 / 9.0).abs() < 1e-5);

    let corner = cam.cursor_on_target_plane(Vec2::new(1.0, 1.0));
    assert!((corner.x - extent.x / 2.0).abs() < 1e-4);
    assert!((corner.y - extent.y / 2.0).abs() < 1e-4);
    assert_eq!(corner.z, 0.0);
    assert_eq!(cam.cursor_on_target_plane(Vec2::ZERO), Vec3::ZERO);
}

#[test]
fn degenerate_viewport_keeps_finite_aspect() {
    let cam = Camera::with_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
    assert!(cam.projection_matrix().is_finite());
}
