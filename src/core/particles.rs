use glam::{Mat4, Vec3};
use rand::prelude::*;

/// Tuning for the decorative particle field.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    /// Edge length of the cube (centred on the origin) homes are drawn from.
    pub extent: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    /// Fraction of the remaining distance covered toward the target each frame.
    pub return_ratio: f32,
    pub float_amplitude: f32,
    /// Angular frequency of the floating motion per axis (rad/s).
    pub float_rate: Vec3,
    /// Global spin around X and Y (rad/s).
    pub spin_rate_x: f32,
    pub spin_rate_y: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: 2000,
            extent: 40.0,
            repel_radius: 4.0,
            repel_strength: 0.5,
            return_ratio: 0.05,
            float_amplitude: 0.2,
            float_rate: Vec3::new(0.5, 0.4, 0.3),
            spin_rate_x: 0.01,
            spin_rate_y: 0.02,
        }
    }
}

/// Fixed-size point cloud. Both buffers are allocated once in `new` and are
/// indexed by particle id; `step` mutates `current` in place.
pub struct ParticleField {
    params: ParticleParams,
    home: Vec<Vec3>,
    current: Vec<Vec3>,
}

impl ParticleField {
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(params, &mut rng)
    }

    pub fn with_rng(params: ParticleParams, rng: &mut impl Rng) -> Self {
        let half = params.extent * 0.5;
        let home: Vec<Vec3> = (0..params.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                )
            })
            .collect();
        let current = home.clone();
        Self {
            params,
            home,
            current,
        }
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn home(&self) -> &[Vec3] {
        &self.home
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Floating target for particle `i` at `elapsed` seconds.
    pub fn float_target(&self, i: usize, elapsed: f32) -> Vec3 {
        let h = self.home[i];
        let r = self.params.float_rate;
        let a = self.params.float_amplitude;
        h + Vec3::new(
            (elapsed * r.x + h.x).sin(),
            (elapsed * r.y + h.y).cos(),
            (elapsed * r.z + h.z).sin(),
        ) * a
    }

    /// Advance one frame. `cursor` is the projected pointer in the field's
    /// local space.
    pub fn step(&mut self, elapsed: f32, cursor: Vec3) {
        let radius = self.params.repel_radius;
        let strength = self.params.repel_strength;
        let ratio = self.params.return_ratio;
        for i in 0..self.current.len() {
            let mut p = self.current[i];
            let dist = p.distance(cursor);
            if dist < radius {
                let force = (radius - dist) / radius;
                p += (p - cursor).normalize_or_zero() * (force * strength);
            }
            let target = self.float_target(i, elapsed);
            self.current[i] = p.lerp(target, ratio);
        }
    }

    /// Global rotation (x, y) in radians; applied to the whole set.
    pub fn rotation(&self, elapsed: f32) -> (f32, f32) {
        (
            elapsed * self.params.spin_rate_x,
            elapsed * self.params.spin_rate_y,
        )
    }

    pub fn model_matrix(&self, elapsed: f32) -> Mat4 {
        let (rx, ry) = self.rotation(elapsed);
        Mat4::from_rotation_x(rx) * Mat4::from_rotation_y(ry)
    }
}

/// What the backdrop is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropMode {
    /// Capability check still running; plain background.
    Pending,
    Particles,
    /// CSS gradient. Once entered it is never left.
    Fallback,
}

impl BackdropMode {
    pub fn resolve(self, gpu_available: bool) -> Self {
        match self {
            BackdropMode::Pending if gpu_available => BackdropMode::Particles,
            BackdropMode::Pending => BackdropMode::Fallback,
            other => other,
        }
    }

    pub fn context_lost(self) -> Self {
        BackdropMode::Fallback
    }

    pub fn is_animating(self) -> bool {
        self == BackdropMode::Particles
    }
}
