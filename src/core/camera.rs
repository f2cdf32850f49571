use glam::{Mat4, Vec2, Vec3};

// Perspective camera used by the particle backdrop. Positions and the
// projected cursor are expressed in the same world space.

pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn with_viewport(width: u32, height: u32) -> Self {
        let mut cam = Self::default();
        cam.set_viewport(width, height);
        cam
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Width and height (world units) of the visible area on the plane
    /// through `target` facing the camera.
    pub fn visible_extent(&self) -> Vec2 {
        let distance = (self.eye - self.target).length();
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        Vec2::new(height * self.aspect, height)
    }

    /// Map a pointer in normalized device coordinates (x right, y up, both
    /// in [-1, 1]) onto the target plane.
    pub fn cursor_on_target_plane(&self, ndc: Vec2) -> Vec3 {
        let half = self.visible_extent() * 0.5;
        Vec3::new(ndc.x * half.x, ndc.y * half.y, self.target.z)
    }
}

/// Window client coordinates to NDC (x right, y up). Degenerate viewports
/// map to the centre.
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -((client_y / height) * 2.0 - 1.0),
    )
}
