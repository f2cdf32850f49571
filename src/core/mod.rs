pub mod camera;
pub mod contact;
pub mod hero;
pub mod navigation;
pub mod particles;
pub mod projects;
pub mod scroll_lock;
pub mod showcase;
pub mod views;

pub use camera::*;
pub use particles::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
