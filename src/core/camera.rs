use glam::{Mat4, Vec3};

/// Perspective camera at the origin looking down -Z; field of view in degrees.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(fov_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            znear,
            zfar,
            view_proj: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect.max(1e-4),
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Recompute the cached view-projection after changing fov/aspect/planes.
    pub fn update_projection(&mut self) {
        self.view_proj = self.projection_matrix() * self.view_matrix();
    }

    pub fn view_proj(&self) -> Mat4 {
        self.view_proj
    }
}
