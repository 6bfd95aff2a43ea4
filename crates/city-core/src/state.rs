//! Camera and model-bounds types shared with the web frontend.
//!
//! These types avoid platform-specific APIs so the flight logic can be tested
//! on the host. The web frontend consumes them to build camera matrices.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, FIT_DISTANCE_MARGIN};

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

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// The mutable pose the flight scheduler drives each tick. The frontend
/// copies it into a [`Camera`] before rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Axis-aligned extent of the loaded model, derived once after load and
/// read-only afterwards. All flight trajectories scale off `size`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelBounds {
    pub size: Vec3,
    pub center: Vec3,
}

impl ModelBounds {
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            size: max - min,
            center: (min + max) * 0.5,
        }
    }

    /// A zero-extent model cannot parameterize a flight path.
    pub fn is_degenerate(&self) -> bool {
        self.size.length_squared() == 0.0
    }

    /// Camera distance that frames the whole model for the given vertical
    /// field of view, pulled back by a fixed margin.
    pub fn fit_distance(&self, fovy_radians: f32) -> f32 {
        let max_dim = self.size.x.max(self.size.y).max(self.size.z);
        (max_dim / 2.0 / (fovy_radians / 2.0).tan()).abs() * FIT_DISTANCE_MARGIN
    }
}
