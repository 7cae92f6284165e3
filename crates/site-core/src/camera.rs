//! Camera types handed to the 3D renderer.
//!
//! Nothing here references platform APIs. The web
//! frontend builds them from the path animator's current pose each frame and
//! exposes the plain numbers to whatever renderer draws the backdrop.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::error::{Result, SiteError};
use crate::path::Pose;
use glam::{Mat4, Vec3};

/// Perspective lens settings shared by every pose on the path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    pub fovy_deg: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fovy_deg: CAMERA_FOVY_DEG,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Lens {
    pub fn validate(&self) -> Result<()> {
        if !(self.fovy_deg > 0.0 && self.fovy_deg < 180.0) {
            return Err(SiteError::InvalidConfig(format!(
                "field of view must lie in (0, 180) degrees, got {}",
                self.fovy_deg
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(SiteError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got {} / {}",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }
}

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
    pub fn from_pose(pose: &Pose, aspect: f32, lens: &Lens) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: lens.fovy_deg.to_radians(),
            znear: lens.znear,
            zfar: lens.zfar,
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

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            eye: [self.eye.x, self.eye.y, self.eye.z, 1.0],
        }
    }
}

/// GPU-ready camera block, laid out for a uniform buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
}
