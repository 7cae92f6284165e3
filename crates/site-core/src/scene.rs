//! Placement of the backdrop models and the authored camera path through them.
//!
//! Only transforms are described here; loading and drawing the meshes belongs
//! to the renderer.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::Result;
use crate::path::{Keyframe, PathAnimator, Pose};
use crate::progress::Section;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Model {
    Earth,
    Space,
    Station,
    Voyager,
    Copter,
}

/// Per-frame motion a model performs on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdleMotion {
    Static,
    /// Constant rotation about Y, radians per second.
    Spin { rate: f32 },
    /// Vertical sine bob plus spin about Y.
    BobAndSpin {
        amplitude: f32,
        frequency: f32,
        spin_rate: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPlacement {
    pub model: Model,
    pub asset_path: &'static str,
    pub base: ModelTransform,
    pub motion: IdleMotion,
}

impl ModelPlacement {
    /// Transform after `elapsed_sec` seconds of idle motion.
    pub fn transform_at(&self, elapsed_sec: f32) -> ModelTransform {
        let t = if elapsed_sec.is_finite() {
            elapsed_sec.max(0.0)
        } else {
            0.0
        };
        let mut out = self.base;
        match self.motion {
            IdleMotion::Static => {}
            IdleMotion::Spin { rate } => out.rotation.y += rate * t,
            IdleMotion::BobAndSpin {
                amplitude,
                frequency,
                spin_rate,
            } => {
                out.position.y += (t * frequency).sin() * amplitude;
                out.rotation.y += spin_rate * t;
            }
        }
        out
    }
}

pub fn model_placements() -> Vec<ModelPlacement> {
    vec![
        ModelPlacement {
            model: Model::Earth,
            asset_path: "/assets/earth/earth.gltf",
            base: ModelTransform {
                position: vec3(EARTH_POSITION),
                rotation: Vec3::ZERO,
                scale: 10.0,
            },
            motion: IdleMotion::Static,
        },
        ModelPlacement {
            model: Model::Space,
            asset_path: "/assets/spaces/scene.gltf",
            base: ModelTransform {
                position: vec3(SPACE_POSITION),
                rotation: Vec3::new(-0.1, std::f32::consts::PI / 2.4, 0.0),
                scale: 100.0,
            },
            motion: IdleMotion::Spin {
                rate: SPACE_SPIN_RATE,
            },
        },
        ModelPlacement {
            model: Model::Station,
            asset_path: "/assets/station/scene.gltf",
            base: ModelTransform {
                position: vec3(STATION_POSITION),
                rotation: Vec3::ZERO,
                scale: 0.4,
            },
            motion: IdleMotion::Static,
        },
        ModelPlacement {
            model: Model::Voyager,
            asset_path: "/assets/voyager/scene.gltf",
            base: ModelTransform {
                position: vec3(VOYAGER_POSITION),
                rotation: Vec3::new(0.1, std::f32::consts::PI / 3.8, -1.1),
                scale: 0.01,
            },
            motion: IdleMotion::BobAndSpin {
                amplitude: VOYAGER_BOB_AMPLITUDE,
                frequency: VOYAGER_BOB_RATE,
                spin_rate: VOYAGER_SPIN_RATE,
            },
        },
        ModelPlacement {
            model: Model::Copter,
            asset_path: "/assets/copter/scene.gltf",
            base: ModelTransform {
                position: Vec3::new(-0.5, -0.8, 0.0),
                rotation: Vec3::new(0.2, -0.4, -0.3),
                scale: 0.3,
            },
            motion: IdleMotion::Spin {
                rate: COPTER_SPIN_RATE,
            },
        },
    ]
}

/// Camera stop for each page section, keyed by the section's scroll progress.
pub fn camera_keyframes() -> Vec<Keyframe> {
    let earth = vec3(EARTH_POSITION);
    let station = vec3(STATION_POSITION);
    let voyager = vec3(VOYAGER_POSITION);
    let stop = |section: Section, position: Vec3, look_at: Vec3| {
        Keyframe::new(section.progress(), Pose::new(position, look_at))
    };
    vec![
        stop(Section::Hero, Vec3::new(-13.0, 0.0, -262.0), earth),
        stop(Section::Mission, Vec3::new(-2.0, 4.0, -270.0), earth),
        stop(Section::Divisions, Vec3::new(-28.0, 6.0, -285.0), earth),
        stop(Section::TrustBar, Vec3::new(-22.0, 3.0, -300.0), station),
        // long transfer to the probe: ease in and out over the whole leg
        stop(Section::Numbers, Vec3::new(-4.0, 1.5, -308.0), station)
            .with_easing(Easing::EaseInOut),
        stop(Section::Features, Vec3::new(-190.0, -30.0, -172.0), voyager),
        stop(Section::About, Vec3::new(-202.0, -34.0, -174.0), voyager),
        stop(Section::Contact, Vec3::new(-13.0, 8.0, -250.0), earth),
    ]
}

pub fn camera_path() -> Result<PathAnimator> {
    PathAnimator::clamped(camera_keyframes())
}
