//! Construction-time failures for authored data and configuration.
//!
//! Query paths (`pose_at`, `tick`, gesture handlers) never fail; anything that
//! could make them produce an undefined result is rejected here instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("camera path needs at least one keyframe")]
    EmptyKeyframes,
    #[error("keyframe {index} has a non-finite threshold or pose")]
    NonFiniteKeyframe { index: usize },
    #[error("keyframe {index} threshold {threshold} does not increase past {previous}")]
    NonIncreasingThreshold {
        index: usize,
        previous: f32,
        threshold: f32,
    },
    #[error("looping camera path must end on the pose it starts with")]
    OpenLoop,
    #[error("carousel needs at least one item")]
    EmptyItems,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
