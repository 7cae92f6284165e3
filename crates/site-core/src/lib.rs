//! Numeric state behind the site's moving parts: the looping features
//! carousel, the scroll-driven camera path, and the smaller section
//! animations. Nothing here touches the DOM or a GPU; the web frontend feeds
//! in measurements, gestures, scroll positions and frame times, and applies
//! the offsets and poses that come back.

pub mod assets;
pub mod camera;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod counter;
pub mod easing;
pub mod error;
pub mod gesture;
pub mod marquee;
pub mod path;
pub mod progress;
pub mod reveal;
pub mod scene;

pub use assets::resolve_asset_url;
pub use camera::{Camera, CameraUniform, Lens};
pub use carousel::{CardContent, CarouselPhase, InfiniteCarousel};
pub use clock::LoopClock;
pub use config::{CarouselConfig, MarqueeConfig, SiteConfig};
pub use counter::CountUp;
pub use easing::Easing;
pub use error::{Result, SiteError};
pub use gesture::PointerTracker;
pub use marquee::Marquee;
pub use path::{Keyframe, PathAnimator, PathMode, Pose};
pub use progress::{
    ElapsedProgress, ManualProgress, ProgressFollower, ProgressSource, ScrollProgress, Section,
};
pub use reveal::{RevealFrame, RevealTransition, RevealTrigger};
pub use scene::{IdleMotion, Model, ModelPlacement, ModelTransform};
