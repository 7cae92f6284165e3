use glam::Vec3;

// Shared tuning constants for the carousel, camera path and section animations.

// Features carousel
pub const SNAP_GROUP_CARDS: usize = 4; // cards per snap unit when a drag settles
pub const CAROUSEL_LOOP_SEC: f32 = 20.0; // time to auto-scroll through one full cycle
pub const CAROUSEL_COPIES: usize = 3; // physical strip = COPIES * item count

// Trust bar marquee
pub const MARQUEE_LOOP_SEC: f32 = 30.0;
pub const MARQUEE_TILE_WIDTH_PX: f32 = 280.0;

// Stats counters
pub const COUNTER_DURATION_SEC: f32 = 2.0;
pub const COUNTER_START_DELAY_SEC: f32 = 0.3;

// Scroll-triggered reveals
pub const REVEAL_THRESHOLD: f32 = 0.3; // visible fraction that triggers a reveal
pub const REVEAL_RISE_PX: f32 = 30.0;
pub const REVEAL_DURATION_SEC: f32 = 0.8;

// Page layout
pub const SECTION_COUNT: usize = 8; // full-viewport sections, out1..out8

// Camera lens
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 50.0;
pub const CAMERA_FOLLOW_TAU_SEC: f32 = 0.35; // smoothing of scroll progress

// Asset resolution
pub const FALLBACK_ORIGIN: &str = "http://localhost:3000";

// Backdrop model placement (world space)
pub const EARTH_POSITION: [f32; 3] = [-13.0, 0.0, -300.0];
pub const STATION_POSITION: [f32; 3] = [-10.0, 0.0, -320.0];
pub const VOYAGER_POSITION: [f32; 3] = [-210.0, -35.05, -180.16];
pub const SPACE_POSITION: [f32; 3] = [-10.0, -150.0, 60.0];

// Idle motion
pub const VOYAGER_BOB_AMPLITUDE: f32 = 0.004;
pub const VOYAGER_BOB_RATE: f32 = 2.0; // rad/s of the bob sine
pub const VOYAGER_SPIN_RATE: f32 = 0.1; // rad/s about Y
pub const SPACE_SPIN_RATE: f32 = -0.0003;
pub const COPTER_SPIN_RATE: f32 = 0.1;

#[inline]
pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}
