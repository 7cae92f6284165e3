// DOM hooks and frame tuning for the web frontend.
// Element ids here must match the markup served with the wasm bundle.

// Backdrop canvas handed to the external 3D renderer
pub const CANVAS_ID: &str = "app-canvas";

// Features carousel
pub const FEATURES_VIEWPORT_ID: &str = "features-viewport"; // clipping container
pub const FEATURES_STRIP_ID: &str = "features-strip"; // translated row of slides
pub const CARDS_VISIBLE: f32 = 4.0; // slides that fit the viewport width

// Trust bar
pub const TRUST_STRIP_ID: &str = "trust-strip";

// Stats counters: ids are prefix + index
pub const STAT_VALUE_ID_PREFIX: &str = "stat-value-";
pub const NUMBERS_SECTION_ID: &str = "numbers-section"; // reveal here starts the counters

// Reveals
pub const REVEAL_ATTR: &str = "data-reveal"; // value selects the transition
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

// Loader
pub const LOADER_ID: &str = "loader-overlay";
pub const LOADER_BAR_ID: &str = "loader-bar";
pub const LOADER_LABEL_ID: &str = "loader-label";
pub const HIDDEN_CLASS: &str = "hidden";

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp long gaps (tab switches) to one short step
pub const TRANSFORM_EPSILON_PX: f32 = 0.01; // skip style writes below this change
