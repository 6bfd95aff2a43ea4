// Shared tuning constants used by both the core logic and the web frontend.

// Flight scheduling
pub const PATH_RATE: f32 = 0.003; // progress per tick along the active path
pub const TRANSITION_RATE: f32 = 0.015; // progress per tick while blending (~67 frames)
pub const TRANSITION_TRIGGER: f32 = 0.9; // path progress at which the hand-off begins
pub const BASE_LERP: f32 = 0.08; // floor of the steady-flight pull coefficient
pub const MAX_LERP: f32 = 0.12; // cap of the steady-flight pull coefficient
pub const LERP_DISTANCE_GAIN: f32 = 0.0005; // coefficient growth per world unit of error

// Camera framing
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const FIT_DISTANCE_MARGIN: f32 = 1.5; // pull back past the exact fit

// ASCII sampling: one character cell covers this many viewport pixels. The
// 3:6 ratio roughly matches monospace glyph proportions.
pub const CELL_WIDTH_PX: u32 = 3;
pub const CELL_HEIGHT_PX: u32 = 6;

// Radio tuner
pub const CHANNEL_COUNT: usize = 24;
pub const BASE_FREQUENCY_MHZ: f32 = 88.0;
pub const CHANNEL_SPACING_MHZ: f32 = 1.0;
pub const DRAG_SENSITIVITY_MHZ_PER_PX: f32 = 0.5;
pub const SNAP_THRESHOLD_MHZ: f32 = 0.5;
pub const DISPLAY_SMOOTHING: f32 = 0.15; // fraction of remaining distance per tick
pub const DISPLAY_EPSILON_MHZ: f32 = 0.01;
pub const PLAYBACK_VOLUME: f64 = 0.7;

// Asset loading
pub const MODEL_LOAD_TIMEOUT_MS: i32 = 60_000;

// Renderer
pub const POINT_SIZE_PX: f32 = 2.5;
pub const MAX_MODEL_POINTS: usize = 60_000;
