// DOM ids and frontend-only timing constants.

pub const ID_BOOT_SCREEN: &str = "boot-screen";
pub const ID_BOOT_TEXT: &str = "boot-text";
pub const ID_HIDDEN_CANVAS: &str = "hidden-canvas";
pub const ID_ASCII_DISPLAY: &str = "ascii-display";
pub const ID_LOADING: &str = "loading";
pub const ID_FREQUENCY_TEXT: &str = "frequency-text";
pub const ID_TIME_HOUR: &str = "time-hour";
pub const ID_RAIN_ICON: &str = "rain-icon";

pub const MODEL_URL: &str = "./washington_square_new_york_city.glb";

// Hour readout page-flip: swap the digits mid-animation, drop the class at
// the end.
pub const HOUR_FLIP_SWAP_MS: i32 = 250;
pub const HOUR_FLIP_DONE_MS: i32 = 500;
