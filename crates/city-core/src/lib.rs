pub mod ascii;
pub mod boot;
pub mod constants;
pub mod flight;
pub mod state;
pub mod tuner;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use ascii::*;
pub use constants::*;
pub use flight::*;
pub use state::*;
pub use tuner::*;
