pub mod color;
pub mod input;
pub mod overlay;
pub mod pacer;
pub mod session;
pub mod surface;

pub use color::Color;
pub use input::{InputEvent, InputPoller};
pub use overlay::FpsOverlay;
pub use pacer::{FramePacer, FrameTiming};
pub use session::DisplaySession;
pub use surface::FrameSurface;

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

pub const TARGET_FPS: u64 = 60;
/// Target frame period in whole milliseconds (integer division, so 16ms not 16.67ms).
pub const FRAME_DELAY_MS: u64 = 1000 / TARGET_FPS;

pub const FONT_PATH: &str = "arial.ttf";
pub const FONT_SIZE: f32 = 24.0;
