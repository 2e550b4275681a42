mod error;
mod frame;
mod path;
mod playback;


pub use error::CameraError;
pub use frame::CameraFrame;
pub use path::{CameraPath, Frames};
pub use playback::Playback;

/// Shorthand for [`CameraPath::generate`]
pub fn generate(
    start: CameraFrame,
    steps: usize,
    zoom_factor: f64,
) -> Result<CameraPath, CameraError> {
    CameraPath::generate(start, steps, zoom_factor)
}
