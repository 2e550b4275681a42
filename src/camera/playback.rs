use super::{CameraFrame, CameraPath, Frames};

/// Frame-by-frame playback of a camera path, one frame per tick
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    frames: Frames<'a>,
    emitted: usize,
    cancelled: bool,
}

impl<'a> Playback<'a> {
    pub fn new(path: &'a CameraPath) -> Self {
        Self {
            frames: path.iter(),
            emitted: 0,
            cancelled: false,
        }
    }

    /// Next frame in order, or `None` once finished or cancelled
    pub fn tick(&mut self) -> Option<CameraFrame> {
        if self.cancelled {
            return None;
        }
        let frame = self.frames.next()?;
        self.emitted += 1;
        Some(frame)
    }

    /// Stop emitting; frames already delivered stay delivered
    pub fn cancel(&mut self) {
        if !self.cancelled {
            tracing::debug!(emitted = self.emitted, "playback cancelled");
        }
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.frames.len() == 0
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn remaining(&self) -> usize {
        if self.cancelled {
            0
        } else {
            self.frames.len()
        }
    }
}
