//! Start-button state machine
//!
//! The first trigger applies the cluster overlay; later triggers only
//! replay the camera path. The generated page runs the same logic in
//! JavaScript.

use crate::camera::{CameraPath, Playback};
use crate::page::ClusterOverlay;

pub struct Session<'a> {
    overlay: &'a ClusterOverlay,
    path: &'a CameraPath,
    overlay_applied: bool,
    triggers: usize,
}

/// Effects of one press of the start button
pub struct Trigger<'a> {
    /// Overlay to draw, present only on the first trigger
    pub overlay: Option<&'a ClusterOverlay>,
    /// Fresh playback from the first frame
    pub playback: Playback<'a>,
}

impl<'a> Session<'a> {
    pub fn new(overlay: &'a ClusterOverlay, path: &'a CameraPath) -> Self {
        Self {
            overlay,
            path,
            overlay_applied: false,
            triggers: 0,
        }
    }

    pub fn start(&mut self) -> Trigger<'a> {
        self.triggers += 1;

        let overlay = if self.overlay_applied {
            None
        } else {
            self.overlay_applied = true;
            Some(self.overlay)
        };

        tracing::debug!(
            trigger = self.triggers,
            apply_overlay = overlay.is_some(),
            "start triggered"
        );

        Trigger {
            overlay,
            playback: Playback::new(self.path),
        }
    }

    pub fn is_overlay_applied(&self) -> bool {
        self.overlay_applied
    }

    pub fn triggers(&self) -> usize {
        self.triggers
    }
}
