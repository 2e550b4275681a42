use super::{CameraError, CameraFrame};
use std::f64::consts::TAU;
use std::iter::FusedIterator;

/// Closed-loop orbit around the z axis
///
/// The path makes one full azimuthal revolution at constant elevation while
/// the horizontal radius shrinks by `zoom_factor` at the half-way point and
/// grows back. It holds only the closed-form parameters; frames are computed
/// on demand, so iterating it again yields the same sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    start: CameraFrame,
    steps: usize,
    zoom_factor: f64,
    radius: f64,
    initial_angle: f64,
}

impl CameraPath {
    pub fn generate(
        start: CameraFrame,
        steps: usize,
        zoom_factor: f64,
    ) -> Result<Self, CameraError> {
        if !start.is_finite() {
            return Err(CameraError::InvalidInput(format!(
                "Start eye must be finite, got {:?}",
                start
            )));
        }
        if !zoom_factor.is_finite() {
            return Err(CameraError::InvalidInput(format!(
                "Zoom factor must be finite, got {}",
                zoom_factor
            )));
        }

        Ok(Self {
            start,
            steps,
            zoom_factor,
            radius: (start.x * start.x + start.y * start.y).sqrt(),
            initial_angle: start.y.atan2(start.x),
        })
    }

    pub fn start(&self) -> CameraFrame {
        self.start
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Horizontal distance of `start` from the z axis
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of frames, always `steps + 1`
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Frame `s`; the last one is `start` verbatim
    pub fn frame(&self, s: usize) -> Option<CameraFrame> {
        if s > self.steps {
            return None;
        }
        if s == self.steps {
            return Some(self.start);
        }

        let phase = TAU * s as f64 / self.steps as f64;
        let angle = self.initial_angle + phase;
        let r = self.radius * (1.0 - self.zoom_factor * (1.0 - phase.cos()) / 2.0);

        Some(CameraFrame::new(r * angle.cos(), r * angle.sin(), self.start.z))
    }

    pub fn iter(&self) -> Frames<'_> {
        Frames {
            path: self,
            next: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<CameraFrame> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a CameraPath {
    type Item = CameraFrame;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the frames of a [`CameraPath`]
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    path: &'a CameraPath,
    next: usize,
}

impl Iterator for Frames<'_> {
    type Item = CameraFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.path.frame(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}
