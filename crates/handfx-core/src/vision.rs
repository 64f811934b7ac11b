use crate::error::FxError;
use crate::hand::Hand;

/// External hand landmark detector, queried once per frame.
///
/// Hand order follows the detector and is not stable across calls.
pub trait HandDetector {
    /// Whether the video source can be sampled yet. Frames before that skip
    /// detection entirely.
    fn ready(&self) -> bool {
        true
    }

    fn detect(&mut self, timestamp_ms: f64) -> Result<Vec<Hand>, FxError>;
}

/// Detector used when the vision model failed to load.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDetector;

impl HandDetector for NoDetector {
    fn ready(&self) -> bool {
        false
    }

    fn detect(&mut self, _timestamp_ms: f64) -> Result<Vec<Hand>, FxError> {
        Err(FxError::DetectorUnavailable("no vision model loaded".into()))
    }
}
