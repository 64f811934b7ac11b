//! Heads-up statistics: frame rate, system status and per-frame stats.

use crate::effects::EffectCounts;
use crate::mode::Mode;

/// Frames counted over windows of at least one second.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
    frames: u32,
    window_start_ms: Option<f64>,
    fps: u32,
}

impl FpsMeter {
    pub const WINDOW_MS: f64 = 1000.0;

    /// Count a frame; returns the new rate when a window closes.
    pub fn frame(&mut self, now_ms: f64) -> Option<u32> {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed >= Self::WINDOW_MS {
            self.fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
            return Some(self.fps);
        }
        None
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemStatus {
    Optimal,
    Stable,
    Degraded,
}

impl SystemStatus {
    pub fn from_fps(fps: u32) -> Self {
        if fps > 45 {
            SystemStatus::Optimal
        } else if fps > 25 {
            SystemStatus::Stable
        } else {
            SystemStatus::Degraded
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Optimal => "OPTIMAL",
            SystemStatus::Stable => "STABLE",
            SystemStatus::Degraded => "DEGRADED",
        }
    }

    /// Class list for the status indicator dot.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            SystemStatus::Optimal => "status-indicator status-online",
            SystemStatus::Stable => "status-indicator status-scanning",
            SystemStatus::Degraded => "status-indicator status-detecting",
        }
    }
}

/// What one tick produced, for the HUD.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStats {
    pub hands: usize,
    pub gesture: String,
    pub particles: usize,
    pub confidence: f32,
    pub mode: Mode,
    pub effects: EffectCounts,
}

impl FrameStats {
    pub fn confidence_percent(&self) -> String {
        format!("{}%", (self.confidence * 100.0).round() as i32)
    }
}
