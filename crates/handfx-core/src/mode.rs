use crate::error::FxError;
use std::fmt;
use std::str::FromStr;

/// Rendering mode selected from the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Cursor emitters only.
    #[default]
    Particles,
    Neural,
    Hologram,
    Matrix,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Particles, Mode::Neural, Mode::Hologram, Mode::Matrix];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Particles => "particles",
            Mode::Neural => "neural",
            Mode::Hologram => "hologram",
            Mode::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FxError::UnknownMode(s.to_string()))
    }
}
