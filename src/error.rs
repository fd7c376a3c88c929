//! Crate-level error types.

use std::fmt;

/// Errors produced by the viewroll crate.
#[derive(Debug)]
pub enum ViewRollError {
    /// The scene camera has at least one rotation axis locked
    /// (`[x, y, z]`). The session is refused before any state changes.
    LockedAxis([bool; 3]),
    /// A direction was requested between two coincident screen points.
    DegenerateVector,
    /// A camera frame corner projected behind the viewer or to a
    /// non-finite pixel position.
    DegenerateProjection,
    /// A rotation session is already running in this view.
    SessionActive,
    /// A session event arrived while no session was running.
    NoSession,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewRollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockedAxis([x, y, z]) => write!(
                f,
                "camera rotation is locked (x: {x}, y: {y}, z: {z})"
            ),
            Self::DegenerateVector => {
                write!(f, "pointer coincides with the rotation pivot")
            }
            Self::DegenerateProjection => {
                write!(f, "camera frame does not project onto the viewport")
            }
            Self::SessionActive => {
                write!(f, "a rotation session is already active")
            }
            Self::NoSession => write!(f, "no rotation session is active"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewRollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewRollError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ViewRollError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

impl From<toml::ser::Error> for ViewRollError {
    fn from(e: toml::ser::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}
