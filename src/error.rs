//! Error types
//!
//! Only setup can fail: decoding a level string, picking a level that is not
//! in the table, reading settings, or starting without a drawing surface.
//! A running simulation never errors.

use core::fmt;

/// Which part of a level string a decode error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Boundary + player start + target
    Geometry,
    /// Obstacle positions
    Obstacles,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry => write!(f, "geometry"),
            Self::Obstacles => write!(f, "obstacle"),
        }
    }
}

/// Malformed level string
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Segment length is not a multiple of 4 hex chars
    OddLength { segment: Segment, len: usize },
    /// A byte pair is not valid hex
    InvalidHex { segment: Segment, offset: usize },
    /// Not enough boundary points left after removing start and target
    TooFewPoints { found: usize, min: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength { segment, len } => write!(
                f,
                "{segment} segment has {len} hex chars, expected a multiple of 4"
            ),
            Self::InvalidHex { segment, offset } => {
                write!(f, "{segment} segment has invalid hex at offset {offset}")
            }
            Self::TooFewPoints { found, min } => write!(
                f,
                "level boundary has {found} points, need at least {min}"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Setup errors
#[derive(Debug)]
pub enum Error {
    Decode { index: Option<usize>, source: DecodeError },
    UnknownLevel { index: usize, count: usize },
    RenderUnavailable { reason: &'static str },
    Settings(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode {
                index: Some(index),
                source,
            } => write!(f, "level {} failed to decode: {source}", index + 1),
            Self::Decode {
                index: None,
                source,
            } => write!(f, "custom level failed to decode: {source}"),
            Self::UnknownLevel { index, count } => {
                write!(f, "level index {index} out of range (have {count} levels)")
            }
            Self::RenderUnavailable { reason } => write!(f, "render surface unavailable: {reason}"),
            Self::Settings(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(source: DecodeError) -> Self {
        Self::Decode {
            index: None,
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::OddLength {
            segment: Segment::Geometry,
            len: 7,
        };
        assert_eq!(
            err.to_string(),
            "geometry segment has 7 hex chars, expected a multiple of 4"
        );

        let err = Error::Decode {
            index: Some(2),
            source: DecodeError::TooFewPoints { found: 1, min: 2 },
        };
        assert_eq!(
            err.to_string(),
            "level 3 failed to decode: level boundary has 1 points, need at least 2"
        );
    }
}
