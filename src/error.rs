//! .
//!
//! Error taxonomy of a fill session. Written out by hand, in the shape `error_chain!` would
//! expand to, so that the placement failures stay plain copyable values:
//! ```ignore
//! foreign_links {
//!   IoError(std::io::Error);
//!   JsonError(serde_json::Error);
//! }
//! errors {
//!   Load(path, ImageError)
//!   Config(String)
//!   Place(PlaceError)
//! }
//! ```
use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum Error {
  /// The source image could not be read or decoded. Fatal for the frame.
  Load {
    path: PathBuf,
    source: image::ImageError
  },
  IoError(std::io::Error),
  JsonError(serde_json::Error),
  /// Invalid fill configuration.
  Config(String),
  Place(PlaceError),
}

/// Outcome of a failed [`place_circle`](crate::solver::FillSession::place_circle).
/// Both variants are recoverable, and neither leaves a trace in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaceError {
  /// No foreground pixel is left; nothing else can be placed in this session.
  NoSpace,
  /// Every one of `attempts` random candidates failed the fit test for `radius`.
  GuardExhausted {
    radius: u32,
    attempts: u32
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::IoError(e)
  }
}
impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Error::JsonError(e)
  }
}
impl From<PlaceError> for Error {
  fn from(e: PlaceError) -> Self {
    Error::Place(e)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      Load { path, source } => write!(fmt, "unable to load {:?}: {}", path, source),
      IoError(err) => write!(fmt, "{}", err),
      JsonError(err) => write!(fmt, "{}", err),
      Config(msg) => write!(fmt, "invalid configuration: {}", msg),
      Place(err) => write!(fmt, "{}", err),
    }
  }
}

impl fmt::Display for PlaceError {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    match self {
      PlaceError::NoSpace => write!(fmt, "no foreground pixels left"),
      PlaceError::GuardExhausted { radius, attempts } =>
        write!(fmt, "guard reached: r = {} did not fit in {} attempts", radius, attempts),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Load { source, .. } => Some(source),
      Error::IoError(err) => Some(err),
      Error::JsonError(err) => Some(err),
      Error::Place(err) => Some(err),
      Error::Config(_) => None,
    }
  }
}

impl std::error::Error for PlaceError {}
