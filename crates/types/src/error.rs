//! Error taxonomy shared by the simulation crates.

use std::fmt;
use std::io;

/// Invalid construction-time parameters.
///
/// These are fatal for the value being built: an entity or simulation is never
/// constructed with a substituted default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RadiusTooSmall(i32),
    WidthTooSmall(i32),
    HeightTooSmall(i32),
    EmptyWindow { width: u32, height: u32 },
    ZeroFrameRate,
    SurfaceSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RadiusTooSmall(r) => {
                write!(f, "circles must have a radius of at least 1 (got {r})")
            }
            ConfigError::WidthTooSmall(w) => {
                write!(f, "rectangles must have a width of at least 1 (got {w})")
            }
            ConfigError::HeightTooSmall(h) => {
                write!(f, "rectangles must have a height of at least 1 (got {h})")
            }
            ConfigError::EmptyWindow { width, height } => {
                write!(f, "window must be at least 1x1 pixels (got {width}x{height})")
            }
            ConfigError::ZeroFrameRate => write!(f, "target frame rate must be positive"),
            ConfigError::SurfaceSizeMismatch { expected, actual } => write!(
                f,
                "display surface is {}x{} but the simulation is configured for {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failures of the simulation loop.
#[derive(Debug)]
pub enum SimError {
    Config(ConfigError),
    /// The display surface rejected the window title at start.
    Title(io::Error),
    /// The display surface failed to present a finished frame.
    Present(io::Error),
    /// The frame-cycle worker thread could not be spawned.
    Spawn(io::Error),
    AlreadyRunning,
    NotRunning,
    /// The frame-cycle worker panicked instead of returning.
    WorkerPanicked,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "configuration error: {e}"),
            SimError::Title(e) => write!(f, "failed to set window title: {e}"),
            SimError::Present(e) => write!(f, "failed to present frame: {e}"),
            SimError::Spawn(e) => write!(f, "failed to spawn frame worker: {e}"),
            SimError::AlreadyRunning => write!(f, "simulation is already running"),
            SimError::NotRunning => write!(f, "simulation is not running"),
            SimError::WorkerPanicked => write!(f, "frame worker panicked"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(e) => Some(e),
            SimError::Title(e) | SimError::Present(e) | SimError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}
