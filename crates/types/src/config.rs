//! Construction-time configuration for a simulation.

use crate::{
    Color, ConfigError, DEFAULT_BACKGROUND, DEFAULT_TARGET_FPS, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_TITLE, DEFAULT_WINDOW_WIDTH,
};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub title: String,
    pub background: Color,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Emit a timing summary every [`crate::DEBUG_SUMMARY_EVERY`] frames.
    pub debug_summary: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            background: DEFAULT_BACKGROUND,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            debug_summary: false,
        }
    }
}

impl SimConfig {
    /// Create from environment variables, falling back to defaults for anything
    /// missing or unparseable.
    ///
    /// Recognized: `PIXEL_BOUNCE_TITLE`, `PIXEL_BOUNCE_BACKGROUND`,
    /// `PIXEL_BOUNCE_WIDTH`, `PIXEL_BOUNCE_HEIGHT`, `PIXEL_BOUNCE_FPS`,
    /// `PIXEL_BOUNCE_DEBUG`.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let title = env::var("PIXEL_BOUNCE_TITLE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.title);

        let background = env::var("PIXEL_BOUNCE_BACKGROUND")
            .ok()
            .and_then(|s| Color::from_hex(&s))
            .unwrap_or(defaults.background);

        let width = env::var("PIXEL_BOUNCE_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let height = env::var("PIXEL_BOUNCE_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let target_fps = env::var("PIXEL_BOUNCE_FPS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.target_fps);

        let debug_summary = env::var("PIXEL_BOUNCE_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.debug_summary);

        Self {
            title,
            background,
            width,
            height,
            target_fps,
            debug_summary,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_debug_summary(mut self, enabled: bool) -> Self {
        self.debug_summary = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.width,
                height: self.height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Number of pixels in a buffer of this size.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
