use serde::{Deserialize, Serialize};

use crate::board::widget::{DEFAULT_NOISE_ALPHA, DEFAULT_PIXELATION_FACTOR};
use crate::board::BoardConfig;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// On-screen size of the drawing board, in pixels.
    #[serde(default = "default_board_size")]
    pub board_width: u32,
    #[serde(default = "default_board_size")]
    pub board_height: u32,
    /// Divisor shrinking the board's internal resolution for the pixelated
    /// look. Clamped to at least 1 when used.
    #[serde(default = "default_pixelation_factor")]
    pub pixelation_factor: u32,
    /// Alpha channel of every grain pixel, 0-255.
    #[serde(default = "default_noise_alpha")]
    pub noise_alpha: u8,
    /// Directory holding the blog's Markdown files.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Last known window size. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

fn default_board_size() -> u32 {
    250
}

fn default_pixelation_factor() -> u32 {
    DEFAULT_PIXELATION_FACTOR
}

fn default_noise_alpha() -> u8 {
    DEFAULT_NOISE_ALPHA
}

fn default_content_dir() -> String {
    "content".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: default_board_size(),
            board_height: default_board_size(),
            pixelation_factor: default_pixelation_factor(),
            noise_alpha: default_noise_alpha(),
            content_dir: default_content_dir(),
            debug_logging: false,
            window_size: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            width: self.board_width,
            height: self.board_height,
            pixelation_factor: self.pixelation_factor.max(1),
            noise_alpha: self.noise_alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load("does-not-exist.json").unwrap();
        assert_eq!(settings.board_width, 250);
        assert_eq!(settings.pixelation_factor, 3);
        assert_eq!(settings.noise_alpha, 20);
        assert_eq!(settings.content_dir, "content");
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"noise_alpha": 64}"#).unwrap();
        assert_eq!(settings.noise_alpha, 64);
        assert_eq!(settings.board_height, 250);
    }

    #[test]
    fn zero_pixelation_factor_is_clamped_in_the_board_config() {
        let settings = Settings {
            pixelation_factor: 0,
            ..Settings::default()
        };
        assert_eq!(settings.board_config().pixelation_factor, 1);
    }
}
