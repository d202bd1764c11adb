//! Demo configuration: defaults plus environment overrides.

use std::path::PathBuf;

/// Font shipped next to the binary when running from the workspace root
pub const DEFAULT_FONT_PATH: &str = "assets/OpenDyslexic-Regular.ttf";

/// Tried in order when the default font is missing
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Explicit font file; disables the fallback search
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    /// Log frame statistics about once per second
    pub profile: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "App built with Rust and wgpu".to_string(),
            window_width: 700,
            window_height: 500,
            font_path: None,
            font_size: 24.0,
            profile: false,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `DRAGBOX_FONT`, `DRAGBOX_FONT_SIZE` and `PROFILE`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = var("DRAGBOX_FONT").filter(|p| !p.is_empty()) {
            self.font_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = var("DRAGBOX_FONT_SIZE") {
            match raw.trim().parse::<f32>() {
                Ok(size) if size.is_finite() && size > 0.0 => self.font_size = size,
                _ => log::warn!(
                    "ignoring DRAGBOX_FONT_SIZE={raw:?}, using {}",
                    self.font_size
                ),
            }
        }

        self.profile = var("PROFILE").is_some();
        self
    }

    /// Font files to try, in order.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        match &self.font_path {
            Some(path) => vec![path.clone()],
            None => std::iter::once(DEFAULT_FONT_PATH)
                .chain(SYSTEM_FONT_PATHS.iter().copied())
                .map(PathBuf::from)
                .collect(),
        }
    }
}
