use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{PageError, PageResult},
    scroll::spy::ScanStrategy,
};

/// Engine-wide constants. Every field has a default, so `{}` is a valid settings document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Fixed leading segment prepended to relative local media paths.
    pub asset_base: String,
    /// Prefix of canonical video-platform embed URLs.
    pub embed_base_url: String,
    /// Header height assumed until the header element is first measured.
    pub default_header_height: f64,
    /// Additive probe offset used by the scroll-spy.
    pub probe_offset: f64,
    /// Gap kept between the header and a section scrolled into view.
    pub scroll_breathing_room: f64,
    /// Scroll-spy scan strategy.
    pub scroll_spy_strategy: ScanStrategy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            asset_base: "assets".to_string(),
            embed_base_url: "https://www.youtube.com/embed/".to_string(),
            default_header_height: 80.0,
            probe_offset: 100.0,
            scroll_breathing_room: 20.0,
            scroll_spy_strategy: ScanStrategy::default(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        let settings: EngineSettings = serde_json::from_reader(r)
            .map_err(|e| PageError::config(format!("parse engine settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PageError::config(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric fields are finite and non-negative.
    pub fn validate(&self) -> PageResult<()> {
        for (name, value) in [
            ("defaultHeaderHeight", self.default_header_height),
            ("probeOffset", self.probe_offset),
            ("scrollBreathingRoom", self.scroll_breathing_room),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PageError::validation(format!(
                    "settings {name} must be finite and >= 0",
                )));
            }
        }
        if self.embed_base_url.trim().is_empty() {
            return Err(PageError::validation(
                "settings embedBaseUrl must be non-empty",
            ));
        }
        if self.asset_base.split('/').any(|part| part == "..") {
            return Err(PageError::validation(
                "settings assetBase must not contain '..'",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
