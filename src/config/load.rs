use std::{fs::File, io::BufReader, path::Path};

use crate::{
    config::{model::ProductConfig, validate::validate_config},
    foundation::error::{PageError, PageResult},
};

impl ProductConfig {
    /// Parse a product configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PageError::config(format!("parse product config JSON: {e}")))
    }

    /// Parse a product configuration from a JSON string.
    pub fn from_json_str(s: &str) -> PageResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PageError::config(format!("parse product config JSON: {e}")))
    }

    /// Parse a product configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PageError::config(format!("open product config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Authoring-time consistency checks. Rendering never requires this to pass.
    pub fn validate(&self) -> PageResult<()> {
        validate_config(self)
            .map_err(|e| PageError::validation(format!("product config is inconsistent:\n{e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/load.rs"]
mod tests;
