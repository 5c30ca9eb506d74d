//! Run settings for the profile driver.
//!
//! ```yaml
//! main_params:
//!   filepath: data/profile.csv
//!   step: 25
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::profile::errors::ProfileError;

pub const DEFAULT_SETTINGS_PATH: &str = "settings.yml";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Two-column `distance,height` CSV file.
    pub filepath: PathBuf,
    /// Uniform stride between interpolation nodes.
    pub step: usize,
}

/// Top-level layout of the settings file.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    main_params: Settings,
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: SettingsFile = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| ProfileError::Settings(format!("{}: {}", path.display(), e)))?;
        doc.main_params.validate()?;
        Ok(doc.main_params)
    }

    /// Parses a settings document held in memory.
    pub fn parse(yaml: &str) -> Result<Self, ProfileError> {
        let doc: SettingsFile = serde_yaml::from_str(yaml)
            .map_err(|e| ProfileError::Settings(e.to_string()))?;
        doc.main_params.validate()?;
        Ok(doc.main_params)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.step == 0 {
            return Err(ProfileError::Settings("`step` must be >= 1".into()));
        }
        Ok(())
    }
}
