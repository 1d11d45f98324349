use crate::error::{ConfigReadErr, IoErr, Result};
use ntuple::TupleSize;
use serde::Deserialize;
use snafu::prelude::*;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;
use toml::from_str;

/// Load the config at `path`. A missing file means every default applies.
pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let s = match read_to_string(path).await {
        Ok(s) => s,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(err) => return Err(err).context(IoErr { path }),
    };

    log::debug!("Loaded config from {}", path.display());
    from_str(s.as_str()).context(ConfigReadErr {})
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    compare: CompareConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    tuple_size: Option<TupleSize>,
    synonyms: Option<String>,
}

impl Config {
    pub fn tuple_size(&self) -> TupleSize {
        self.compare.tuple_size.unwrap_or_default()
    }

    /// The default synonym file, relative to `config_dir` unless absolute.
    pub fn synonyms(&self, config_dir: &Path) -> Option<PathBuf> {
        self.compare
            .synonyms
            .as_ref()
            .map(|path| config_dir.join(path.as_str()))
    }
}
