use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tripdeck.toml";

const ENV_NAME_STORAGE_FILE: &str = "TRIPDECK_STORAGE_FILE";

pub struct Config {
    pub storage: Storage,
    pub import: Import,
}

pub struct Storage {
    /// Path of the single persisted session record.
    pub file: PathBuf,
}

pub struct Import {
    /// Cosmetic delay of the simulated import.
    pub simulated_delay: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(file) = env::var(ENV_NAME_STORAGE_FILE) {
            cfg.storage.file = file.into();
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { storage, import } = from;
        let raw::Storage { file } = storage.unwrap_or_default();
        let raw::Import { simulated_delay } = import.unwrap_or_default();
        Self {
            storage: Storage { file },
            import: Import { simulated_delay },
        }
    }
}
