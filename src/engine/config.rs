//! Runtime configuration: where the onboarding database lives.

use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = ".onboard";
pub const DB_FILE: &str = "onboard.db";
pub const HOME_ENV: &str = "ONBOARD_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves the data directory: explicit override, then `ONBOARD_HOME`,
    /// then `.onboard` in the working directory.
    #[must_use]
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let env_dir = std::env::var_os(HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(override_dir, env_dir)
    }

    fn resolve_with(override_dir: Option<&Path>, env_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir
            .map(Path::to_path_buf)
            .or(env_dir)
            .unwrap_or_else(|| PathBuf::from(DATA_DIR));
        Self { data_dir }
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}
