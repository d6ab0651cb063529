//! Application directory helpers anchored to a single `.fundtransfer` folder.
//!
//! Config and log files live under the OS config directory by default; the
//! `FUNDTRANSFER_CONFIG_HOME` variable relocates them for tests or portable setups.

use std::{
    path::PathBuf,
    sync::{LazyLock, Mutex, MutexGuard},
};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".fundtransfer";
/// Environment variable overriding the config base directory.
pub const CONFIG_HOME_ENV: &str = "FUNDTRANSFER_CONFIG_HOME";

static CONFIG_BASE_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));
static OVERRIDE_SCOPE: Mutex<()> = Mutex::new(());

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the root `.fundtransfer` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Return the logs directory inside the app root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    ensure_dir(app_root_dir()?.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Some(path) = CONFIG_BASE_OVERRIDE
        .lock()
        .ok()
        .and_then(|guard| guard.clone())
    {
        return Some(path);
    }
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Scoped in-process override of the config base directory.
///
/// Guards are serialized across threads; the previous override is restored on drop.
///
/// The guard holds a process-wide, non-reentrant lock for its whole lifetime.
/// Creating a second guard on a thread that still holds one deadlocks, so drop
/// the first guard before calling [`ConfigBaseGuard::set`] again.
pub struct ConfigBaseGuard {
    previous: Option<PathBuf>,
    _scope: MutexGuard<'static, ()>,
}

impl ConfigBaseGuard {
    pub fn set(path: PathBuf) -> Self {
        let scope = OVERRIDE_SCOPE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut guard = CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = guard.replace(path);
        Self {
            previous,
            _scope: scope,
        }
    }
}

impl Drop for ConfigBaseGuard {
    fn drop(&mut self) {
        let mut guard = CONFIG_BASE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn uses_override_for_root_dir() {
        let base = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
        let root = app_root_dir().unwrap();
        assert_eq!(root, base.path().join(APP_DIR_NAME));
        assert!(root.is_dir());
        let logs = logs_dir().unwrap();
        assert_eq!(logs, root.join("logs"));
        assert!(logs.is_dir());
    }

    #[test]
    fn guards_can_be_taken_again_after_drop() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let outer = ConfigBaseGuard::set(first.path().to_path_buf());
        assert_eq!(config_base_dir(), Some(first.path().to_path_buf()));
        drop(outer);

        let inner = ConfigBaseGuard::set(second.path().to_path_buf());
        assert_eq!(config_base_dir(), Some(second.path().to_path_buf()));
        drop(inner);

        let reacquired = ConfigBaseGuard::set(first.path().to_path_buf());
        assert_eq!(app_root_dir().unwrap(), first.path().join(APP_DIR_NAME));
        drop(reacquired);
    }
}
