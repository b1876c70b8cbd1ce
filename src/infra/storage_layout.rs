use std::{env, ffi::OsString, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "mindchat";

/// Filesystem home for the client's own state. Only logs live here; the
/// transcript is session-scoped and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub state_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        Self::resolve_from(env::var_os("XDG_STATE_HOME"), env::var_os("HOME"))
    }

    fn resolve_from(
        xdg_state_home: Option<OsString>,
        home: Option<OsString>,
    ) -> Result<Self, AppError> {
        let state_base = xdg_state_home
            .map(PathBuf::from)
            .or_else(|| home.map(|home| PathBuf::from(home).join(".local").join("state")))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve state base directory (XDG_STATE_HOME/HOME)".into(),
            })?;

        Ok(Self {
            state_dir: state_base.join(APP_DIR_NAME),
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [self.state_dir.clone(), self.log_dir()] {
            fs::create_dir_all(&dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
