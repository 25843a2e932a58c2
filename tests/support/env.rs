use std::{
    ffi::OsString,
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use placement_predictor::app_dirs::CONFIG_HOME_ENV;
use placement_predictor::config::MODEL_PATH_ENV;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points the config home and model path at test locations, restoring both on drop.
pub struct PlacementEnvGuard {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl PlacementEnvGuard {
    pub fn set(config_home: PathBuf, model_path: Option<PathBuf>) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = [CONFIG_HOME_ENV, MODEL_PATH_ENV]
            .into_iter()
            .map(|key| (key, std::env::var_os(key)))
            .collect();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, config_home);
            match model_path {
                Some(path) => std::env::set_var(MODEL_PATH_ENV, path),
                None => std::env::remove_var(MODEL_PATH_ENV),
            }
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for PlacementEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
