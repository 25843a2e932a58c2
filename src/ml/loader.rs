//! Process-wide model cache.
//!
//! Each artifact path is read at most once per process; callers share the
//! loaded model through an `Arc`. Failed loads are not cached.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Mutex},
    time::Instant,
};

use tracing::{debug, info};

use super::{ModelArtifact, ModelError};

static CACHE: LazyLock<Mutex<HashMap<PathBuf, Arc<ModelArtifact>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Read and validate an artifact without touching the cache.
pub fn load(path: &Path) -> Result<ModelArtifact, ModelError> {
    let started = Instant::now();
    let model = ModelArtifact::load_json(path)?;
    info!(
        path = %path.display(),
        estimator = model.estimator.display_name(),
        classes = ?model.classes,
        features = model.n_features_in,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Model loaded"
    );
    Ok(model)
}

/// Return the cached model for `path`, loading it on first use.
pub fn load_cached(path: &Path) -> Result<Arc<ModelArtifact>, ModelError> {
    let key = cache_key(path);
    if let Some(model) = lock_cache().get(&key) {
        debug!(path = %key.display(), "Model cache hit");
        return Ok(Arc::clone(model));
    }
    let model = Arc::new(load(path)?);
    Ok(Arc::clone(lock_cache().entry(key).or_insert(model)))
}

fn lock_cache() -> std::sync::MutexGuard<'static, HashMap<PathBuf, Arc<ModelArtifact>>> {
    CACHE.lock().unwrap_or_else(|err| err.into_inner())
}

fn cache_key(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
