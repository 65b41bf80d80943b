use std::sync::Mutex;

use coach_core::{config::ConfigManager, storage::JsonArchive};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated archive and config manager backed by a unique directory.
#[allow(dead_code)]
pub fn setup_test_env() -> (JsonArchive, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let archive =
        JsonArchive::new(Some(base.join("submissions"))).expect("create json archive backend");
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (archive, config_manager)
}
