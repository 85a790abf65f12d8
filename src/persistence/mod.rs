use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

const APP_NAME: &str = "dishmate";

pub const PANTRY_KEY: &str = "dm-pantry";
pub const FAVORITES_KEY: &str = "dm-favorites";
pub const MEAL_PLAN_KEY: &str = "dm-meal-plan";
pub const SHOPPING_LIST_KEY: &str = "dm-shopping-list";

/// Key-value persistence capability. Reads of absent or malformed
/// values return `None` and callers default to an empty collection;
/// nothing here ever fails the caller.
pub trait Storage {
    fn read(&self, key: &str) -> Option<serde_json::Value>;
    fn write(&self, key: &str, value: serde_json::Value);
}

pub fn read_or_default<T: DeserializeOwned + Default>(storage: &dyn Storage, key: &str) -> T {
    match storage.read(key) {
        Some(value) => match serde_json::from_value(value) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to parse stored value for {}: {}. Using defaults.", key, e);
                T::default()
            }
        },
        None => T::default(),
    }
}

pub fn write_value<T: Serialize>(storage: &dyn Storage, key: &str, data: &T) {
    match serde_json::to_value(data) {
        Ok(value) => storage.write(key, value),
        Err(e) => eprintln!("Failed to serialize value for {}: {}", key, e),
    }
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// One pretty-printed JSON file per key under the app data dir.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        Self::in_dir(get_app_data_dir())
    }

    pub fn in_dir(dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&dir);
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<serde_json::Value> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Malformed JSON in {}: {}", path.display(), e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: serde_json::Value) {
        let path = self.key_path(key);
        match serde_json::to_string_pretty(&value) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    eprintln!("Failed to write {}: {}", path.display(), e);
                }
            }
            Err(e) => eprintln!("Failed to serialize {}: {}", key, e),
        }
    }
}

/// In-memory storage for tests and headless runs.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<serde_json::Value> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: serde_json::Value) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
        }
    }
}
