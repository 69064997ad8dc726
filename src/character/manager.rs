use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::GameConfig;
use crate::constants::MAX_NAME_LEN;
use crate::errors::PersistenceError;

use super::record::CharacterRecord;

/// Where a session saves and loads its character.
pub trait RecordStore {
    fn save(&mut self, record: &CharacterRecord) -> Result<(), PersistenceError>;
    fn load(&self, name: &str) -> Result<CharacterRecord, PersistenceError>;
}

#[derive(Debug, Clone)]
pub struct CharacterInfo {
    pub name: String,
    pub filename: String,
    pub class: String,
    pub level: u32,
    pub gold: u32,
    pub last_save_time: i64,
    pub is_corrupted: bool,
}

/// One pretty-printed JSON file per character.
pub struct CharacterManager {
    save_dir: PathBuf,
}

impl CharacterManager {
    pub fn new(config: &GameConfig) -> Result<Self, PersistenceError> {
        Self::with_dir(config.resolve_save_dir()?)
    }

    pub fn with_dir(save_dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let save_dir = save_dir.into();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.save_dir.join(format!("{}.json", sanitize_name(name)))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    pub fn save_character(&self, record: &CharacterRecord) -> Result<PathBuf, PersistenceError> {
        validate_name(&record.name).map_err(PersistenceError::InvalidName)?;
        let json = serde_json::to_string_pretty(record)?;
        let filepath = self.path_for(&record.name);
        fs::write(&filepath, json)?;
        info!("saved {} to {}", record.name, filepath.display());
        Ok(filepath)
    }

    pub fn load_character(&self, name: &str) -> Result<CharacterRecord, PersistenceError> {
        let filepath = self.path_for(name);
        if !filepath.exists() {
            return Err(PersistenceError::NotFound(name.to_string()));
        }
        let record = read_record(&filepath)?;
        info!("loaded {} (level {})", record.name, record.level);
        Ok(record)
    }

    pub fn list_characters(&self) -> Result<Vec<CharacterInfo>, PersistenceError> {
        let mut characters = Vec::new();

        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();

            match read_record(&path) {
                Ok(record) => characters.push(CharacterInfo {
                    name: record.name,
                    filename,
                    class: record.class,
                    level: record.level,
                    gold: record.gold,
                    last_save_time: record.last_save_time,
                    is_corrupted: false,
                }),
                Err(e) => {
                    warn!("unreadable save {}: {}", path.display(), e);
                    characters.push(CharacterInfo {
                        name: "[CORRUPTED]".to_string(),
                        filename,
                        class: String::new(),
                        level: 0,
                        gold: 0,
                        last_save_time: 0,
                        is_corrupted: true,
                    });
                }
            }
        }

        // Most recent first
        characters.sort_by(|a, b| b.last_save_time.cmp(&a.last_save_time));

        Ok(characters)
    }

    pub fn delete_character(&self, name: &str) -> Result<(), PersistenceError> {
        let filepath = self.path_for(name);
        if !filepath.exists() {
            return Err(PersistenceError::NotFound(name.to_string()));
        }
        fs::remove_file(filepath)?;
        info!("deleted {}", name);
        Ok(())
    }
}

fn read_record(path: &Path) -> Result<CharacterRecord, PersistenceError> {
    let json_content = fs::read_to_string(path)?;
    let mut record: CharacterRecord = serde_json::from_str(&json_content)?;
    record.normalize();
    Ok(record)
}

impl RecordStore for CharacterManager {
    fn save(&mut self, record: &CharacterRecord) -> Result<(), PersistenceError> {
        self.save_character(record).map(|_| ())
    }

    fn load(&self, name: &str) -> Result<CharacterRecord, PersistenceError> {
        self.load_character(name)
    }
}

/// Keeps records in memory, keyed by sanitized name. Can be told to fail
/// the next saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, CharacterRecord>,
    pub failing_saves: u32,
    pub save_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.records.get(&sanitize_name(name))
    }
}

impl RecordStore for MemoryStore {
    fn save(&mut self, record: &CharacterRecord) -> Result<(), PersistenceError> {
        if self.failing_saves > 0 {
            self.failing_saves -= 1;
            return Err(PersistenceError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store unavailable",
            )));
        }
        self.save_count += 1;
        self.records
            .insert(sanitize_name(&record.name), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<CharacterRecord, PersistenceError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(name.to_string()))
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name must be {} characters or less", MAX_NAME_LEN));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}

pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
