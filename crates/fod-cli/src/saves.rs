//! Save files on disk: slot naming, timestamped backups, and the
//! [`SaveStore`] the game talks to.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fod_core::{Player, persist};
use fod_fiction::{FictionError, FictionResult, SaveStore};

pub const NO_SAVE_PATH: &str = "No --save path provided; in-game save ignored.";

/// Timestamp embedded in backup file names.
const BACKUP_STAMP: &str = "%Y%m%dT%H%M%SZ";

/// `<stem>_<slot><ext>` next to `base`, or `base` itself for the default slot.
pub fn slot_path(base: &Path, slot: Option<&str>) -> PathBuf {
    match slot {
        None => base.to_path_buf(),
        Some(slot) => {
            let (stem, ext) = stem_and_ext(base);
            base.with_file_name(format!("{stem}_{slot}{ext}"))
        }
    }
}

/// `<stem>.<timestamp><ext>.bak` next to `path`.
pub fn backup_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    let (stem, ext) = stem_and_ext(path);
    path.with_file_name(format!("{stem}.{}{ext}.bak", now.format(BACKUP_STAMP)))
}

/// File stem and extension (with its leading dot, or empty).
fn stem_and_ext(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}

/// Move an existing file at `path` aside. Falls back to copying when the
/// rename fails.
fn back_up(path: &Path) -> io::Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = backup_path(path, Utc::now());
    if fs::rename(path, &backup).is_err() {
        fs::copy(path, &backup)?;
    }
    log::info!("backed up {} to {}", path.display(), backup.display());
    Ok(Some(backup))
}

/// Save store over the `--save` and `--load` paths.
#[derive(Debug, Default)]
pub struct FileStore {
    save_path: Option<PathBuf>,
    load_path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(save_path: Option<PathBuf>, load_path: Option<PathBuf>) -> Self {
        Self {
            save_path,
            load_path,
        }
    }
}

impl SaveStore for FileStore {
    fn save(&mut self, player: &Player, slot: Option<&str>) -> FictionResult<String> {
        let Some(base) = &self.save_path else {
            return Ok(NO_SAVE_PATH.to_string());
        };
        let target = slot_path(base, slot);
        let failed = |e: &dyn std::fmt::Display| {
            FictionError::HandlerFailure(format!(
                "Failed to save player to {}: {e}",
                target.display()
            ))
        };
        back_up(&target).map_err(|e| failed(&e))?;
        persist::save_to(player, &target).map_err(|e| failed(&e))?;
        Ok(format!("Saved player to {}", target.display()))
    }

    fn load(&mut self, slot: Option<&str>) -> FictionResult<Option<Player>> {
        let Some(base) = &self.load_path else {
            log::warn!("no --load path provided; in-game load ignored");
            return Ok(None);
        };
        let target = slot_path(base, slot);
        persist::load_from(&target).map(Some).map_err(|e| {
            FictionError::HandlerFailure(format!(
                "Failed to load player from {}: {e}",
                target.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn slot_paths() {
        let base = Path::new("saves/save.json");
        assert_eq!(slot_path(base, None), PathBuf::from("saves/save.json"));
        assert_eq!(
            slot_path(base, Some("slota")),
            PathBuf::from("saves/save_slota.json")
        );
        assert_eq!(
            slot_path(Path::new("game"), Some("b")),
            PathBuf::from("game_b")
        );
    }

    #[test]
    fn backup_names_carry_utc_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            backup_path(Path::new("dir/save.json"), now),
            PathBuf::from("dir/save.20240309T140507Z.json.bak")
        );
    }

    #[test]
    fn save_without_path_is_ignored() {
        let mut store = FileStore::default();
        assert_eq!(store.save(&Player::new(), None).unwrap(), NO_SAVE_PATH);
    }

    #[test]
    fn load_without_path_finds_nothing() {
        let mut store = FileStore::default();
        assert!(store.load(Some("a")).unwrap().is_none());
    }

    #[test]
    fn save_then_load_slot() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("save.json");
        let mut store = FileStore::new(Some(base.clone()), Some(base));

        let mut player = Player::new();
        player.skill = 11;
        let message = store.save(&player, Some("slota")).unwrap();
        assert!(message.ends_with("save_slota.json"));
        assert!(dir.path().join("save_slota.json").exists());

        let loaded = store.load(Some("slota")).unwrap().unwrap();
        assert_eq!(loaded, player);
    }

    #[test]
    fn existing_save_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("save.json");
        fs::write(&base, "{}").unwrap();
        let mut store = FileStore::new(Some(base.clone()), None);

        store.save(&Player::new(), None).unwrap();

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("save.") && name.ends_with(".json.bak"))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
            "{}"
        );
        assert_eq!(persist::load_from(&base).unwrap(), Player::new());
    }

    #[test]
    fn loading_missing_file_is_handler_failure() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(None, Some(dir.path().join("missing.json")));
        let err = store.load(None).unwrap_err();
        assert!(matches!(err, FictionError::HandlerFailure(_)));
        assert!(err.to_string().contains("Failed to load player from"));
    }
}
