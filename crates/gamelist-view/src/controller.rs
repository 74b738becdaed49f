use crate::data::{FileData, SystemInfo};
use crate::error::GameListResult;
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileChangeType {
    Added,
    MetadataChanged,
    Removed,
    Sorted,
}

/// Everything a game list view asks of the application that owns it
pub trait GameListController {
    fn launch(&self, game: &FileData);
    /// The view may have to be replaced by a different kind of view
    fn reload_game_list_view(&self);
    fn open_gamelist_options(&self, system: &SystemInfo);
    fn play_sound(&self, view: &str, sound: &str);
    fn go_to_system_view(&self, system: &SystemInfo);
    fn go_to_next_system(&self);
    fn go_to_prev_system(&self);
    /// Random number in `0..len`
    fn random_index(&self, len: usize) -> usize;
    /// Adds or removes `game` from the collection being edited. False if nothing happened.
    fn toggle_in_editing_collection(&self, game: &FileData) -> bool;
    fn editing_collection_name(&self) -> String;
}

pub trait FileSystem {
    fn remove_file(&self, path: &Path) -> GameListResult<()>;
}

#[derive(Debug, Default, Copy, Clone)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn remove_file(&self, path: &Path) -> GameListResult<()> {
        std::fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_remove_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.rom");
        std::fs::write(&path, b"rom").unwrap();

        StdFileSystem.remove_file(&path).unwrap();
        assert!(!path.exists());
        assert!(StdFileSystem.remove_file(&path).is_err());
    }
}
