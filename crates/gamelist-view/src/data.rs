use crate::error::{GameListError, GameListResult};
use fxhash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name given to the synthetic entry shown when a folder has nothing to list.
pub const PLACEHOLDER_NAME: &str = "<No Entries Found>";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileType {
    Game,
    Folder,
    Placeholder,
}

/// Handle to an entry stored in a [`GameTree`]. Handles of removed entries never resolve again,
/// even if the slot gets reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct MetaData {
    values: FxHashMap<String, String>,
}

impl MetaData {
    /// Missing keys read as an empty string
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_owned(), value.into());
    }
}

#[derive(Debug, Clone)]
pub struct FileData {
    file_type: FileType,
    path: PathBuf,
    pub metadata: MetaData,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

impl FileData {
    pub fn new(file_type: FileType, path: impl Into<PathBuf>, name: &str) -> Self {
        let mut metadata = MetaData::default();
        metadata.set("name", name);

        Self {
            file_type,
            path: path.into(),
            metadata,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(FileType::Placeholder, "", PLACEHOLDER_NAME)
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.set(key, value);
        self
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_placeholder(&self) -> bool {
        self.file_type == FileType::Placeholder
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.metadata.get("name")
    }

    pub fn image_path(&self) -> &str {
        self.metadata.get("image")
    }

    pub fn thumbnail_path(&self) -> &str {
        self.metadata.get("thumbnail")
    }

    pub fn marquee_path(&self) -> &str {
        self.metadata.get("marquee")
    }

    pub fn video_path(&self) -> &str {
        self.metadata.get("video")
    }

    pub fn is_favorite(&self) -> bool {
        self.metadata.get("favorite") == "true"
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.metadata.set("favorite", if favorite { "true" } else { "false" });
    }

    pub fn is_hidden(&self) -> bool {
        self.metadata.get("hidden") == "true"
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn children(&self) -> &[EntryId] {
        &self.children
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemInfo {
    pub name: String,
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_game_system: bool,
}

fn default_true() -> bool {
    true
}

impl SystemInfo {
    pub fn new(name: &str, full_name: &str, is_game_system: bool) -> Self {
        Self {
            name: name.to_owned(),
            full_name: full_name.to_owned(),
            is_game_system,
        }
    }
}

/// One entry of a json5 game list
#[derive(Debug, Deserialize)]
pub struct EntryDescription {
    #[serde(rename = "type")]
    kind: String,
    path: String,
    #[serde(default)]
    favorite: bool,
    #[serde(default)]
    metadata: MetaData,
    #[serde(default)]
    children: Vec<EntryDescription>,
}

/// Deserialized json5 game list
#[derive(Debug, Deserialize)]
pub struct GameList {
    pub system: SystemInfo,
    pub entries: Vec<EntryDescription>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<FileData>,
}

/// Owns every entry of a system. Views only ever hold [`EntryId`] handles into it.
#[derive(Debug)]
pub struct GameTree {
    system: SystemInfo,
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: EntryId,
}

impl GameTree {
    pub fn new(system: SystemInfo) -> Self {
        let root_data = FileData::new(FileType::Folder, "", &system.full_name);
        let mut tree = Self {
            system,
            slots: Vec::with_capacity(64),
            free: Vec::new(),
            root: EntryId {
                index: 0,
                generation: 0,
            },
        };

        tree.root = tree.insert(root_data);
        tree
    }

    /// Parses a json5 game list
    pub fn from_json5(text: &str) -> GameListResult<Self> {
        let list: GameList = json5::from_str(text)?;
        Self::from_gamelist(list)
    }

    pub fn from_gamelist(list: GameList) -> GameListResult<Self> {
        let mut tree = Self::new(list.system);
        let root = tree.root;

        for entry in list.entries {
            tree.add_description(root, entry)?;
        }

        Ok(tree)
    }

    pub fn load(path: &Path) -> GameListResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json5(&text)
    }

    fn add_description(&mut self, parent: EntryId, desc: EntryDescription) -> GameListResult<()> {
        let file_type = match desc.kind.as_str() {
            "game" => FileType::Game,
            "folder" => FileType::Folder,
            _ => return Err(GameListError::UnknownEntryType { name: desc.kind }),
        };

        let mut data = FileData::new(file_type, &desc.path, "");
        data.metadata = desc.metadata;

        // Entries without a name fall back to the file stem
        if data.name().is_empty() {
            let stem = Path::new(&desc.path)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            data.metadata.set("name", stem);
        }

        if desc.favorite {
            data.set_favorite(true);
        }

        let id = self.add(parent, data);

        for child in desc.children {
            self.add_description(id, child)?;
        }

        Ok(())
    }

    fn insert(&mut self, data: FileData) -> EntryId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.data = Some(data);
                EntryId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    data: Some(data),
                });
                EntryId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    pub fn system(&self) -> &SystemInfo {
        &self.system
    }

    pub fn root(&self) -> EntryId {
        self.root
    }

    pub fn get(&self, id: EntryId) -> Option<&FileData> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_ref())
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut FileData> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.data.as_mut())
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live entries, root folder included
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `data` as the last child of `parent`
    pub fn add(&mut self, parent: EntryId, mut data: FileData) -> EntryId {
        data.parent = Some(parent);
        let id = self.insert(data);

        if let Some(parent_data) = self.get_mut(parent) {
            parent_data.children.push(id);
        }

        id
    }

    pub fn add_game(&mut self, parent: EntryId, path: &str, name: &str) -> EntryId {
        self.add(parent, FileData::new(FileType::Game, path, name))
    }

    pub fn add_folder(&mut self, parent: EntryId, path: &str, name: &str) -> EntryId {
        self.add(parent, FileData::new(FileType::Folder, path, name))
    }

    pub fn parent(&self, id: EntryId) -> Option<EntryId> {
        self.get(id).and_then(FileData::parent)
    }

    /// Children of `folder` in display order, hidden entries skipped
    pub fn children_to_display(&self, folder: EntryId) -> Vec<EntryId> {
        let Some(folder) = self.get(folder) else {
            return Vec::new();
        };

        folder
            .children
            .iter()
            .copied()
            .filter(|id| self.get(*id).is_some_and(|child| !child.is_hidden()))
            .collect()
    }

    /// Detaches `id` from its parent and drops it together with its descendants. The root can't be
    /// removed.
    pub fn remove(&mut self, id: EntryId) -> Option<FileData> {
        if id == self.root || !self.contains(id) {
            return None;
        }

        if let Some(parent) = self.parent(id) {
            if let Some(parent_data) = self.get_mut(parent) {
                parent_data.children.retain(|child| *child != id);
            }
        }

        let mut removed = self.free_slot(id)?;

        let mut pending = std::mem::take(&mut removed.children);
        while let Some(child) = pending.pop() {
            if let Some(mut data) = self.free_slot(child) {
                pending.append(&mut data.children);
            }
        }

        removed.parent = None;
        Some(removed)
    }

    fn free_slot(&mut self, id: EntryId) -> Option<FileData> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }

        let data = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(data)
    }
}
