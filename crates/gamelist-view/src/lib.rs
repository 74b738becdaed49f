pub mod base;
pub mod config;
pub mod controller;
pub mod data;
mod error;
pub mod fade;
pub mod font;
pub mod grid_game_list_view;
pub mod help;
pub mod image_grid;
pub mod input;
mod layout;
pub mod metadata;
pub mod ordering;
pub mod settings;
pub mod theme;
pub mod widgets;

pub use config::FrontendConfig;
pub use controller::{FileChangeType, FileSystem, GameListController, StdFileSystem};
pub use data::{EntryId, FileData, FileType, GameTree, SystemInfo};
pub use error::{GameListError, GameListResult};
pub use grid_game_list_view::{GridGameListView, ViewContext, WidgetId};
pub use image_grid::GridObject;
