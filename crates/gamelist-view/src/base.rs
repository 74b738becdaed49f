use crate::data::{EntryId, FileType, GameTree};
use crate::font::{FontLibrary, FontSize};
use crate::image_grid::GridObject;
use crate::input::{InputConfig, InputEvent};
use crate::settings::{Settings, QUICK_SYSTEM_SELECT};
use crate::theme::{Alignment, ThemeData, ThemeFlags};
use crate::widgets::{TextWidget, ThemeContext};
use glam::Vec2;

/// Shoulder buttons cycling through the systems
pub const QUICK_SELECT_RIGHT: &str = "r2";
pub const QUICK_SELECT_LEFT: &str = "l2";

/// What the list behaviour shared by all game list views wants the concrete view to do
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    Launch(EntryId),
    EnterFolder(EntryId),
    /// Back to the parent listing with the cursor on the folder that was left
    LeaveFolder(EntryId),
    ToSystemView,
    NextSystem,
    PrevSystem,
    RandomGame,
    ToggleInCollection(EntryId),
    /// Input consumed, nothing to do
    Stay,
}

/// Header, theme name and folder navigation common to the game list views
#[derive(Debug, Clone)]
pub struct GameListBase {
    tag: &'static str,
    theme_name: String,
    pub header: TextWidget,
    cursor_stack: Vec<EntryId>,
}

impl GameListBase {
    pub fn new(tag: &'static str, size: Vec2, fonts: &FontLibrary) -> Self {
        let mut header = TextWidget::new(fonts.get(FontSize::Medium));
        header.set_text("Logo Text");
        header.set_size(Vec2::new(size.x, 0.0));
        header.set_alignment(Alignment::Center);
        header.base.set_position(0.0, 0.0);
        header.base.set_default_z_index(50.0);

        Self {
            tag,
            theme_name: String::new(),
            header,
            cursor_stack: Vec::new(),
        }
    }

    /// Name the theme elements are looked up under
    pub fn name(&self) -> &str {
        if self.theme_name.is_empty() {
            self.tag
        } else {
            &self.theme_name
        }
    }

    pub fn set_theme_name(&mut self, name: &str) {
        self.theme_name = name.to_owned();
    }

    /// Folders entered so far, innermost last
    pub fn cursor_stack(&self) -> &[EntryId] {
        &self.cursor_stack
    }

    pub fn apply_theme(&mut self, theme: &ThemeData, ctx: &ThemeContext) {
        let view = self.name().to_owned();
        self.header
            .apply_theme(theme, &view, "logoText", ThemeFlags::ALL, ctx);
    }

    /// Maps a pressed action to navigation. `None` leaves the input to the view's widgets.
    pub fn input(
        &mut self,
        config: &dyn InputConfig,
        event: InputEvent,
        cursor: Option<GridObject>,
        tree: &GameTree,
        settings: &Settings,
    ) -> Option<NavigationAction> {
        if !event.is_pressed() {
            return None;
        }

        let is_game_system = tree.system().is_game_system;
        let cursor_entry = match cursor {
            Some(GridObject::Entry(id)) => Some(id),
            _ => None,
        };

        if config.is_mapped_to("a", event) {
            let action = cursor_entry
                .and_then(|id| tree.get(id).map(|data| (id, data)))
                .map(|(id, data)| match data.file_type() {
                    FileType::Game => NavigationAction::Launch(id),
                    FileType::Folder if !data.children().is_empty() => {
                        self.cursor_stack.push(id);
                        NavigationAction::EnterFolder(id)
                    }
                    _ => NavigationAction::Stay,
                });

            return Some(action.unwrap_or(NavigationAction::Stay));
        }

        if config.is_mapped_to("b", event) {
            return Some(match self.cursor_stack.pop() {
                Some(folder) => NavigationAction::LeaveFolder(folder),
                None => NavigationAction::ToSystemView,
            });
        }

        let quick_select = settings.get_bool(QUICK_SYSTEM_SELECT);

        if config.is_mapped_to(QUICK_SELECT_RIGHT, event) {
            return quick_select.then_some(NavigationAction::NextSystem);
        }

        if config.is_mapped_to(QUICK_SELECT_LEFT, event) {
            return quick_select.then_some(NavigationAction::PrevSystem);
        }

        if config.is_mapped_to("x", event) {
            return is_game_system.then_some(NavigationAction::RandomGame);
        }

        if config.is_mapped_to("y", event) && !settings.is_kid_mode() && is_game_system {
            return cursor_entry.map(NavigationAction::ToggleInCollection);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SystemInfo;
    use crate::input::{InputMapping, Key};
    use crate::settings::UiMode;

    struct TestSetup {
        base: GameListBase,
        tree: GameTree,
        game: EntryId,
        folder: EntryId,
        empty_folder: EntryId,
        mapping: InputMapping,
    }

    fn create_test_setup(is_game_system: bool) -> TestSetup {
        let mut tree = GameTree::new(SystemInfo::new("c64", "Commodore 64", is_game_system));
        let root = tree.root();
        let game = tree.add_game(root, "roms/uridium.d64", "Uridium");
        let folder = tree.add_folder(root, "roms/demos", "Demos");
        tree.add_game(folder, "roms/demos/edge_of_disgrace.d64", "Edge of Disgrace");
        let empty_folder = tree.add_folder(root, "roms/empty", "Empty");

        TestSetup {
            base: GameListBase::new("grid", Vec2::new(1280.0, 720.0), &FontLibrary::new(720.0)),
            tree,
            game,
            folder,
            empty_folder,
            mapping: InputMapping::with_defaults(),
        }
    }

    fn press(setup: &mut TestSetup, key: Key, cursor: EntryId, settings: &Settings) -> Option<NavigationAction> {
        setup.base.input(
            &setup.mapping,
            InputEvent::pressed(key),
            Some(GridObject::Entry(cursor)),
            &setup.tree,
            settings,
        )
    }

    #[test]
    fn test_name_follows_theme_name() {
        let mut setup = create_test_setup(true);
        assert_eq!(setup.base.name(), "grid");
        setup.base.set_theme_name("custom");
        assert_eq!(setup.base.name(), "custom");
    }

    #[test]
    fn test_launch_and_folders() {
        let mut setup = create_test_setup(true);
        let settings = Settings::new();
        let (game, folder, empty) = (setup.game, setup.folder, setup.empty_folder);

        assert_eq!(press(&mut setup, Key::Enter, game, &settings), Some(NavigationAction::Launch(game)));
        assert_eq!(press(&mut setup, Key::Enter, empty, &settings), Some(NavigationAction::Stay));
        assert!(setup.base.cursor_stack().is_empty());

        assert_eq!(
            press(&mut setup, Key::Enter, folder, &settings),
            Some(NavigationAction::EnterFolder(folder))
        );
        assert_eq!(setup.base.cursor_stack(), &[folder]);

        assert_eq!(
            press(&mut setup, Key::Escape, game, &settings),
            Some(NavigationAction::LeaveFolder(folder))
        );
        assert_eq!(press(&mut setup, Key::Escape, game, &settings), Some(NavigationAction::ToSystemView));
    }

    #[test]
    fn test_released_keys_are_ignored() {
        let mut setup = create_test_setup(true);
        let action = setup.base.input(
            &setup.mapping,
            InputEvent::released(Key::Enter),
            Some(GridObject::Entry(setup.game)),
            &setup.tree,
            &Settings::new(),
        );
        assert_eq!(action, None);
    }

    #[test]
    fn test_quick_system_select() {
        let mut setup = create_test_setup(true);
        let game = setup.game;

        assert_eq!(press(&mut setup, Key::PageDown, game, &Settings::new()), None);

        let settings = Settings::new().with_bool(QUICK_SYSTEM_SELECT, true);
        assert_eq!(press(&mut setup, Key::PageDown, game, &settings), Some(NavigationAction::NextSystem));
        assert_eq!(press(&mut setup, Key::PageUp, game, &settings), Some(NavigationAction::PrevSystem));
    }

    #[test]
    fn test_random_and_collection_need_game_system() {
        let mut setup = create_test_setup(false);
        let game = setup.game;
        let settings = Settings::new();
        assert_eq!(press(&mut setup, Key::A, game, &settings), None);
        assert_eq!(press(&mut setup, Key::B, game, &settings), None);

        let mut setup = create_test_setup(true);
        let game = setup.game;
        assert_eq!(press(&mut setup, Key::A, game, &settings), Some(NavigationAction::RandomGame));
        assert_eq!(
            press(&mut setup, Key::B, game, &settings),
            Some(NavigationAction::ToggleInCollection(game))
        );

        let kid = Settings::new().with_ui_mode(UiMode::Kid);
        assert_eq!(press(&mut setup, Key::B, game, &kid), None);
    }
}
