use crate::data::EntryId;
use crate::input::{InputConfig, InputEvent};
use crate::theme::{ElementKind, ImageSource, ThemeData, ThemeFlags};
use crate::widgets::{ThemeContext, WidgetBase};
use glam::Vec2;
use std::time::Duration;

/// How long a direction has to be held before the cursor starts repeating
const SCROLL_DELAY: Duration = Duration::from_millis(500);
const SCROLL_REPEAT: Duration = Duration::from_millis(100);

/// What a tile points at. The placeholder is owned by the view, everything else by the game tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridObject {
    Entry(EntryId),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridTile {
    pub text: String,
    pub image_path: String,
    pub video_path: String,
    pub marquee_path: String,
    pub object: GridObject,
}

#[derive(Debug, Copy, Clone, Default)]
struct ScrollState {
    /// Cursor step of the held direction, 0 when nothing is held
    step: i64,
    held: Duration,
    repeating: bool,
}

/// Result of feeding input to the grid
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GridResponse {
    pub consumed: bool,
    /// Cursor moved or scrolling started/stopped
    pub cursor_changed: bool,
}

#[derive(Debug, Clone)]
pub struct ImageGrid {
    pub base: WidgetBase,
    tiles: Vec<GridTile>,
    cursor: usize,
    scroll: ScrollState,
    image_source: ImageSource,
    grid_size: Vec2,
    grid_size_override: Option<Vec2>,
    theme_name: String,
}

impl ImageGrid {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::default(),
            tiles: Vec::with_capacity(128),
            cursor: 0,
            scroll: ScrollState::default(),
            image_source: ImageSource::default(),
            grid_size: Vec2::new(5.0, 3.0),
            grid_size_override: None,
            theme_name: String::new(),
        }
    }

    /// Columns and rows. Takes precedence over the theme.
    pub fn set_grid_size_override(&mut self, size: Vec2) {
        self.grid_size_override = Some(size);
    }

    pub fn grid_size(&self) -> Vec2 {
        self.grid_size_override.unwrap_or(self.grid_size)
    }

    fn columns(&self) -> i64 {
        (self.grid_size().x as i64).max(1)
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn set_theme_name(&mut self, name: &str) {
        self.theme_name = name.to_owned();
    }

    pub fn image_source(&self) -> ImageSource {
        self.image_source
    }

    pub fn add(&mut self, tile: GridTile) {
        self.tiles.push(tile);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.cursor = 0;
        self.scroll = ScrollState::default();
    }

    /// Removes the tile of `object`, keeping the cursor on a valid tile
    pub fn remove(&mut self, object: GridObject) -> bool {
        let Some(index) = self.tiles.iter().position(|t| t.object == object) else {
            return false;
        };

        self.tiles.remove(index);

        if index < self.cursor {
            self.cursor -= 1;
        }

        self.cursor = self.cursor.min(self.tiles.len().saturating_sub(1));
        true
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[GridTile] {
        &self.tiles
    }

    pub fn objects(&self) -> Vec<GridObject> {
        self.tiles.iter().map(|t| t.object).collect()
    }

    pub fn selected(&self) -> Option<GridObject> {
        self.tiles.get(self.cursor).map(|t| t.object)
    }

    pub fn selected_tile(&self) -> Option<&GridTile> {
        self.tiles.get(self.cursor)
    }

    /// False if `object` isn't in the grid
    pub fn set_cursor(&mut self, object: GridObject) -> bool {
        match self.tiles.iter().position(|t| t.object == object) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Out of range indices are ignored
    pub fn set_cursor_index(&mut self, index: usize) -> bool {
        if index < self.tiles.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// True while a held direction is repeating
    pub fn is_scrolling(&self) -> bool {
        self.scroll.repeating
    }

    fn move_cursor(&mut self, step: i64) -> bool {
        if self.tiles.is_empty() {
            return false;
        }

        let last = self.tiles.len() as i64 - 1;
        let next = (self.cursor as i64 + step).clamp(0, last) as usize;

        if next == self.cursor {
            return false;
        }

        self.cursor = next;
        true
    }

    pub fn input(&mut self, config: &dyn InputConfig, event: InputEvent) -> GridResponse {
        let columns = self.columns();
        let step = if config.is_mapped_like("up", event) {
            -columns
        } else if config.is_mapped_like("down", event) {
            columns
        } else if config.is_mapped_like("left", event) {
            -1
        } else if config.is_mapped_like("right", event) {
            1
        } else {
            return GridResponse::default();
        };

        if event.is_pressed() {
            self.scroll = ScrollState {
                step,
                ..Default::default()
            };

            return GridResponse {
                consumed: true,
                cursor_changed: self.move_cursor(step),
            };
        }

        // Releasing a repeating direction settles the grid
        let was_repeating = self.scroll.repeating;
        self.scroll = ScrollState::default();

        GridResponse {
            consumed: true,
            cursor_changed: was_repeating,
        }
    }

    /// Advances hold-to-scroll. Returns true when the cursor or the scrolling state changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.scroll.step == 0 {
            return false;
        }

        let mut changed = false;
        self.scroll.held += dt;

        if !self.scroll.repeating {
            if self.scroll.held < SCROLL_DELAY {
                return false;
            }

            self.scroll.repeating = true;
            self.scroll.held -= SCROLL_DELAY;
            changed = true;
            changed |= self.move_cursor(self.scroll.step);
        }

        while self.scroll.held >= SCROLL_REPEAT {
            self.scroll.held -= SCROLL_REPEAT;
            changed |= self.move_cursor(self.scroll.step);
        }

        changed
    }

    pub fn apply_theme(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        let Some(elem) = theme.element(view, element, ElementKind::ImageGrid) else {
            return;
        };

        if flags.contains(ThemeFlags::POSITION) {
            if let Some(pos) = elem.pos {
                self.base
                    .set_position(pos[0] * ctx.screen.x, pos[1] * ctx.screen.y);
            }
        }

        if flags.contains(ThemeFlags::SIZE) {
            if let Some(size) = elem.size {
                self.base.size = Vec2::new(size[0] * ctx.screen.x, size[1] * ctx.screen.y);
            }
        }

        if flags.contains(ThemeFlags::Z_INDEX) {
            if let Some(z) = elem.z_index {
                self.base.set_default_z_index(z);
            }
        }

        if let Some(grid_size) = elem.grid_size {
            self.grid_size = Vec2::from_array(grid_size);
        }

        if let Some(source) = elem.image_source {
            self.image_source = source;
        }
    }
}

impl Default for ImageGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputMapping, Key};

    fn tile(n: usize) -> GridTile {
        GridTile {
            text: format!("Game {}", n),
            image_path: String::new(),
            video_path: String::new(),
            marquee_path: String::new(),
            object: GridObject::Placeholder,
        }
    }

    fn create_test_grid(count: usize) -> (ImageGrid, Vec<GridObject>) {
        let mut tree = crate::data::GameTree::new(crate::data::SystemInfo::new("nes", "NES", true));
        let root = tree.root();
        let mut grid = ImageGrid::new();
        grid.set_grid_size_override(Vec2::new(3.0, 2.0));

        let objects: Vec<GridObject> = (0..count)
            .map(|n| GridObject::Entry(tree.add_game(root, "rom", &format!("Game {}", n))))
            .collect();

        for (n, object) in objects.iter().enumerate() {
            grid.add(GridTile {
                object: *object,
                ..tile(n)
            });
        }

        (grid, objects)
    }

    #[test]
    fn test_navigation() {
        let (mut grid, objects) = create_test_grid(7);
        let mapping = InputMapping::with_defaults();

        let response = grid.input(&mapping, InputEvent::pressed(Key::RightArrow));
        assert!(response.consumed && response.cursor_changed);
        assert_eq!(grid.selected(), Some(objects[1]));

        grid.input(&mapping, InputEvent::released(Key::RightArrow));
        grid.input(&mapping, InputEvent::pressed(Key::DownArrow));
        assert_eq!(grid.cursor_index(), 4);

        // Clamped at the last tile
        grid.input(&mapping, InputEvent::pressed(Key::DownArrow));
        assert_eq!(grid.cursor_index(), 6);
        let response = grid.input(&mapping, InputEvent::pressed(Key::DownArrow));
        assert!(!response.cursor_changed);

        let response = grid.input(&mapping, InputEvent::pressed(Key::Enter));
        assert!(!response.consumed);
    }

    #[test]
    fn test_hold_to_scroll() {
        let (mut grid, _) = create_test_grid(20);
        let mapping = InputMapping::with_defaults();

        grid.input(&mapping, InputEvent::pressed(Key::RightArrow));
        assert!(!grid.tick(Duration::from_millis(400)));
        assert!(!grid.is_scrolling());

        assert!(grid.tick(Duration::from_millis(100)));
        assert!(grid.is_scrolling());
        assert_eq!(grid.cursor_index(), 2);

        grid.tick(Duration::from_millis(300));
        assert_eq!(grid.cursor_index(), 5);

        let response = grid.input(&mapping, InputEvent::released(Key::RightArrow));
        assert!(response.cursor_changed);
        assert!(!grid.is_scrolling());
        assert!(!grid.tick(Duration::from_secs(1)));
    }

    #[test]
    fn test_remove_keeps_cursor_valid() {
        let (mut grid, objects) = create_test_grid(3);
        grid.set_cursor(objects[2]);

        assert!(grid.remove(objects[2]));
        assert_eq!(grid.selected(), Some(objects[1]));

        assert!(grid.remove(objects[0]));
        assert_eq!(grid.selected(), Some(objects[1]));
        assert!(!grid.remove(objects[0]));

        assert!(grid.remove(objects[1]));
        assert!(grid.is_empty());
        assert_eq!(grid.selected(), None);
    }

    #[test]
    fn test_set_cursor() {
        let (mut grid, objects) = create_test_grid(3);
        assert!(grid.set_cursor(objects[1]));
        assert!(!grid.set_cursor(GridObject::Placeholder));
        assert_eq!(grid.cursor_index(), 1);

        assert!(!grid.set_cursor_index(3));
        assert!(grid.set_cursor_index(2));
        assert_eq!(grid.objects(), objects);
    }
}
