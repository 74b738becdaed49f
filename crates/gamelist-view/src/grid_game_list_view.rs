use crate::base::{GameListBase, NavigationAction};
use crate::controller::{FileChangeType, FileSystem, GameListController};
use crate::data::{EntryId, FileData, FileType, GameTree};
use crate::fade::{FadeState, OPAQUE, TRANSPARENT};
use crate::font::{FontLibrary, FontSize};
use crate::help::{HelpPrompt, BUTTON_BACK, BUTTON_OK};
use crate::image_grid::{GridObject, GridTile, ImageGrid};
use crate::input::{InputConfig, InputEvent};
use crate::layout::{layout_labels, layout_values};
use crate::metadata::{MetadataField, FIELD_COUNT};
use crate::ordering::{display_name, display_order, DisplayOptions};
use crate::settings::{Locale, Settings, FAVORITES_FIRST, QUICK_SYSTEM_SELECT};
use crate::theme::{Alignment, ElementKind, ImageSource, ThemeData, ThemeFlags};
use crate::widgets::{
    DescriptionBox, ImageWidget, TextWidget, ThemeContext, ValueWidget, VideoWidget, WidgetBase,
};
use glam::Vec2;
use log::{debug, warn};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const VIEW_TAG: &str = "grid";
const PADDING: f32 = 0.01;
const VIDEO_START_DELAY: Duration = Duration::from_millis(2000);

/// Collaborators shared by all views of the frontend
#[derive(Clone)]
pub struct ViewContext {
    pub settings: Rc<Settings>,
    pub locale: Rc<Locale>,
    pub controller: Rc<dyn GameListController>,
    pub file_system: Rc<dyn FileSystem>,
    pub fonts: FontLibrary,
}

/// Names the widgets the view is made of
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetId {
    Header,
    Grid,
    Name,
    Description,
    Video,
    Image,
    Thumbnail,
    Marquee,
    Label(MetadataField),
    Value(MetadataField),
}

type WidgetList = SmallVec<[WidgetId; 24]>;

/// Game list showing entries as a grid of tiles, with a metadata panel describing the selection
pub struct GridGameListView {
    size: Vec2,
    tree: Rc<RefCell<GameTree>>,
    root: EntryId,
    theme: Rc<ThemeData>,
    ctx: ViewContext,
    base: GameListBase,
    grid: ImageGrid,
    /// Only present while the grid shows it
    placeholder: Option<FileData>,
    video: Option<VideoWidget>,
    image: Option<ImageWidget>,
    thumbnail: Option<ImageWidget>,
    marquee: Option<ImageWidget>,
    labels: [TextWidget; FIELD_COUNT],
    values: [ValueWidget; FIELD_COUNT],
    name: TextWidget,
    description: DescriptionBox,
}

fn create_video(size: Vec2) -> VideoWidget {
    let mut video = VideoWidget::new();
    video.set_snapshot_source(ImageSource::Image);
    video.base.origin = Vec2::splat(0.5);
    video.base.set_position(size.x * 0.25, size.y * 0.4);
    video.base.size = Vec2::new(size.x * (0.5 - 2.0 * PADDING), size.y * 0.4);
    video.set_start_delay(VIDEO_START_DELAY);
    video.base.set_default_z_index(31.0);
    video
}

fn create_image(position: Vec2, max_size: Vec2, z_index: f32) -> ImageWidget {
    let mut image = ImageWidget::new();
    image.set_allow_fading(false);
    image.base.origin = Vec2::splat(0.5);
    image.base.set_position(position.x, position.y);
    image.set_max_size(max_size.x, max_size.y);
    image.base.set_default_z_index(z_index);
    image
}

/// Creates the widget on first use and themes it, or drops it when the theme lacks the element
fn reconcile_image(
    slot: &mut Option<ImageWidget>,
    theme: &ThemeData,
    view: &str,
    element: &str,
    ctx: &ThemeContext,
    create: impl FnOnce() -> ImageWidget,
) {
    if theme.element(view, element, ElementKind::Image).is_some() {
        slot.get_or_insert_with(create).apply_theme(
            theme,
            view,
            element,
            ThemeFlags::ALL - ThemeFlags::PATH,
            ctx,
        );
    } else if slot.take().is_some() {
        debug!("{}: no {} in theme, dropping widget", view, element);
    }
}

fn tile_image_path(data: &FileData, source: ImageSource) -> &str {
    match source {
        ImageSource::Image => data.image_path(),
        ImageSource::Marquee => data.marquee_path(),
        ImageSource::Thumbnail => data.thumbnail_path(),
    }
}

/// Image shown in the panel: the cover, or the thumbnail when there is no cover
fn panel_image_path(data: &FileData) -> &str {
    if data.image_path().is_empty() {
        data.thumbnail_path()
    } else {
        data.image_path()
    }
}

fn collect_games(tree: &GameTree, folder: EntryId, games: &mut Vec<EntryId>) {
    for id in tree.children_to_display(folder) {
        match tree.get(id).map(FileData::file_type) {
            Some(FileType::Game) => games.push(id),
            Some(FileType::Folder) => collect_games(tree, id, games),
            _ => {}
        }
    }
}

impl GridGameListView {
    pub fn new(
        size: Vec2,
        tree: Rc<RefCell<GameTree>>,
        root: EntryId,
        theme: Rc<ThemeData>,
        theme_name: &str,
        grid_size: Vec2,
        ctx: ViewContext,
    ) -> Self {
        let small = ctx.fonts.get(FontSize::Small);

        let mut grid = ImageGrid::new();
        grid.set_grid_size_override(grid_size);
        grid.base.set_position(size.x * 0.1, size.y * 0.1);
        grid.base.set_default_z_index(20.0);

        let labels = MetadataField::ALL.map(|field| {
            let mut label = TextWidget::new(small);
            label.set_text(&format!("{}: ", ctx.locale.translate(field.label_key())));
            label
        });

        let values = MetadataField::ALL.map(|field| ValueWidget::new(field.value_kind(), small));

        let mut name = TextWidget::new(ctx.fonts.get(FontSize::Medium));
        name.base.set_position(size.x, size.y);
        name.base.set_default_z_index(40.0);
        name.set_color(0xAAAAAAFF);
        name.set_alignment(Alignment::Center);

        let mut description = DescriptionBox::new(small);
        description
            .container
            .set_position(size.x * PADDING, size.y * 0.65);
        description.container.size = Vec2::new(
            size.x * (0.5 - 2.0 * PADDING),
            size.y - description.container.position.y,
        );
        description.set_auto_scroll(true);
        description.container.set_default_z_index(40.0);
        description
            .text
            .set_size(Vec2::new(description.container.size.x, 0.0));

        let base = GameListBase::new(VIEW_TAG, size, &ctx.fonts);

        let mut view = Self {
            size,
            tree,
            root,
            theme,
            ctx,
            base,
            grid,
            placeholder: None,
            video: None,
            image: None,
            thumbnail: None,
            marquee: None,
            labels,
            values,
            name,
            description,
        };

        view.layout_metadata();

        if !theme_name.is_empty() {
            view.set_theme_name(theme_name);
        }

        view.apply_theme_elements();

        let children = view.tree.borrow().children_to_display(root);
        view.populate(&children);
        view.on_selection_changed();
        view
    }

    fn theme_context(&self) -> ThemeContext {
        ThemeContext {
            screen: self.size,
            fonts: self.ctx.fonts,
        }
    }

    fn layout_metadata(&mut self) {
        let small = self.ctx.fonts.get(FontSize::Small);
        layout_labels(&mut self.labels, self.size, small);
        layout_values(
            &self.labels,
            &mut self.values,
            &mut self.description,
            self.size,
            small,
        );
    }

    /// Name the theme elements are looked up under
    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn set_theme_name(&mut self, name: &str) {
        self.base.set_theme_name(name);
        let name = self.base.name().to_owned();
        self.grid.set_theme_name(&name);
    }

    pub fn apply_theme(&mut self, theme: Rc<ThemeData>) {
        self.theme = theme;
        self.on_theme_changed();
    }

    /// Reconfigures every widget from the current theme. Optional media widgets exist exactly when
    /// their element is in the theme.
    pub fn on_theme_changed(&mut self) {
        self.apply_theme_elements();
        self.on_selection_changed();
    }

    fn apply_theme_elements(&mut self) {
        let theme = Rc::clone(&self.theme);
        let view = self.base.name().to_owned();
        let ctx = self.theme_context();
        let size = self.size;

        self.base.apply_theme(&theme, &ctx);
        self.grid
            .apply_theme(&theme, &view, "gamegrid", ThemeFlags::ALL, &ctx);
        self.name
            .apply_theme(&theme, &view, "md_name", ThemeFlags::ALL, &ctx);

        if theme.element(&view, "md_video", ElementKind::Video).is_some() {
            self.video
                .get_or_insert_with(|| create_video(size))
                .apply_theme(&theme, &view, "md_video", ThemeFlags::ALL - ThemeFlags::PATH, &ctx);
        } else if self.video.take().is_some() {
            debug!("{}: no md_video in theme, dropping widget", view);
        }

        let image_pos = Vec2::new(size.x * 0.25, self.grid.base.position.y + size.y * 0.2125);
        let image_max = Vec2::new(size.x * (0.5 - 2.0 * PADDING), size.y * 0.4);

        reconcile_image(&mut self.image, &theme, &view, "md_image", &ctx, || {
            create_image(image_pos, image_max, 30.0)
        });
        reconcile_image(&mut self.thumbnail, &theme, &view, "md_thumbnail", &ctx, || {
            create_image(image_pos, image_max, 30.0)
        });
        reconcile_image(&mut self.marquee, &theme, &view, "md_marquee", &ctx, || {
            create_image(
                Vec2::new(size.x * 0.25, size.y * 0.10),
                Vec2::new(size.x * (0.5 - 2.0 * PADDING), size.y * 0.18),
                35.0,
            )
        });

        let small = self.ctx.fonts.get(FontSize::Small);

        layout_labels(&mut self.labels, size, small);
        for (label, field) in self.labels.iter_mut().zip(MetadataField::ALL) {
            label.apply_theme(&theme, &view, field.label_element(), ThemeFlags::ALL, &ctx);
        }

        layout_values(&self.labels, &mut self.values, &mut self.description, size, small);
        for (value, field) in self.values.iter_mut().zip(MetadataField::ALL) {
            value.apply_theme(
                &theme,
                &view,
                field.value_element(),
                ThemeFlags::ALL - ThemeFlags::TEXT,
                &ctx,
            );
        }

        self.description
            .apply_theme(&theme, &view, "md_description", &ctx);
    }

    /// Replaces the grid content with `entries`
    pub fn populate(&mut self, entries: &[EntryId]) {
        self.grid.clear();
        self.placeholder = None;

        let tree = Rc::clone(&self.tree);
        let tree = tree.borrow();
        let system = tree.system();
        self.base.header.set_text(&system.full_name);

        let items: Vec<(EntryId, bool)> = entries
            .iter()
            .filter_map(|id| tree.get(*id).map(|data| (*id, data.is_favorite())))
            .collect();

        if items.is_empty() {
            self.add_placeholder();
            return;
        }

        let options =
            DisplayOptions::for_system(&system.name, self.ctx.settings.get_bool(FAVORITES_FIRST));
        let source = self.grid.image_source();

        for id in display_order(&items, options.favorites_first) {
            let Some(data) = tree.get(id) else {
                continue;
            };

            self.grid.add(GridTile {
                text: display_name(data.name(), data.is_favorite(), options).into_owned(),
                image_path: tile_image_path(data, source).to_owned(),
                video_path: data.video_path().to_owned(),
                marquee_path: data.marquee_path().to_owned(),
                object: GridObject::Entry(id),
            });
        }

        debug!("{}: populated {} entries", system.name, self.grid.len());
    }

    fn add_placeholder(&mut self) {
        let placeholder = FileData::placeholder();

        self.grid.add(GridTile {
            text: placeholder.name().to_owned(),
            image_path: String::new(),
            video_path: String::new(),
            marquee_path: String::new(),
            object: GridObject::Placeholder,
        });

        self.placeholder = Some(placeholder);
    }

    /// Shows the selected entry in the panel. Returns false when nothing is selected.
    fn show_selected(&mut self) -> bool {
        match self.grid.selected() {
            Some(GridObject::Entry(id)) => {
                let tree = Rc::clone(&self.tree);
                let tree = tree.borrow();
                let Some(file) = tree.get(id) else {
                    return false;
                };

                self.show_entry(file);
                true
            }
            Some(GridObject::Placeholder) => match self.placeholder.take() {
                Some(placeholder) => {
                    self.show_entry(&placeholder);
                    self.placeholder = Some(placeholder);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Brings the metadata panel in line with the grid selection
    pub fn on_selection_changed(&mut self) {
        let shown = !self.grid.is_scrolling() && self.show_selected();

        let target = if shown {
            OPAQUE
        } else {
            if let Some(video) = &mut self.video {
                video.set_video("");
                video.set_image("");
            }

            if let Some(image) = &mut self.image {
                image.set_image("");
            }

            TRANSPARENT
        };

        for fade in self.tracked_fades() {
            fade.fade_to(target);
        }
    }

    fn show_entry(&mut self, file: &FileData) {
        let image_path = panel_image_path(file);

        if let Some(video) = &mut self.video {
            if !video.set_video(file.video_path()) {
                video.set_default_video();
            }

            let snapshot = match video.snapshot_source() {
                ImageSource::Marquee if !file.marquee_path().is_empty() => file.marquee_path(),
                ImageSource::Thumbnail if !file.thumbnail_path().is_empty() => {
                    file.thumbnail_path()
                }
                _ => image_path,
            };

            video.set_image(snapshot);
        }

        if let Some(image) = &mut self.image {
            image.set_image(image_path);
        }

        if let Some(thumbnail) = &mut self.thumbnail {
            thumbnail.set_image(file.thumbnail_path());
        }

        if let Some(marquee) = &mut self.marquee {
            marquee.set_image(file.marquee_path());
        }

        self.description.text.set_text(file.metadata.get("desc"));
        self.description.reset();

        let is_game = file.file_type() == FileType::Game;

        for (value, field) in self.values.iter_mut().zip(MetadataField::ALL) {
            if field.games_only() && !is_game {
                continue;
            }

            value.set_value(file.metadata.get(field.metadata_key()));
        }

        self.name.set_text(file.name());
    }

    /// Widgets faded in and out with the selection
    fn tracked_fades(&mut self) -> SmallVec<[&mut FadeState; 24]> {
        let mut fades: SmallVec<[&mut FadeState; 24]> = SmallVec::new();

        fades.extend(self.values.iter_mut().map(|v| &mut v.display.base.fade));

        if let Some(video) = &mut self.video {
            fades.push(&mut video.base.fade);
        }

        for image in [&mut self.marquee, &mut self.thumbnail, &mut self.image]
            .into_iter()
            .flatten()
        {
            fades.push(&mut image.base.fade);
        }

        fades.push(&mut self.description.text.base.fade);
        fades.push(&mut self.name.base.fade);
        fades.extend(self.labels.iter_mut().map(|l| &mut l.base.fade));
        fades
    }

    /// Selected object, `None` only while the grid is empty
    pub fn cursor(&self) -> Option<GridObject> {
        self.grid.selected()
    }

    /// Moves the cursor to `entry`, switching to its folder if the grid doesn't show it
    pub fn set_cursor(&mut self, entry: EntryId) {
        if !self.grid.set_cursor(GridObject::Entry(entry)) {
            let parent = self.tree.borrow().parent(entry);

            if let Some(parent) = parent {
                let siblings = self.tree.borrow().children_to_display(parent);
                self.populate(&siblings);

                if !self.grid.set_cursor(GridObject::Entry(entry)) {
                    debug!("{:?} not found after repopulating", entry);
                }
            }
        }

        self.on_selection_changed();
    }

    pub fn cursor_index(&self) -> usize {
        self.grid.cursor_index()
    }

    pub fn set_cursor_index(&mut self, index: usize) {
        if self.grid.set_cursor_index(index) {
            self.on_selection_changed();
        }
    }

    /// Objects of the grid in display order
    pub fn file_data_entries(&self) -> Vec<GridObject> {
        self.grid.objects()
    }

    pub fn on_file_changed(&mut self, entry: EntryId, change: FileChangeType) {
        if change == FileChangeType::MetadataChanged {
            self.ctx.controller.reload_game_list_view();
            return;
        }

        debug!("{:?} changed ({:?}), repopulating", entry, change);

        let cursor = match self.grid.selected() {
            Some(GridObject::Entry(id)) => Some(id),
            _ => None,
        }
        .filter(|id| self.tree.borrow().contains(*id));

        match cursor {
            Some(id) => {
                let folder = self.tree.borrow().parent(id).unwrap_or(self.root);
                let children = self.tree.borrow().children_to_display(folder);
                self.populate(&children);
                self.set_cursor(id);
            }
            None => {
                let children = self.tree.borrow().children_to_display(self.root);
                self.populate(&children);
                self.on_selection_changed();
            }
        }
    }

    /// Removes `entry` from the view and the game tree, optionally deleting its file first
    pub fn remove(&mut self, entry: EntryId, delete_file: bool) {
        if delete_file {
            let path = self
                .tree
                .borrow()
                .get(entry)
                .map(|data| data.path().to_path_buf());

            if let Some(path) = path {
                if let Err(err) = self.ctx.file_system.remove_file(&path) {
                    warn!("Unable to delete {}: {}", path.display(), err);
                }
            }
        }

        let parent = self.tree.borrow().parent(entry);

        if self.cursor() == Some(GridObject::Entry(entry)) {
            let siblings = parent
                .map(|parent| self.tree.borrow().children_to_display(parent))
                .unwrap_or_default();

            if let Some(pos) = siblings.iter().position(|id| *id == entry) {
                if pos + 1 < siblings.len() {
                    self.set_cursor(siblings[pos + 1]);
                } else if pos > 1 {
                    // The first sibling is never picked as the fallback
                    self.set_cursor(siblings[pos - 1]);
                }
            }
        }

        self.grid.remove(GridObject::Entry(entry));

        if self.grid.is_empty() {
            self.add_placeholder();
        }

        self.tree.borrow_mut().remove(entry);
        self.on_file_changed(parent.unwrap_or(self.root), FileChangeType::Removed);
    }

    /// Returns true if the input was consumed
    pub fn input(&mut self, config: &dyn InputConfig, event: InputEvent) -> bool {
        let settings = Rc::clone(&self.ctx.settings);

        if !settings.is_kid_mode() && event.is_pressed() && config.is_mapped_to("select", event) {
            let controller = &self.ctx.controller;
            controller.play_sound(self.base.name(), "menuOpen");
            controller.open_gamelist_options(self.tree.borrow().system());
            return true;
        }

        if config.is_mapped_like("left", event) || config.is_mapped_like("right", event) {
            return self.grid_input(config, event);
        }

        let cursor = self.cursor();
        let action = {
            let tree = self.tree.borrow();
            self.base.input(config, event, cursor, &tree, &settings)
        };

        if let Some(action) = action {
            if self.execute(action) {
                return true;
            }
        }

        self.grid_input(config, event)
    }

    fn grid_input(&mut self, config: &dyn InputConfig, event: InputEvent) -> bool {
        let response = self.grid.input(config, event);

        if response.cursor_changed {
            self.on_selection_changed();
        }

        response.consumed
    }

    /// Returns false when the action turned out to do nothing
    fn execute(&mut self, action: NavigationAction) -> bool {
        let controller = Rc::clone(&self.ctx.controller);

        match action {
            NavigationAction::Launch(game) => {
                controller.play_sound(self.base.name(), "launch");
                self.launch(game);
            }
            NavigationAction::EnterFolder(folder) => {
                let children = self.tree.borrow().children_to_display(folder);
                self.populate(&children);
                self.on_selection_changed();
            }
            NavigationAction::LeaveFolder(folder) => {
                let parent = self.tree.borrow().parent(folder).unwrap_or(self.root);
                let children = self.tree.borrow().children_to_display(parent);
                self.populate(&children);
                self.set_cursor(folder);
                controller.play_sound(self.base.name(), "back");
            }
            NavigationAction::ToSystemView => {
                controller.go_to_system_view(self.tree.borrow().system());
            }
            NavigationAction::NextSystem => controller.go_to_next_system(),
            NavigationAction::PrevSystem => controller.go_to_prev_system(),
            NavigationAction::RandomGame => self.select_random_game(),
            NavigationAction::ToggleInCollection(game) => {
                let tree = self.tree.borrow();
                return tree
                    .get(game)
                    .is_some_and(|data| controller.toggle_in_editing_collection(data));
            }
            NavigationAction::Stay => {}
        }

        true
    }

    fn select_random_game(&mut self) {
        let mut games = Vec::new();
        collect_games(&self.tree.borrow(), self.root, &mut games);

        if games.is_empty() {
            return;
        }

        let index = self.ctx.controller.random_index(games.len()).min(games.len() - 1);
        self.set_cursor(games[index]);
    }

    pub fn launch(&self, game: EntryId) {
        let tree = self.tree.borrow();

        if let Some(data) = tree.get(game) {
            self.ctx.controller.launch(data);
        }
    }

    pub fn help_prompts(&self) -> Vec<HelpPrompt> {
        let locale = &self.ctx.locale;
        let settings = &self.ctx.settings;
        let is_game_system = self.tree.borrow().system().is_game_system;
        let mut prompts = Vec::with_capacity(7);

        if settings.get_bool(QUICK_SYSTEM_SELECT) {
            prompts.push(HelpPrompt::new("lr", locale.translate("SYSTEM")));
        }

        prompts.push(HelpPrompt::new("up/down/left/right", locale.translate("CHOOSE")));
        prompts.push(HelpPrompt::new(BUTTON_OK, locale.translate("LAUNCH")));
        prompts.push(HelpPrompt::new(BUTTON_BACK, locale.translate("BACK")));

        if !settings.is_kid_mode() {
            prompts.push(HelpPrompt::new("select", locale.translate("OPTIONS")));
        }

        if is_game_system {
            prompts.push(HelpPrompt::new("x", locale.translate("RANDOM")));
        }

        if is_game_system && !settings.is_kid_mode() {
            let collection = self.ctx.controller.editing_collection_name();
            prompts.push(HelpPrompt::new("y", &collection));
        }

        prompts
    }

    pub fn on_show(&mut self) {
        self.on_selection_changed();
    }

    /// Advances scrolling and fades
    pub fn tick(&mut self, dt: Duration) {
        if self.grid.tick(dt) {
            self.on_selection_changed();
        }

        self.description.tick(dt);

        for fade in self.tracked_fades() {
            fade.tick(dt);
        }
    }

    pub fn widget(&self, id: WidgetId) -> Option<&WidgetBase> {
        match id {
            WidgetId::Header => Some(&self.base.header.base),
            WidgetId::Grid => Some(&self.grid.base),
            WidgetId::Name => Some(&self.name.base),
            WidgetId::Description => Some(&self.description.container),
            WidgetId::Video => self.video.as_ref().map(|v| &v.base),
            WidgetId::Image => self.image.as_ref().map(|i| &i.base),
            WidgetId::Thumbnail => self.thumbnail.as_ref().map(|i| &i.base),
            WidgetId::Marquee => self.marquee.as_ref().map(|i| &i.base),
            WidgetId::Label(field) => Some(&self.labels[field.index()].base),
            WidgetId::Value(field) => Some(self.values[field.index()].base()),
        }
    }

    /// Attached widgets in drawing order
    pub fn children(&self) -> WidgetList {
        let mut ids = WidgetList::new();
        ids.push(WidgetId::Header);
        ids.push(WidgetId::Grid);

        for field in MetadataField::ALL {
            ids.push(WidgetId::Label(field));
            ids.push(WidgetId::Value(field));
        }

        ids.push(WidgetId::Name);

        if self.description.is_attached() {
            ids.push(WidgetId::Description);
        }

        for (id, present) in [
            (WidgetId::Video, self.video.is_some()),
            (WidgetId::Image, self.image.is_some()),
            (WidgetId::Thumbnail, self.thumbnail.is_some()),
            (WidgetId::Marquee, self.marquee.is_some()),
        ] {
            if present {
                ids.push(id);
            }
        }

        let z_index = |id: &WidgetId| self.widget(*id).map_or(0.0, WidgetBase::z_index);
        ids.sort_by(|a, b| z_index(a).total_cmp(&z_index(b)));
        ids
    }

    pub fn grid(&self) -> &ImageGrid {
        &self.grid
    }

    pub fn header(&self) -> &TextWidget {
        &self.base.header
    }

    pub fn video(&self) -> Option<&VideoWidget> {
        self.video.as_ref()
    }

    pub fn image(&self) -> Option<&ImageWidget> {
        self.image.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageWidget> {
        self.thumbnail.as_ref()
    }

    pub fn marquee(&self) -> Option<&ImageWidget> {
        self.marquee.as_ref()
    }

    pub fn label(&self, field: MetadataField) -> &TextWidget {
        &self.labels[field.index()]
    }

    pub fn value(&self, field: MetadataField) -> &ValueWidget {
        &self.values[field.index()]
    }

    pub fn name_label(&self) -> &TextWidget {
        &self.name
    }

    pub fn description(&self) -> &DescriptionBox {
        &self.description
    }

    /// The synthetic entry shown while there is nothing else to list
    pub fn placeholder(&self) -> Option<&FileData> {
        self.placeholder.as_ref()
    }
}
