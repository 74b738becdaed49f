use gamelist_view::font::FontLibrary;
use gamelist_view::input::InputEvent;
use gamelist_view::metadata::MetadataField;
use gamelist_view::theme::ThemeData;
use gamelist_view::{
    FileData, FrontendConfig, GameListController, GameListResult, GameTree, GridGameListView,
    StdFileSystem, SystemInfo, ViewContext,
};
use glam::Vec2;
use log::{debug, error, info, LevelFilter};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

const DEFAULT_CONFIG: &str = "data/test_data/frontend.json5";
const FRAME: Duration = Duration::from_millis(16);
/// Time given to the view after each scripted key so fades settle
const SETTLE: Duration = Duration::from_millis(200);

/// Stands in for the rest of the frontend by logging what the view asks for
struct LoggingController {
    seed: Cell<u64>,
}

impl GameListController for LoggingController {
    fn launch(&self, game: &FileData) {
        info!("Launching {} ({})", game.name(), game.path().display());
    }

    fn reload_game_list_view(&self) {
        info!("Reloading game list view");
    }

    fn open_gamelist_options(&self, system: &SystemInfo) {
        info!("Opening options for {}", system.full_name);
    }

    fn play_sound(&self, view: &str, sound: &str) {
        debug!("Playing {}/{}", view, sound);
    }

    fn go_to_system_view(&self, system: &SystemInfo) {
        info!("Back to system view at {}", system.full_name);
    }

    fn go_to_next_system(&self) {
        info!("Next system");
    }

    fn go_to_prev_system(&self) {
        info!("Previous system");
    }

    fn random_index(&self, len: usize) -> usize {
        let next = self
            .seed
            .get()
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.seed.set(next);
        ((next >> 33) as usize) % len.max(1)
    }

    fn toggle_in_editing_collection(&self, game: &FileData) -> bool {
        info!("Toggling {} in Favorites", game.name());
        true
    }

    fn editing_collection_name(&self) -> String {
        "Favorites".to_owned()
    }
}

fn advance(view: &mut GridGameListView, duration: Duration) {
    let mut left = duration;

    while !left.is_zero() {
        let dt = left.min(FRAME);
        view.tick(dt);
        left -= dt;
    }
}

fn log_panel(view: &GridGameListView) {
    info!(
        "[{}] {}",
        view.cursor_index(),
        view.name_label().text()
    );

    for field in MetadataField::ALL {
        debug!(
            "  {}{}",
            view.label(field).text(),
            view.value(field).text()
        );
    }

    if let Some(video) = view.video() {
        debug!("  video: {} snapshot: {}", video.video(), video.image());
    }
}

fn run(config_path: &Path) -> GameListResult<()> {
    let config = FrontendConfig::load(config_path)?;
    let theme = Rc::new(ThemeData::load(&config.theme)?);
    let tree = GameTree::load(&config.gamelist)?;
    let root = tree.root();

    info!(
        "Loaded {} with {} entries",
        tree.system().full_name,
        tree.len() - 1
    );

    let screen = Vec2::from_array(config.screen);

    let ctx = ViewContext {
        settings: Rc::new(config.settings.clone()),
        locale: Rc::new(config.locale.clone()),
        controller: Rc::new(LoggingController { seed: Cell::new(1) }),
        file_system: Rc::new(StdFileSystem),
        fonts: FontLibrary::new(screen.y),
    };

    let mut view = GridGameListView::new(
        screen,
        Rc::new(RefCell::new(tree)),
        root,
        theme,
        &config.theme_name,
        Vec2::from_array(config.grid_size),
        ctx,
    );

    for prompt in view.help_prompts() {
        debug!("Help: {} {}", prompt.input, prompt.label);
    }

    log_panel(&view);

    for step in &config.script {
        let consumed = view.input(&config.input, InputEvent::pressed(step.key));
        advance(&mut view, Duration::from_millis(step.hold_ms));
        view.input(&config.input, InputEvent::released(step.key));
        advance(&mut view, SETTLE);

        debug!("{:?} consumed: {}", step.key, consumed);
        log_panel(&view);
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_owned());

    if let Err(e) = run(Path::new(&config_path)) {
        error!("Unable to run {}: {}", config_path, e);
        std::process::exit(1);
    }
}
