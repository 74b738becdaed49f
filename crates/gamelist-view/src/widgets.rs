use crate::fade::FadeState;
use crate::font::{Font, FontLibrary};
use crate::theme::{Alignment, ElementKind, ImageSource, ThemeData, ThemeElement, ThemeFlags};
use chrono::NaiveDateTime;
use glam::{Vec2, Vec3};
use log::debug;
use std::time::Duration;

/// What the theme attributes are resolved against
#[derive(Debug, Copy, Clone)]
pub struct ThemeContext {
    pub screen: Vec2,
    pub fonts: FontLibrary,
}

impl ThemeContext {
    fn scale(&self, v: [f32; 2]) -> Vec2 {
        Vec2::new(v[0] * self.screen.x, v[1] * self.screen.y)
    }
}

/// State every widget of the view shares
#[derive(Debug, Clone)]
pub struct WidgetBase {
    pub position: Vec3,
    pub size: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub visible: bool,
    pub fade: FadeState,
    default_z_index: f32,
    z_index: Option<f32>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            visible: true,
            fade: FadeState::default(),
            default_z_index: 0.0,
            z_index: None,
        }
    }
}

impl WidgetBase {
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec3::new(x, y, 0.0);
    }

    pub fn set_default_z_index(&mut self, z: f32) {
        self.default_z_index = z;
    }

    /// Theme override if one was applied, the default otherwise
    pub fn z_index(&self) -> f32 {
        self.z_index.unwrap_or(self.default_z_index)
    }

    pub fn opacity(&self) -> u8 {
        self.fade.opacity()
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Applies the attributes every widget understands. Size is left to the widgets as they
    /// interpret it differently.
    fn apply_common(&mut self, elem: &ThemeElement, flags: ThemeFlags, ctx: &ThemeContext) {
        if flags.contains(ThemeFlags::POSITION) {
            if let Some(pos) = elem.pos {
                let pos = ctx.scale(pos);
                self.set_position(pos.x, pos.y);
            }
        }

        if flags.contains(ThemeFlags::ORIGIN) {
            if let Some(origin) = elem.origin {
                self.origin = Vec2::from_array(origin);
            }
        }

        if flags.contains(ThemeFlags::ROTATION) {
            if let Some(rotation) = elem.rotation {
                self.rotation = rotation;
            }
        }

        if flags.contains(ThemeFlags::Z_INDEX) {
            if let Some(z) = elem.z_index {
                self.z_index = Some(z);
            }
        }

        if flags.contains(ThemeFlags::VISIBLE) {
            if let Some(visible) = elem.visible {
                self.visible = visible;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextWidget {
    pub base: WidgetBase,
    text: String,
    font: Font,
    color: u32,
    alignment: Alignment,
    auto_width: bool,
    auto_height: bool,
}

impl TextWidget {
    pub fn new(font: Font) -> Self {
        let mut widget = Self {
            base: WidgetBase::default(),
            text: String::new(),
            font,
            color: 0x000000FF,
            alignment: Alignment::Left,
            auto_width: true,
            auto_height: true,
        };

        widget.update_size();
        widget
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.update_size();
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.update_size();
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn size(&self) -> Vec2 {
        self.base.size
    }

    /// A zero component means the text decides that dimension itself
    pub fn set_size(&mut self, size: Vec2) {
        self.auto_width = size.x == 0.0;
        self.auto_height = size.y == 0.0;
        self.base.size = size;
        self.update_size();
    }

    fn update_size(&mut self) {
        match (self.auto_width, self.auto_height) {
            (true, true) => self.base.size = self.font.measure(&self.text),
            (false, true) => {
                self.base.size.y = self.font.measure_wrapped(&self.text, self.base.size.x).y
            }
            (true, false) => self.base.size.x = self.font.measure(&self.text).x,
            (false, false) => {}
        }
    }

    pub fn apply_theme(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        self.apply_theme_as(theme, view, element, ElementKind::Text, flags, ctx);
    }

    fn apply_theme_as(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        kind: ElementKind,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        let Some(elem) = theme.element(view, element, kind) else {
            return;
        };

        self.base.apply_common(elem, flags, ctx);

        if flags.contains(ThemeFlags::COLOR) {
            if let Some(color) = elem.color {
                self.color = color;
            }
        }

        if flags.contains(ThemeFlags::ALIGNMENT) {
            if let Some(alignment) = elem.alignment {
                self.alignment = alignment;
            }
        }

        if flags.contains(ThemeFlags::FONT_SIZE) {
            if let Some(font_size) = elem.font_size {
                self.set_font(ctx.fonts.from_theme(font_size));
            }
        }

        if flags.contains(ThemeFlags::TEXT) {
            if let Some(text) = &elem.text {
                self.set_text(text);
            }
        }

        if flags.contains(ThemeFlags::SIZE) {
            if let Some(size) = elem.size {
                self.set_size(ctx.scale(size));
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageWidget {
    pub base: WidgetBase,
    path: String,
    max_size: Option<Vec2>,
    allow_fading: bool,
}

impl ImageWidget {
    pub fn new() -> Self {
        Self {
            allow_fading: true,
            ..Default::default()
        }
    }

    pub fn image(&self) -> &str {
        &self.path
    }

    pub fn set_image(&mut self, path: &str) {
        self.path.clear();
        self.path.push_str(path);
    }

    pub fn max_size(&self) -> Option<Vec2> {
        self.max_size
    }

    pub fn set_max_size(&mut self, width: f32, height: f32) {
        self.max_size = Some(Vec2::new(width, height));
    }

    pub fn allow_fading(&self) -> bool {
        self.allow_fading
    }

    pub fn set_allow_fading(&mut self, allow: bool) {
        self.allow_fading = allow;
    }

    pub fn apply_theme(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        let Some(elem) = theme.element(view, element, ElementKind::Image) else {
            return;
        };

        self.base.apply_common(elem, flags, ctx);

        if flags.contains(ThemeFlags::SIZE) {
            if let Some(max_size) = elem.max_size {
                let max_size = ctx.scale(max_size);
                self.set_max_size(max_size.x, max_size.y);
            } else if let Some(size) = elem.size {
                self.base.size = ctx.scale(size);
                self.max_size = None;
            }
        }

        if flags.contains(ThemeFlags::PATH) {
            if let Some(path) = &elem.path {
                self.set_image(path);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VideoWidget {
    pub base: WidgetBase,
    video: String,
    snapshot: String,
    default_video: String,
    snapshot_source: ImageSource,
    start_delay: Duration,
}

impl VideoWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video(&self) -> &str {
        &self.video
    }

    /// Returns false when there is nothing to play
    pub fn set_video(&mut self, path: &str) -> bool {
        self.video.clear();
        self.video.push_str(path);
        !path.is_empty()
    }

    pub fn set_default_video(&mut self) {
        self.video.clone_from(&self.default_video);
    }

    pub fn default_video(&self) -> &str {
        &self.default_video
    }

    pub fn image(&self) -> &str {
        &self.snapshot
    }

    pub fn set_image(&mut self, path: &str) {
        self.snapshot.clear();
        self.snapshot.push_str(path);
    }

    pub fn snapshot_source(&self) -> ImageSource {
        self.snapshot_source
    }

    pub fn set_snapshot_source(&mut self, source: ImageSource) {
        self.snapshot_source = source;
    }

    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    pub fn set_start_delay(&mut self, delay: Duration) {
        self.start_delay = delay;
    }

    pub fn apply_theme(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        let Some(elem) = theme.element(view, element, ElementKind::Video) else {
            return;
        };

        self.base.apply_common(elem, flags, ctx);

        if flags.contains(ThemeFlags::SIZE) {
            if let Some(size) = elem.max_size.or(elem.size) {
                self.base.size = ctx.scale(size);
            }
        }

        // The fallback clip is part of the theme, not of the selection
        if let Some(default) = &elem.default {
            self.default_video.clone_from(default);
        }

        if flags.contains(ThemeFlags::DELAY) {
            if let Some(delay) = elem.delay {
                match Duration::try_from_secs_f32(delay.max(0.0)) {
                    Ok(delay) => self.start_delay = delay,
                    Err(err) => debug!("{}/{}: ignoring delay {}: {}", view, element, delay, err),
                }
            }
        }

        if let Some(source) = elem.snapshot_source {
            self.snapshot_source = source;
        }

        if flags.contains(ThemeFlags::PATH) {
            if let Some(path) = &elem.path {
                self.set_video(path);
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Rating,
    Date { relative: bool },
    Text,
}

impl ValueKind {
    fn element_kind(self) -> ElementKind {
        match self {
            ValueKind::Rating => ElementKind::Rating,
            ValueKind::Date { .. } => ElementKind::DateTime,
            ValueKind::Text => ElementKind::Text,
        }
    }
}

/// Value half of a metadata label/value pair
#[derive(Debug, Clone)]
pub struct ValueWidget {
    kind: ValueKind,
    raw: String,
    rating: f32,
    pub display: TextWidget,
}

impl ValueWidget {
    pub fn new(kind: ValueKind, font: Font) -> Self {
        Self {
            kind,
            raw: String::new(),
            rating: 0.0,
            display: TextWidget::new(font),
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn base(&self) -> &WidgetBase {
        &self.display.base
    }

    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.display.base
    }

    /// Raw metadata value as last set
    pub fn value(&self) -> &str {
        &self.raw
    }

    /// Fraction between 0 and 1, only meaningful for ratings
    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Text shown for the value
    pub fn text(&self) -> &str {
        self.display.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.raw.clear();
        self.raw.push_str(value);

        match self.kind {
            ValueKind::Rating => {
                self.rating = value.parse::<f32>().unwrap_or(0.0).clamp(0.0, 1.0);
                let stars = format!("{:.1}/5", self.rating * 5.0);
                self.display.set_text(&stars);
            }
            ValueKind::Date { relative } => {
                let now = chrono::Local::now().naive_local();
                self.display.set_text(&format_date(value, relative, now));
            }
            ValueKind::Text => self.display.set_text(value),
        }
    }

    pub fn apply_theme(
        &mut self,
        theme: &ThemeData,
        view: &str,
        element: &str,
        flags: ThemeFlags,
        ctx: &ThemeContext,
    ) {
        let kind = self.kind.element_kind();
        self.display
            .apply_theme_as(theme, view, element, kind, flags, ctx);
    }
}

const DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Formats a stored `YYYYMMDDTHHMMSS` timestamp either as a date or relative to `now`
pub(crate) fn format_date(value: &str, relative: bool, now: NaiveDateTime) -> String {
    let Ok(time) = NaiveDateTime::parse_from_str(value, DATE_FORMAT) else {
        return if relative { "never" } else { "unknown" }.to_owned();
    };

    if !relative {
        return time.format("%-m/%-d/%Y").to_string();
    }

    let elapsed = now.signed_duration_since(time);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    if elapsed.num_days() > 0 {
        plural(elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        plural(elapsed.num_minutes(), "minute")
    } else {
        "just now".to_owned()
    }
}

const AUTO_SCROLL_DELAY: Duration = Duration::from_secs(3);
const AUTO_SCROLL_RESET_DELAY: Duration = Duration::from_secs(5);
/// Pixels per second
const AUTO_SCROLL_SPEED: f32 = 20.0;

/// Scrolling container holding the description text
#[derive(Debug, Clone)]
pub struct DescriptionBox {
    pub container: WidgetBase,
    pub text: TextWidget,
    attached: bool,
    auto_scroll: bool,
    scroll: f32,
    timer: Duration,
}

impl DescriptionBox {
    pub fn new(font: Font) -> Self {
        Self {
            container: WidgetBase::default(),
            text: TextWidget::new(font),
            attached: true,
            auto_scroll: false,
            scroll: 0.0,
            timer: Duration::ZERO,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn set_auto_scroll(&mut self, auto_scroll: bool) {
        self.auto_scroll = auto_scroll;
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Back to the top, restarting the auto scroll delay
    pub fn reset(&mut self) {
        self.scroll = 0.0;
        self.timer = Duration::ZERO;
    }

    /// The container takes the placement of the element and the text everything else. Without
    /// the element the box is detached from the view.
    pub fn apply_theme(&mut self, theme: &ThemeData, view: &str, element: &str, ctx: &ThemeContext) {
        let Some(elem) = theme.element(view, element, ElementKind::Text) else {
            self.attached = false;
            return;
        };

        self.container
            .apply_common(elem, ThemeFlags::POSITION | ThemeFlags::Z_INDEX, ctx);

        if let Some(size) = elem.size {
            self.container.size = ctx.scale(size);
        }

        self.text.set_size(Vec2::new(self.container.size.x, 0.0));

        let text_flags = ThemeFlags::ALL
            - (ThemeFlags::POSITION
                | ThemeFlags::SIZE
                | ThemeFlags::ORIGIN
                | ThemeFlags::TEXT
                | ThemeFlags::ROTATION);
        self.text.apply_theme(theme, view, element, text_flags, ctx);

        self.attached = true;
    }

    fn max_scroll(&self) -> f32 {
        (self.text.size().y - self.container.size.y).max(0.0)
    }

    pub fn tick(&mut self, dt: Duration) {
        let max_scroll = self.max_scroll();
        if !self.auto_scroll || max_scroll <= 0.0 {
            return;
        }

        self.timer += dt;

        if self.scroll >= max_scroll {
            if self.timer >= AUTO_SCROLL_RESET_DELAY {
                self.reset();
            }
        } else if self.timer >= AUTO_SCROLL_DELAY {
            self.scroll = (self.scroll + AUTO_SCROLL_SPEED * dt.as_secs_f32()).min(max_scroll);
            if self.scroll >= max_scroll {
                self.timer = Duration::ZERO;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ThemeContext {
        ThemeContext {
            screen: Vec2::new(1000.0, 500.0),
            fonts: FontLibrary::new(500.0),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_text_auto_size() {
        let mut text = TextWidget::new(Font::from_px(20.0));
        text.set_text("abcd");
        assert_eq!(text.size(), Vec2::new(44.0, 30.0));

        text.set_size(Vec2::new(100.0, 0.0));
        text.set_text("aaaaa bbbbb ccccc");
        assert_eq!(text.size(), Vec2::new(100.0, 90.0));

        text.set_size(Vec2::new(10.0, 10.0));
        text.set_text("much longer text");
        assert_eq!(text.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_text_theme_respects_flags() {
        let theme = ThemeData::from_json5(
            r#"{ views: { grid: { elements: {
                md_name: { type: "text", pos: [0.5, 0.1], text: "Themed", color: "112233", zIndex: 50 },
            } } } }"#,
        )
        .unwrap();

        let mut text = TextWidget::new(Font::from_px(20.0));
        text.set_text("Game");
        text.apply_theme(&theme, "grid", "md_name", ThemeFlags::ALL - ThemeFlags::TEXT, &ctx());

        assert_eq!(text.text(), "Game");
        assert_eq!(text.base.position, Vec3::new(500.0, 50.0, 0.0));
        assert_eq!(text.color(), 0x112233FF);
        assert_eq!(text.base.z_index(), 50.0);
    }

    #[test]
    fn test_image_theme_skips_path() {
        let theme = ThemeData::from_json5(
            r#"{ views: { grid: { elements: {
                md_image: { type: "image", path: "theme.png", maxSize: [0.5, 0.5] },
            } } } }"#,
        )
        .unwrap();

        let mut image = ImageWidget::new();
        image.apply_theme(&theme, "grid", "md_image", ThemeFlags::ALL - ThemeFlags::PATH, &ctx());
        assert_eq!(image.image(), "");
        assert_eq!(image.max_size(), Some(Vec2::new(500.0, 250.0)));

        image.apply_theme(&theme, "grid", "md_image", ThemeFlags::ALL, &ctx());
        assert_eq!(image.image(), "theme.png");
    }

    #[test]
    fn test_video_default_and_snapshot_source() {
        let theme = ThemeData::from_json5(
            r#"{ views: { grid: { elements: {
                md_video: { type: "video", default: "intro.mp4", snapshotSource: "thumbnail", delay: 0.5 },
            } } } }"#,
        )
        .unwrap();

        let mut video = VideoWidget::new();
        video.apply_theme(&theme, "grid", "md_video", ThemeFlags::ALL - ThemeFlags::PATH, &ctx());
        assert_eq!(video.snapshot_source(), ImageSource::Thumbnail);
        assert_eq!(video.start_delay(), Duration::from_millis(500));

        assert!(!video.set_video(""));
        video.set_default_video();
        assert_eq!(video.video(), "intro.mp4");
    }

    #[test]
    fn test_video_out_of_range_delay_is_ignored() {
        let theme = ThemeData::from_json5(
            r#"{ views: { grid: { elements: {
                md_video: { type: "video", default: "intro.mp4", delay: 1e30 },
            } } } }"#,
        )
        .unwrap();

        let mut video = VideoWidget::new();
        video.set_start_delay(Duration::from_millis(250));
        video.apply_theme(&theme, "grid", "md_video", ThemeFlags::ALL - ThemeFlags::PATH, &ctx());
        assert_eq!(video.start_delay(), Duration::from_millis(250));
        assert!(!video.set_video(""));
        video.set_default_video();
        assert_eq!(video.video(), "intro.mp4");
    }

    #[test]
    fn test_rating_value() {
        let mut value = ValueWidget::new(ValueKind::Rating, Font::from_px(20.0));
        value.set_value("0.8");
        assert_eq!(value.rating(), 0.8);
        assert_eq!(value.text(), "4.0/5");

        value.set_value("garbage");
        assert_eq!(value.rating(), 0.0);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("19930115T000000", false, now()), "1/15/1993");
        assert_eq!(format_date("", false, now()), "unknown");
        assert_eq!(format_date("", true, now()), "never");
        assert_eq!(format_date("20240307T120000", true, now()), "3 days ago");
        assert_eq!(format_date("20240310T110000", true, now()), "1 hour ago");
        assert_eq!(format_date("20240310T115930", true, now()), "just now");
    }

    #[test]
    fn test_description_theme_attaches() {
        let theme = ThemeData::from_json5(
            r#"{ views: { grid: { elements: {
                md_description: { type: "text", pos: [0.5, 0.6], size: [0.4, 0.3], color: "FFFFFF" },
            } } } }"#,
        )
        .unwrap();

        let mut desc = DescriptionBox::new(Font::from_px(20.0));
        desc.apply_theme(&theme, "grid", "md_description", &ctx());
        assert!(desc.is_attached());
        assert_eq!(desc.container.position, Vec3::new(500.0, 300.0, 0.0));
        assert_eq!(desc.container.size, Vec2::new(400.0, 150.0));
        assert_eq!(desc.text.size().x, 400.0);
        assert_eq!(desc.text.base.position, Vec3::ZERO);
        assert_eq!(desc.text.color(), 0xFFFFFFFF);

        desc.apply_theme(&theme, "grid", "md_missing", &ctx());
        assert!(!desc.is_attached());
    }

    #[test]
    fn test_description_auto_scroll() {
        let mut desc = DescriptionBox::new(Font::from_px(20.0));
        desc.set_auto_scroll(true);
        desc.container.size = Vec2::new(100.0, 30.0);
        desc.text.set_size(Vec2::new(100.0, 0.0));
        desc.text.set_text("aaaaa bbbbb ccccc");

        desc.tick(Duration::from_secs(2));
        assert_eq!(desc.scroll_offset(), 0.0);

        desc.tick(Duration::from_secs(2));
        assert!(desc.scroll_offset() > 0.0);

        desc.reset();
        assert_eq!(desc.scroll_offset(), 0.0);
    }
}
