use glam::Vec2;

/// Line height relative to the nominal pixel size
const LINE_SPACING: f32 = 1.5;
/// Average glyph advance relative to the nominal pixel size
const GLYPH_ADVANCE: f32 = 0.55;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontSize {
    Mini,
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Pixel size as a fraction of the screen height
    fn screen_fraction(self) -> f32 {
        match self {
            FontSize::Mini => 0.030,
            FontSize::Small => 0.035,
            FontSize::Medium => 0.045,
            FontSize::Large => 0.085,
        }
    }
}

/// Metrics of a loaded font. Glyph rasterization is done by the renderer, the views only need
/// sizes to lay text out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Font {
    px: f32,
}

impl Font {
    pub fn from_px(px: f32) -> Self {
        Self { px: px.max(1.0) }
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn height(&self) -> f32 {
        (self.px * LINE_SPACING).round()
    }

    /// Size of `text` laid out on a single line
    pub fn measure(&self, text: &str) -> Vec2 {
        let width = text.chars().count() as f32 * self.px * GLYPH_ADVANCE;
        Vec2::new(width.round(), self.height())
    }

    /// Size of `text` word-wrapped to `max_width`
    pub fn measure_wrapped(&self, text: &str, max_width: f32) -> Vec2 {
        if max_width <= 0.0 {
            return self.measure(text);
        }

        let advance = self.px * GLYPH_ADVANCE;
        let mut lines = 0;
        let mut widest: f32 = 0.0;

        for paragraph in text.split('\n') {
            let mut line_width: f32 = 0.0;
            lines += 1;

            for word in paragraph.split(' ') {
                let word_width = word.chars().count() as f32 * advance;
                let with_space = if line_width > 0.0 { advance } else { 0.0 };

                if line_width > 0.0 && line_width + with_space + word_width > max_width {
                    widest = widest.max(line_width);
                    lines += 1;
                    line_width = word_width;
                } else {
                    line_width += with_space + word_width;
                }
            }

            widest = widest.max(line_width);
        }

        Vec2::new(widest.min(max_width).round(), lines as f32 * self.height())
    }
}

/// Resolves nominal font sizes against the screen the view is shown on
#[derive(Debug, Copy, Clone)]
pub struct FontLibrary {
    screen_height: f32,
}

impl FontLibrary {
    pub fn new(screen_height: f32) -> Self {
        Self { screen_height }
    }

    pub fn get(&self, size: FontSize) -> Font {
        Font::from_px((size.screen_fraction() * self.screen_height).round())
    }

    /// Theme font sizes are fractions of the screen height
    pub fn from_theme(&self, font_size: f32) -> Font {
        Font::from_px((font_size * self.screen_height).round())
    }
}
