use crate::font::Font;
use crate::widgets::{DescriptionBox, TextWidget, ValueKind, ValueWidget};
use glam::{Vec2, Vec3};

const COLUMN_COUNT: usize = 2;
/// Width of both metadata columns together, relative to the screen
const METADATA_WIDTH: f32 = 0.48;
const METADATA_Z_INDEX: f32 = 40.0;

fn column_width(screen: Vec2) -> f32 {
    (screen.x * METADATA_WIDTH) / COLUMN_COUNT as f32
}

/// Places the labels in a two column grid. Each row starts below the previous label so the row
/// height follows the font actually used.
pub fn layout_labels(labels: &mut [TextWidget], screen: Vec2, font: Font) {
    let row_count = (labels.len() / COLUMN_COUNT).max(1);
    let start = Vec3::new(screen.x * 0.01, screen.y * 0.625, 0.0);
    let col_size = column_width(screen);
    let row_padding = 0.01 * screen.y;

    for i in 0..labels.len() {
        let row = i % row_count;
        let pos = if row == 0 {
            start + Vec3::new(col_size * (i / row_count) as f32, 0.0, 0.0)
        } else {
            let above = &labels[i - 1];
            above.base.position + Vec3::new(0.0, above.size().y + row_padding, 0.0)
        };

        let label = &mut labels[i];
        label.set_size(Vec2::ZERO);
        label.set_font(font);
        label.base.position = pos;
        label.base.set_default_z_index(METADATA_Z_INDEX);
    }
}

/// Places every value right after its label and vertically centred on it, then fits the
/// description box into the space below the lowest value.
pub fn layout_values(
    labels: &[TextWidget],
    values: &mut [ValueWidget],
    description: &mut DescriptionBox,
    screen: Vec2,
    font: Font,
) {
    let col_size = column_width(screen);
    let mut bottom: f32 = 0.0;

    for (label, value) in labels.iter().zip(values.iter_mut()) {
        match value.kind() {
            ValueKind::Rating => {
                let height = font.height();
                value.display.set_size(Vec2::new(height * 5.0, height));
            }
            _ => {
                value.display.set_size(Vec2::ZERO);
                value.display.set_font(font);
            }
        }

        let label_size = label.size();
        let value_height = value.display.size().y;
        let height_diff = (label_size.y - value_height) / 2.0;

        value.base_mut().position = label.base.position + Vec3::new(label_size.x, height_diff, 0.0);
        value
            .display
            .set_size(Vec2::new(col_size - label_size.x, value_height));
        value.base_mut().set_default_z_index(METADATA_Z_INDEX);

        bottom = bottom.max(value.base().bottom());
    }

    let container = &mut description.container;
    container.position.y = bottom + screen.y * 0.01;
    container.size.y = screen.y - container.position.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(1000.0, 1000.0);

    fn create_labels(font: Font) -> Vec<TextWidget> {
        (0..8)
            .map(|i| {
                let mut label = TextWidget::new(font);
                label.set_text(&format!("Label {}: ", i));
                label
            })
            .collect()
    }

    fn create_values(font: Font) -> Vec<ValueWidget> {
        (0..8)
            .map(|i| {
                let kind = if i == 0 { ValueKind::Rating } else { ValueKind::Text };
                ValueWidget::new(kind, font)
            })
            .collect()
    }

    #[test]
    fn test_labels_form_two_columns() {
        let font = Font::from_px(20.0);
        let mut labels = create_labels(font);
        layout_labels(&mut labels, SCREEN, font);

        assert_eq!(labels[0].base.position, Vec3::new(10.0, 625.0, 0.0));
        assert_eq!(labels[4].base.position, Vec3::new(250.0, 625.0, 0.0));
        // 30 pixels of text plus 10 of padding per row
        assert_eq!(labels[1].base.position.y, 665.0);
        assert_eq!(labels[3].base.position.y, 745.0);
        assert_eq!(labels[7].base.position, Vec3::new(250.0, 745.0, 0.0));
        assert_eq!(labels[5].base.z_index(), 40.0);
    }

    #[test]
    fn test_values_follow_labels() {
        let font = Font::from_px(20.0);
        let mut labels = create_labels(font);
        let mut values = create_values(font);
        let mut description = DescriptionBox::new(font);
        layout_labels(&mut labels, SCREEN, font);

        // Taller label for the second row to check vertical centring
        labels[1].set_font(Font::from_px(40.0));
        layout_values(&labels, &mut values, &mut description, SCREEN, font);

        let label = &labels[2];
        let value = &values[2];
        assert_eq!(
            value.base().position,
            label.base.position + Vec3::new(label.size().x, 0.0, 0.0)
        );
        assert_eq!(value.display.size().x, 240.0 - label.size().x);

        let centred = (labels[1].size().y - values[1].display.size().y) / 2.0;
        assert_eq!(values[1].base().position.y, labels[1].base.position.y + centred);

        // Ratings are five glyphs high and wide before being fitted to the column
        assert_eq!(
            values[0].display.size(),
            Vec2::new(240.0 - labels[0].size().x, 30.0)
        );

        let bottom = values
            .iter()
            .map(|v| v.base().bottom())
            .fold(0.0, f32::max);
        assert_eq!(description.container.position.y, bottom + 10.0);
        assert_eq!(description.container.size.y, 1000.0 - bottom - 10.0);
    }

    #[test]
    fn test_layout_is_repeatable() {
        let font = Font::from_px(20.0);
        let mut labels = create_labels(font);
        let mut values = create_values(font);
        let mut description = DescriptionBox::new(font);

        layout_labels(&mut labels, SCREEN, font);
        layout_values(&labels, &mut values, &mut description, SCREEN, font);
        let first: Vec<Vec3> = values.iter().map(|v| v.base().position).collect();
        let first_desc = description.container.position;

        layout_labels(&mut labels, SCREEN, font);
        layout_values(&labels, &mut values, &mut description, SCREEN, font);
        let second: Vec<Vec3> = values.iter().map(|v| v.base().position).collect();

        assert_eq!(first, second);
        assert_eq!(first_desc, description.container.position);
    }
}
