use crate::widgets::ValueKind;

pub const FIELD_COUNT: usize = 8;

/// The fixed label/value pairs of the metadata panel, in layout order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Rating,
    ReleaseDate,
    Developer,
    Publisher,
    Genre,
    Players,
    LastPlayed,
    PlayCount,
}

impl MetadataField {
    pub const ALL: [MetadataField; FIELD_COUNT] = [
        MetadataField::Rating,
        MetadataField::ReleaseDate,
        MetadataField::Developer,
        MetadataField::Publisher,
        MetadataField::Genre,
        MetadataField::Players,
        MetadataField::LastPlayed,
        MetadataField::PlayCount,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Untranslated label text
    pub fn label_key(self) -> &'static str {
        match self {
            MetadataField::Rating => "Rating",
            MetadataField::ReleaseDate => "Released",
            MetadataField::Developer => "Developer",
            MetadataField::Publisher => "Publisher",
            MetadataField::Genre => "Genre",
            MetadataField::Players => "Players",
            MetadataField::LastPlayed => "Last played",
            MetadataField::PlayCount => "Times played",
        }
    }

    pub fn label_element(self) -> &'static str {
        match self {
            MetadataField::Rating => "md_lbl_rating",
            MetadataField::ReleaseDate => "md_lbl_releasedate",
            MetadataField::Developer => "md_lbl_developer",
            MetadataField::Publisher => "md_lbl_publisher",
            MetadataField::Genre => "md_lbl_genre",
            MetadataField::Players => "md_lbl_players",
            MetadataField::LastPlayed => "md_lbl_lastplayed",
            MetadataField::PlayCount => "md_lbl_playcount",
        }
    }

    pub fn value_element(self) -> &'static str {
        match self {
            MetadataField::Rating => "md_rating",
            MetadataField::ReleaseDate => "md_releasedate",
            MetadataField::Developer => "md_developer",
            MetadataField::Publisher => "md_publisher",
            MetadataField::Genre => "md_genre",
            MetadataField::Players => "md_players",
            MetadataField::LastPlayed => "md_lastplayed",
            MetadataField::PlayCount => "md_playcount",
        }
    }

    /// Key of the entry metadata the value is read from
    pub fn metadata_key(self) -> &'static str {
        match self {
            MetadataField::Rating => "rating",
            MetadataField::ReleaseDate => "releasedate",
            MetadataField::Developer => "developer",
            MetadataField::Publisher => "publisher",
            MetadataField::Genre => "genre",
            MetadataField::Players => "players",
            MetadataField::LastPlayed => "lastplayed",
            MetadataField::PlayCount => "playcount",
        }
    }

    pub fn value_kind(self) -> ValueKind {
        match self {
            MetadataField::Rating => ValueKind::Rating,
            MetadataField::ReleaseDate => ValueKind::Date { relative: false },
            MetadataField::LastPlayed => ValueKind::Date { relative: true },
            _ => ValueKind::Text,
        }
    }

    /// Play statistics only exist for games
    pub fn games_only(self) -> bool {
        matches!(self, MetadataField::LastPlayed | MetadataField::PlayCount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, field) in MetadataField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_element_names_pair_up() {
        for field in MetadataField::ALL {
            let label = field.label_element();
            assert_eq!(label.replacen("md_lbl_", "md_", 1), field.value_element());
        }
    }
}
