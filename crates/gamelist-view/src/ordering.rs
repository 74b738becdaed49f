use std::borrow::Cow;

/// Prefix shown in front of favourite entries
pub const FAVORITE_GLYPH: &str = "\u{F006} ";
/// Short name of the virtual system collecting all favourites
pub const FAVORITES_SYSTEM: &str = "favorites";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub favorites_first: bool,
    pub show_favorite_glyph: bool,
}

impl DisplayOptions {
    /// Every entry of the favourites system is a favourite, so neither sorting nor marking them
    /// makes sense there.
    pub fn for_system(system_name: &str, favorites_first: bool) -> Self {
        let show_favorite_glyph = system_name != FAVORITES_SYSTEM;

        Self {
            favorites_first: favorites_first && show_favorite_glyph,
            show_favorite_glyph,
        }
    }
}

/// Orders `(item, is_favorite)` pairs for display. With `favorites_first` the favourites move to
/// the front, both halves keeping their relative order.
pub fn display_order<T: Copy>(items: &[(T, bool)], favorites_first: bool) -> Vec<T> {
    if !favorites_first {
        return items.iter().map(|(item, _)| *item).collect();
    }

    let favorites = items.iter().filter(|(_, fav)| *fav);
    let others = items.iter().filter(|(_, fav)| !*fav);

    favorites.chain(others).map(|(item, _)| *item).collect()
}

pub fn display_name<'a>(name: &'a str, favorite: bool, options: DisplayOptions) -> Cow<'a, str> {
    if favorite && options.show_favorite_glyph {
        Cow::Owned(format!("{}{}", FAVORITE_GLYPH, name))
    } else {
        Cow::Borrowed(name)
    }
}
