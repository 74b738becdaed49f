use fxhash::FxHashMap;
use serde::Deserialize;

pub const FAVORITES_FIRST: &str = "FavoritesFirst";
pub const QUICK_SYSTEM_SELECT: &str = "QuickSystemSelect";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    #[default]
    Full,
    Kiosk,
    Kid,
}

/// Boolean switches read by the views. Unknown keys read as `false`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    bools: FxHashMap<String, bool>,
    #[serde(default)]
    ui_mode: UiMode,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.set_bool(key, value);
        self
    }

    pub fn with_ui_mode(mut self, mode: UiMode) -> Self {
        self.ui_mode = mode;
        self
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_owned(), value);
    }

    pub fn ui_mode(&self) -> UiMode {
        self.ui_mode
    }

    pub fn is_kid_mode(&self) -> bool {
        self.ui_mode == UiMode::Kid
    }
}

/// Translation table. Keys without a translation are returned untouched.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct Locale {
    strings: FxHashMap<String, String>,
}

impl Locale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, key: &str, value: &str) -> Self {
        self.strings.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_setting_is_false() {
        let settings = Settings::new().with_bool(FAVORITES_FIRST, true);
        assert!(settings.get_bool(FAVORITES_FIRST));
        assert!(!settings.get_bool(QUICK_SYSTEM_SELECT));
        assert!(!settings.is_kid_mode());
    }

    #[test]
    fn test_settings_from_json5() {
        let settings: Settings =
            json5::from_str(r#"{ bools: { QuickSystemSelect: true }, ui_mode: "kid" }"#).unwrap();
        assert!(settings.get_bool(QUICK_SYSTEM_SELECT));
        assert_eq!(settings.ui_mode(), UiMode::Kid);
    }

    #[test]
    fn test_locale_falls_back_to_key() {
        let locale = Locale::new().with_string("Genre", "Genre (de)");
        assert_eq!(locale.translate("Genre"), "Genre (de)");
        assert_eq!(locale.translate("Players"), "Players");
    }
}
