use fxhash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

/// A key or gamepad identifier
#[allow(missing_docs)] // Self-describing
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum Key {
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,
    A,
    B,
    F1,
    F5,
    GamepadStart,
    GamepadBack,
    GamepadFaceLeft,
    GamepadFaceRight,
    GamepadFaceUp,
    GamepadFaceDown,
    GamepadDpadLeft,
    GamepadDpadRight,
    GamepadDpadUp,
    GamepadDpadDown,
    GamepadL1,
    GamepadR1,
    GamepadL2,
    GamepadR2,
    GamepadLStickLeft,
    GamepadLStickRight,
    GamepadLStickUp,
    GamepadLStickDown,
    GamepadRStickLeft,
    GamepadRStickRight,
    GamepadRStickUp,
    GamepadRStickDown,
}

/// A key going down (`value != 0`) or up (`value == 0`)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub value: i32,
}

impl InputEvent {
    pub fn pressed(key: Key) -> Self {
        Self { key, value: 1 }
    }

    pub fn released(key: Key) -> Self {
        Self { key, value: 0 }
    }

    pub fn is_pressed(&self) -> bool {
        self.value != 0
    }
}

/// Maps raw input to named actions (`a`, `b`, `select`, `left`, `r2`, ...)
pub trait InputConfig {
    /// True if `event` is bound to exactly `action`
    fn is_mapped_to(&self, action: &str, event: InputEvent) -> bool;

    /// Like [`InputConfig::is_mapped_to`], but directions also match the analog sticks
    fn is_mapped_like(&self, action: &str, event: InputEvent) -> bool {
        match action {
            "left" | "right" | "up" | "down" => {
                self.is_mapped_to(action, event)
                    || self.is_mapped_to(&format!("leftanalog{}", action), event)
                    || self.is_mapped_to(&format!("rightanalog{}", action), event)
            }
            _ => self.is_mapped_to(action, event),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct InputMapping {
    bindings: FxHashMap<String, SmallVec<[Key; 4]>>,
}

impl InputMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, action: &str, key: Key) -> Self {
        self.bindings.entry(action.to_owned()).or_default().push(key);
        self
    }

    /// Keyboard plus gamepad bindings covering every action the views use
    pub fn with_defaults() -> Self {
        Self::new()
            .bind("a", Key::Enter)
            .bind("a", Key::GamepadFaceDown)
            .bind("b", Key::Escape)
            .bind("b", Key::GamepadFaceRight)
            .bind("x", Key::A)
            .bind("x", Key::GamepadFaceLeft)
            .bind("y", Key::B)
            .bind("y", Key::GamepadFaceUp)
            .bind("select", Key::Backspace)
            .bind("select", Key::GamepadBack)
            .bind("start", Key::F1)
            .bind("start", Key::GamepadStart)
            .bind("left", Key::LeftArrow)
            .bind("left", Key::GamepadDpadLeft)
            .bind("right", Key::RightArrow)
            .bind("right", Key::GamepadDpadRight)
            .bind("up", Key::UpArrow)
            .bind("up", Key::GamepadDpadUp)
            .bind("down", Key::DownArrow)
            .bind("down", Key::GamepadDpadDown)
            .bind("leftanalogleft", Key::GamepadLStickLeft)
            .bind("leftanalogright", Key::GamepadLStickRight)
            .bind("leftanalogup", Key::GamepadLStickUp)
            .bind("leftanalogdown", Key::GamepadLStickDown)
            .bind("rightanalogleft", Key::GamepadRStickLeft)
            .bind("rightanalogright", Key::GamepadRStickRight)
            .bind("rightanalogup", Key::GamepadRStickUp)
            .bind("rightanalogdown", Key::GamepadRStickDown)
            .bind("l2", Key::PageUp)
            .bind("l2", Key::GamepadL2)
            .bind("r2", Key::PageDown)
            .bind("r2", Key::GamepadR2)
    }
}

impl InputConfig for InputMapping {
    fn is_mapped_to(&self, action: &str, event: InputEvent) -> bool {
        self.bindings
            .get(action)
            .is_some_and(|keys| keys.contains(&event.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_to() {
        let mapping = InputMapping::with_defaults();
        assert!(mapping.is_mapped_to("a", InputEvent::pressed(Key::Enter)));
        assert!(!mapping.is_mapped_to("b", InputEvent::pressed(Key::Enter)));
        assert!(!mapping.is_mapped_to("unknown", InputEvent::pressed(Key::Enter)));
    }

    #[test]
    fn test_mapped_like_includes_analog() {
        let mapping = InputMapping::with_defaults();
        let stick = InputEvent::pressed(Key::GamepadLStickLeft);
        assert!(!mapping.is_mapped_to("left", stick));
        assert!(mapping.is_mapped_like("left", stick));
        assert!(mapping.is_mapped_like("up", InputEvent::pressed(Key::GamepadRStickUp)));
        assert!(!mapping.is_mapped_like("select", stick));
    }

    #[test]
    fn test_mapping_from_json5() {
        let mapping: InputMapping =
            json5::from_str(r#"{ a: ["Space", "GamepadFaceDown"], left: ["LeftArrow"] }"#).unwrap();
        assert!(mapping.is_mapped_to("a", InputEvent::pressed(Key::Space)));
        assert!(mapping.is_mapped_like("left", InputEvent::released(Key::LeftArrow)));
    }
}
