pub const BUTTON_OK: &str = "a";
pub const BUTTON_BACK: &str = "b";

/// One entry of the help bar: the input to press and what it does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPrompt {
    pub input: String,
    pub label: String,
}

impl HelpPrompt {
    pub fn new(input: &str, label: &str) -> Self {
        Self {
            input: input.to_owned(),
            label: label.to_owned(),
        }
    }
}
