#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

use std::str::FromStr;

use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    EnumVariantNames,
    strum::Display,
)]
pub enum ModelName {
    #[default]
    #[strum(serialize = "sonar-pro")]
    SonarPro,
    #[strum(serialize = "sonar")]
    Sonar,
    #[strum(serialize = "sonar-reasoning")]
    SonarReasoning,
    #[strum(serialize = "mistral-7b-instruct")]
    Mistral7bInstruct,
    #[strum(serialize = "pplx-70b-chat")]
    Pplx70bChat,
    #[strum(serialize = "codellama-34b-instruct")]
    Codellama34bInstruct,
}

impl ModelName {
    /// Resolves either a model name or a 1-based index into `ModelName::iter()`.
    pub fn resolve(text: &str) -> Option<ModelName> {
        let text = text.trim();
        if let Ok(idx) = text.parse::<usize>() {
            if idx < 1 {
                return None;
            }
            return ModelName::iter().nth(idx - 1);
        }

        return ModelName::from_str(text).ok();
    }
}

/// Per-session settings shown in the side panel. Never persisted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub model: ModelName,
    pub debug_mode: bool,
}

impl Settings {
    pub fn new(model: ModelName) -> Settings {
        return Settings {
            model,
            debug_mode: false,
        };
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug_mode = !self.debug_mode;
        return self.debug_mode;
    }
}
