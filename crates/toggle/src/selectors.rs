use serde::Deserialize;

use crate::error::ToggleError;

/// Click source.
pub const DOCUMENTATION_BUTTON: &str = "#documentation-button";
/// Hidden on activation.
pub const DESCRIPTION_BLOCK: &str = "#description-block";
/// Shown on activation.
pub const DOCUMENTATION_BLOCK: &str = "#documentation-block";
/// Class that suppresses rendering while keeping the node in the document.
pub const HIDDEN_CLASS: &str = "hidden";

/// Selectors and marker the toggler works with.
///
/// `Default` is the contract with the host markup. Partial JSON overrides only the
/// fields it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub trigger: String,
    pub hide_target: String,
    pub show_target: String,
    pub hidden_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            trigger: DOCUMENTATION_BUTTON.to_string(),
            hide_target: DESCRIPTION_BLOCK.to_string(),
            show_target: DOCUMENTATION_BLOCK.to_string(),
            hidden_class: HIDDEN_CLASS.to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ToggleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ToggleError> {
        for (field, value) in [
            ("trigger", &self.trigger),
            ("hide_target", &self.hide_target),
            ("show_target", &self.show_target),
            ("hidden_class", &self.hidden_class),
        ] {
            if value.trim().is_empty() {
                return Err(ToggleError::Config(format!("`{field}` must not be empty")));
            }
        }
        // classList.add rejects tokens containing whitespace.
        if self.hidden_class.chars().any(char::is_whitespace) {
            return Err(ToggleError::Config(
                "`hidden_class` must be a single class token".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_matches_fixed_contract() {
        let c = ToggleConfig::default();
        assert_eq!(c.trigger, "#documentation-button");
        assert_eq!(c.hide_target, "#description-block");
        assert_eq!(c.show_target, "#documentation-block");
        assert_eq!(c.hidden_class, "hidden");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ToggleConfig::from_json(r#"{ "hidden_class": "is-hidden" }"#).unwrap();
        assert_eq!(
            c,
            ToggleConfig {
                hidden_class: "is-hidden".to_string(),
                ..ToggleConfig::default()
            }
        );
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(ToggleConfig::from_json("{}").unwrap(), ToggleConfig::default());
    }

    #[test]
    fn rejects_blank_selector() {
        let err = ToggleConfig::from_json(r#"{ "trigger": "  " }"#).unwrap_err();
        assert!(matches!(err, ToggleError::Config(_)));
    }

    #[test]
    fn rejects_multi_token_class() {
        let err = ToggleConfig::from_json(r#"{ "hidden_class": "a b" }"#).unwrap_err();
        assert!(matches!(err, ToggleError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ToggleConfig::from_json("not json"),
            Err(ToggleError::Config(_))
        ));
    }
}
