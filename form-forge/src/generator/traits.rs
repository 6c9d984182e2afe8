//! Target trait and generator configuration.

use super::ir::FormIr;

/// A framework the form can be generated for.
///
/// A target renders an already-lowered [`FormIr`] into its markup and script
/// documents. Lowering decides which symbols exist; a target only decides
/// their syntax, so markup and script stay consistent for every target.
pub trait FormTarget: Send + Sync {
    /// Short, lowercase identifier (e.g. `"lwc"`).
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// File extension of the markup document.
    fn markup_extension(&self) -> &'static str {
        "html"
    }

    /// File extension of the script document.
    fn script_extension(&self) -> &'static str {
        "js"
    }

    /// Render the markup document.
    fn render_markup(&self, form: &FormIr, config: &GeneratorConfig) -> String;

    /// Render the script document.
    fn render_script(&self, form: &FormIr, config: &GeneratorConfig) -> String;
}

/// Names and labels baked into the generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the exported class
    pub class_name: String,

    /// Title of the surrounding card
    pub card_title: String,

    /// Icon shown in the card header
    pub card_icon: String,

    /// Label of the submit button
    pub submit_label: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_name: "MyFormComponent".to_string(),
            card_title: "Generated Form".to_string(),
            card_icon: "standard:account".to_string(),
            submit_label: "Submit".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with the default names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the card title.
    pub fn with_card_title(mut self, card_title: impl Into<String>) -> Self {
        self.card_title = card_title.into();
        self
    }

    /// Set the card icon.
    pub fn with_card_icon(mut self, card_icon: impl Into<String>) -> Self {
        self.card_icon = card_icon.into();
        self
    }

    /// Set the submit button label.
    pub fn with_submit_label(mut self, submit_label: impl Into<String>) -> Self {
        self.submit_label = submit_label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .with_class_name("ContactForm")
            .with_card_title("Contact us")
            .with_card_icon("standard:contact")
            .with_submit_label("Send");

        assert_eq!(config.class_name, "ContactForm");
        assert_eq!(config.card_title, "Contact us");
        assert_eq!(config.card_icon, "standard:contact");
        assert_eq!(config.submit_label, "Send");
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.class_name, "MyFormComponent");
        assert_eq!(config.card_icon, "standard:account");
    }
}
