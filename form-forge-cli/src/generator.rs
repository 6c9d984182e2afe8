//! Bundle generation.
//!
//! Turns a loaded design into the two files of a Lightning Web Component
//! bundle, using the configured names and output location.

use crate::config::Config;
use form_forge::generator::generate_with;
use form_forge::{lint, FormSchema, FormTarget, LightningTarget, LintWarning};
use std::path::PathBuf;
use tracing::info;

/// Generated bundle contents and where they belong.
#[derive(Debug, Clone)]
pub struct GeneratedBundle {
    /// Path of the HTML template.
    pub markup_path: PathBuf,
    /// Generated HTML template.
    pub markup: String,
    /// Path of the JavaScript module.
    pub script_path: PathBuf,
    /// Generated JavaScript module.
    pub script: String,
    /// Design warnings; empty when lint is disabled.
    pub warnings: Vec<LintWarning>,
}

impl GeneratedBundle {
    /// `(path, content)` pairs in write order.
    pub fn files(&self) -> [(&PathBuf, &str); 2] {
        [
            (&self.markup_path, self.markup.as_str()),
            (&self.script_path, self.script.as_str()),
        ]
    }
}

/// Bundle generator.
pub struct BundleGenerator {
    config: Config,
    target: LightningTarget,
}

impl BundleGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            target: LightningTarget::new(),
        }
    }

    /// Directory of the bundle.
    pub fn bundle_dir(&self) -> PathBuf {
        self.config.output.dir.join(&self.config.output.bundle)
    }

    /// Generate the bundle for `schema`.
    pub fn generate(&self, schema: &FormSchema) -> GeneratedBundle {
        let components = schema.components();
        let form = generate_with(
            &self.target,
            components,
            &self.config.component.to_generator_config(),
        );

        let dir = self.bundle_dir();
        let bundle = &self.config.output.bundle;

        let warnings = if self.config.lint.enabled {
            lint(components)
        } else {
            Vec::new()
        };

        info!(
            bundle = %bundle,
            components = components.len(),
            warnings = warnings.len(),
            "Generated bundle"
        );

        GeneratedBundle {
            markup_path: dir.join(format!("{}.{}", bundle, self.target.markup_extension())),
            markup: form.markup,
            script_path: dir.join(format!("{}.{}", bundle, self.target.script_extension())),
            script: form.script,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_forge::FieldType;

    #[test]
    fn test_bundle_paths() {
        let mut config = Config::default();
        config.output.dir = PathBuf::from("out");
        config.output.bundle = "contactForm".to_string();

        let bundle = BundleGenerator::new(config).generate(&FormSchema::new());
        assert_eq!(bundle.markup_path, PathBuf::from("out/contactForm/contactForm.html"));
        assert_eq!(bundle.script_path, PathBuf::from("out/contactForm/contactForm.js"));
    }

    #[test]
    fn test_component_config_is_used() {
        let mut config = Config::default();
        config.component.class_name = "ContactForm".to_string();

        let bundle = BundleGenerator::new(config).generate(&FormSchema::new());
        assert!(bundle.script.contains("export default class ContactForm"));
    }

    #[test]
    fn test_lint_toggle() {
        let mut schema = FormSchema::new();
        schema.create(FieldType::Text, Some("Name"));
        schema.create(FieldType::Text, Some("Name"));

        let bundle = BundleGenerator::new(Config::default()).generate(&schema);
        assert_eq!(bundle.warnings.len(), 1);

        let mut config = Config::default();
        config.lint.enabled = false;
        let bundle = BundleGenerator::new(config).generate(&schema);
        assert!(bundle.warnings.is_empty());
    }
}
