//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `form-forge.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use form_forge::GeneratorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "form-forge.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output location.
    pub output: OutputConfig,

    /// Names baked into the generated component.
    pub component: ComponentConfig,

    /// Design checks.
    pub lint: LintConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding component bundles.
    pub dir: PathBuf,

    /// Bundle name; also the base name of the generated files.
    pub bundle: String,
}

/// Generated component configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Exported class name.
    pub class_name: String,

    /// Card title.
    pub card_title: String,

    /// Card icon.
    pub card_icon: String,

    /// Submit button label.
    pub submit_label: String,
}

/// Lint configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Report design warnings after generating.
    pub enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./force-app/main/default/lwc"),
            bundle: "myFormComponent".to_string(),
        }
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            class_name: defaults.class_name,
            card_title: defaults.card_title,
            card_icon: defaults.card_icon,
            submit_label: defaults.submit_label,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ComponentConfig {
    /// The generator settings this section describes.
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_class_name(&self.class_name)
            .with_card_title(&self.card_title)
            .with_card_icon(&self.card_icon)
            .with_submit_label(&self.submit_label)
    }
}

impl Config {
    /// Check values that would produce a broken bundle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.output.bundle) {
            return Err(ConfigError::invalid_value(
                "output.bundle",
                format!("'{}' is not a valid bundle name", self.output.bundle),
            ));
        }
        if !is_identifier(&self.component.class_name) {
            return Err(ConfigError::invalid_value(
                "component.class_name",
                format!("'{}' is not a valid class name", self.component.class_name),
            ));
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Load a config file, apply CLI overrides and validate the result.
    pub fn resolve(path: Option<&Path>, args: &CliArgs) -> CliResult<Config> {
        let config = Self::merge_cli_args(Self::load(path)?, args);
        config.validate()?;
        Ok(config)
    }

    /// Resolve again after the config file changed.
    ///
    /// CLI overrides still win and the output location stays that of
    /// `current`, since the watched bundle cannot move mid-session.
    pub fn reload(current: &Config, path: Option<&Path>, args: &CliArgs) -> CliResult<Config> {
        let mut config = Self::merge_cli_args(Self::load(path)?, args);
        config.output = current.output.clone();
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file to `path`.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn init(path: &Path, force: bool) -> CliResult<()> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        std::fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref bundle) = args.bundle {
            config.output.bundle = bundle.clone();
        }

        if let Some(ref class_name) = args.class_name {
            config.component.class_name = class_name.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# form-forge configuration file

[output]
# Directory holding Lightning Web Component bundles
dir = "./force-app/main/default/lwc"

# Bundle name; the generated files are <dir>/<bundle>/<bundle>.html and .js
bundle = "myFormComponent"

[component]
# Name of the exported JavaScript class
class_name = "MyFormComponent"

# Title and icon of the lightning-card wrapping the form
card_title = "Generated Form"
card_icon = "standard:account"

# Label of the submit button
submit_label = "Submit"

[lint]
# Report duplicate field names, inverted length bounds and similar problems
enabled = true
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Bundle name override.
    pub bundle: Option<String>,

    /// Class name override.
    pub class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.dir, PathBuf::from("./force-app/main/default/lwc"));
        assert_eq!(config.output.bundle, "myFormComponent");
        assert_eq!(config.component.class_name, "MyFormComponent");
        assert_eq!(config.component.card_title, "Generated Form");
        assert_eq!(config.component.card_icon, "standard:account");
        assert_eq!(config.component.submit_label, "Submit");
        assert!(config.lint.enabled);
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: Config = toml::from_str(ConfigManager::default_config_content()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge_cli_args_output() {
        let config = Config::default();
        let args = CliArgs {
            output: Some(PathBuf::from("./custom")),
            bundle: Some("contactForm".to_string()),
            ..Default::default()
        };

        let merged = ConfigManager::merge_cli_args(config, &args);
        assert_eq!(merged.output.dir, PathBuf::from("./custom"));
        assert_eq!(merged.output.bundle, "contactForm");
    }

    #[test]
    fn test_merge_cli_args_preserves_unset() {
        let config = Config::default();
        let args = CliArgs::default();

        let merged = ConfigManager::merge_cli_args(config.clone(), &args);
        assert_eq!(merged, config);
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml = r#"
[output]
bundle = "surveyForm"

[component]
class_name = "SurveyForm"
submit_label = "Send"

[lint]
enabled = false
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("./force-app/main/default/lwc"));
        assert_eq!(config.output.bundle, "surveyForm");
        assert_eq!(config.component.class_name, "SurveyForm");
        assert_eq!(config.component.card_title, "Generated Form");
        assert!(!config.lint.enabled);

        let generator = config.component.to_generator_config();
        assert_eq!(generator.submit_label, "Send");
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.output.bundle = "my-form".to_string();
        assert!(config.validate().is_err());

        config.output.bundle = "myForm".to_string();
        config.component.class_name = "1Form".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_applies_overrides_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[component]\nclass_name = \"FileForm\"\n");

        let args = CliArgs {
            class_name: Some("ContactForm".to_string()),
            ..Default::default()
        };
        let config = ConfigManager::resolve(Some(&path), &args).unwrap();
        assert_eq!(config.component.class_name, "ContactForm");

        write_config(&dir, "[component]\nclass_name = \"my-form\"\n");
        let err = ConfigManager::resolve(Some(&path), &CliArgs::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_reload_keeps_cli_overrides_and_output() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[component]\ncard_title = \"Before\"\n");
        let args = CliArgs {
            bundle: Some("contactForm".to_string()),
            class_name: Some("ContactForm".to_string()),
            ..Default::default()
        };
        let current = ConfigManager::resolve(Some(&path), &args).unwrap();

        write_config(
            &dir,
            r#"
[output]
dir = "./elsewhere"
bundle = "otherForm"

[component]
class_name = "FileForm"
card_title = "After"

[lint]
enabled = false
"#,
        );
        let reloaded = ConfigManager::reload(&current, Some(&path), &args).unwrap();

        assert_eq!(reloaded.component.class_name, "ContactForm");
        assert_eq!(reloaded.component.card_title, "After");
        assert!(!reloaded.lint.enabled);
        assert_eq!(reloaded.output, current.output);
    }

    #[test]
    fn test_reload_rejects_invalid_class_name() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        let current = ConfigManager::resolve(Some(&path), &CliArgs::default()).unwrap();

        write_config(&dir, "[component]\nclass_name = \"my-form\"\n");
        let err = ConfigManager::reload(&current, Some(&path), &CliArgs::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);

        ConfigManager::init(&path, false).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            ConfigManager::default_config_content()
        );

        let err = ConfigManager::init(&path, false).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::AlreadyExists { .. })));
        assert_ne!(err.exit_code(), CliError::Validation(String::new()).exit_code());

        std::fs::write(&path, "# edited").unwrap();
        ConfigManager::init(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("# form-forge"));
    }
}
