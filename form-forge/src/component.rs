//! The field descriptor and its partial updates.
//!
//! A [`FormComponent`] carries every property any field type can have. Which
//! of them mean something for a given type is decided by
//! [`visibility`](crate::visibility); properties outside that set are kept
//! but ignored, so switching a field's type never loses data.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FormError;
use crate::field::{FieldType, Variant, Width};
use crate::naming::to_camel_case;

/// Choices given to a freshly created dropdown or radio group.
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Label given to a freshly created switch.
pub const DEFAULT_SWITCH_LABEL: &str = "Enable Feature";

/// Image shown by a freshly created image component.
pub const DEFAULT_IMAGE_SRC: &str = "https://picsum.photos/seed/1/600/400";

/// Alternative text of a freshly created image component.
pub const DEFAULT_IMAGE_ALT: &str = "Placeholder image";

/// Content of a freshly created rich-text component.
pub const DEFAULT_RICH_TEXT: &str = "<h2>Rich Text</h2><p>This is some rich text content.</p>";

/// Machine name of a freshly created data table.
pub const DEFAULT_TABLE_NAME: &str = "dataTable";

// =============================================================================
// Component ID (UUID v7 Newtype)
// =============================================================================

/// A unique, time-ordered component identifier based on UUID v7.
///
/// Ids are assigned once at creation and never reused, so a stale id held by
/// an editor can only ever miss.
///
/// Designs may carry ids minted elsewhere (the browser editor uses short
/// random strings). Those are mapped onto a name-based UUID, so the same text
/// always yields the same id and distinct texts stay distinct.
///
/// # Example
/// ```rust
/// use form_forge::ComponentId;
///
/// let id = ComponentId::new();
/// let parsed: ComponentId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComponentId(Uuid);

/// Namespace for ids derived from foreign id text.
const FOREIGN_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6a1c_3f0e_52d4_4b8e_9f6a_0c2d_7e41_b953);

impl ComponentId {
    /// Prefix used by the display form.
    pub const PREFIX: &'static str = "fld_";

    /// Create a new component ID using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a component ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a component ID, with or without the `fld_` prefix.
    pub fn parse(s: &str) -> Result<Self, FormError> {
        let raw = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| FormError::invalid_id(s, e.to_string()))
    }

    /// Accept any non-empty id text.
    ///
    /// UUIDs (with or without the prefix) are taken as they are; any other
    /// text is hashed into a name-based UUID.
    pub fn from_key(key: &str) -> Result<Self, FormError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(FormError::invalid_id(key, "id must not be empty"));
        }
        Ok(Self::parse(key)
            .unwrap_or_else(|_| Self(Uuid::new_v5(&FOREIGN_ID_NAMESPACE, key.as_bytes()))))
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key).map_err(serde::de::Error::custom)
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ComponentId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Form Component
// =============================================================================

/// One column of a data table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableColumn {
    /// Column header text
    pub label: String,

    /// Key of the column in each data row
    pub field_name: String,
}

impl DataTableColumn {
    /// Create a column.
    pub fn new(label: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_name: field_name.into(),
        }
    }
}

/// One placed field in a form design.
///
/// The wire format matches what the browser editor stores: camelCase keys,
/// `type` as the tag, and optional properties omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormComponent {
    /// Immutable identity; a fresh id is assigned when absent from input.
    #[serde(default)]
    pub id: ComponentId,

    /// Field type tag
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Machine-safe identifier, used as the name attribute and as the prefix
    /// of every script symbol this field declares.
    #[serde(default)]
    pub field_name: String,

    /// Human-readable label
    #[serde(default)]
    pub label: String,

    /// Hint text shown in an empty input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether a value must be supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Closed choice set (dropdown, radio group)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Inline help shown next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Minimum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Maximum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Whether the control is greyed out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Whether the value is shown but cannot be changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Label placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    /// Layout span; full width when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,

    /// Image source (image only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Image alternative text (image only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Literal markup content (rich text only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Column definitions (data table only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<DataTableColumn>>,

    /// Informational rules attached by the suggestion service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<Vec<String>>,
}

impl FormComponent {
    /// Create a bare component with no optional properties set.
    pub fn new(
        field_type: FieldType,
        field_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: ComponentId::new(),
            field_type,
            field_name: field_name.into(),
            label: label.into(),
            placeholder: None,
            required: None,
            options: None,
            help_text: None,
            min_length: None,
            max_length: None,
            pattern: None,
            disabled: None,
            read_only: None,
            variant: None,
            width: None,
            src: None,
            alt: None,
            value: None,
            columns: None,
            validations: None,
        }
    }

    /// Instantiate a palette entry with the defaults for its type.
    ///
    /// Without a label the component is called `"New <type>"`. Switches,
    /// images, rich text and data tables replace that default with their own
    /// fixed label; an explicit label always wins.
    pub fn instantiate(field_type: FieldType, label: Option<&str>) -> Self {
        let explicit = label.map(str::to_string);
        let base_label = explicit
            .clone()
            .unwrap_or_else(|| format!("New {}", field_type.as_str()));
        let field_name = to_camel_case(&base_label);

        let mut component = Self::new(field_type.clone(), field_name, base_label);
        component.required = Some(false);
        component.variant = Some(Variant::Standard);
        component.width = Some(Width::FULL);

        match field_type {
            FieldType::Dropdown | FieldType::RadioGroup => {
                component.options = Some(DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect());
            }
            FieldType::Switch => {
                if explicit.is_none() {
                    component.label = DEFAULT_SWITCH_LABEL.to_string();
                    component.field_name = to_camel_case(DEFAULT_SWITCH_LABEL);
                }
            }
            FieldType::Image => {
                component.field_name = String::new();
                component.label = explicit.unwrap_or_else(|| "Image".to_string());
                component.src = Some(DEFAULT_IMAGE_SRC.to_string());
                component.alt = Some(DEFAULT_IMAGE_ALT.to_string());
            }
            FieldType::RichText => {
                component.field_name = String::new();
                component.label = explicit.unwrap_or_else(|| "Rich Text".to_string());
                component.value = Some(DEFAULT_RICH_TEXT.to_string());
            }
            FieldType::DataTable => {
                component.field_name = DEFAULT_TABLE_NAME.to_string();
                component.label = explicit.unwrap_or_else(|| "Data Table".to_string());
                component.columns = Some(vec![
                    DataTableColumn::new("Column 1", "col1"),
                    DataTableColumn::new("Column 2", "col2"),
                ]);
            }
            _ => {}
        }

        component
    }

    /// Layout span, defaulting to full width.
    pub fn width_or_default(&self) -> Width {
        self.width.unwrap_or_default()
    }

    /// Options in order, empty when unset.
    pub fn options_or_empty(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Columns in order, empty when unset.
    pub fn columns_or_empty(&self) -> &[DataTableColumn] {
        self.columns.as_deref().unwrap_or(&[])
    }
}

// =============================================================================
// Partial Updates
// =============================================================================

/// A set of property changes merged into a component by
/// [`FormSchema::update`](crate::FormSchema::update).
///
/// Every `Some` field overwrites the component's value; `None` leaves it
/// alone. No cross-field validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentPatch {
    /// Replacement type; only the suggestion path produces this.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<DataTableColumn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validations: Option<Vec<String>>,
}

impl ComponentPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn with_length_bounds(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self.alt = Some(alt.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_columns(mut self, columns: Vec<DataTableColumn>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_validations<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validations = Some(rules.into_iter().map(Into::into).collect());
        self
    }

    /// Whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge the changes into `component`. The id is never touched.
    pub fn apply_to(self, component: &mut FormComponent) {
        fn merge<T>(slot: &mut Option<T>, change: Option<T>) {
            if change.is_some() {
                *slot = change;
            }
        }

        if let Some(field_type) = self.field_type {
            component.field_type = field_type;
        }
        if let Some(field_name) = self.field_name {
            component.field_name = field_name;
        }
        if let Some(label) = self.label {
            component.label = label;
        }
        merge(&mut component.placeholder, self.placeholder);
        merge(&mut component.required, self.required);
        merge(&mut component.options, self.options);
        merge(&mut component.help_text, self.help_text);
        merge(&mut component.min_length, self.min_length);
        merge(&mut component.max_length, self.max_length);
        merge(&mut component.pattern, self.pattern);
        merge(&mut component.disabled, self.disabled);
        merge(&mut component.read_only, self.read_only);
        merge(&mut component.variant, self.variant);
        merge(&mut component.width, self.width);
        merge(&mut component.src, self.src);
        merge(&mut component.alt, self.alt);
        merge(&mut component.value, self.value);
        merge(&mut component.columns, self.columns);
        merge(&mut component.validations, self.validations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_display_and_parse() {
        let id = ComponentId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("fld_"));

        assert_eq!(ComponentId::parse(&shown).unwrap(), id);
        assert_eq!(ComponentId::parse(&id.as_uuid().to_string()).unwrap(), id);
        assert!(ComponentId::parse("fld_not-a-uuid").is_err());
    }

    #[test]
    fn test_foreign_ids_are_accepted() {
        let a = ComponentId::from_key("V1StGXR8_Z5jdHi6B-myT").unwrap();
        assert_eq!(ComponentId::from_key("V1StGXR8_Z5jdHi6B-myT").unwrap(), a);
        assert_ne!(ComponentId::from_key("Uakgb_J5m9g-0JDMbcJqL").unwrap(), a);

        let id = ComponentId::new();
        assert_eq!(ComponentId::from_key(&id.to_string()).unwrap(), id);
        assert!(ComponentId::from_key("  ").is_err());

        let json = r#"{"id":"V1StGXR8_Z5jdHi6B-myT","type":"text","label":"Name"}"#;
        let component: FormComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.id, a);
        assert!(serde_json::from_str::<FormComponent>(r#"{"id":"","type":"text"}"#).is_err());
    }

    #[test]
    fn test_component_ids_are_unique() {
        let a = ComponentId::new();
        let b = ComponentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_instantiate_text_defaults() {
        let c = FormComponent::instantiate(FieldType::Text, None);
        assert_eq!(c.label, "New text");
        assert_eq!(c.field_name, "newText");
        assert_eq!(c.required, Some(false));
        assert_eq!(c.variant, Some(Variant::Standard));
        assert_eq!(c.width, Some(Width::FULL));
        assert_eq!(c.options, None);
    }

    #[test]
    fn test_instantiate_choice_defaults() {
        let c = FormComponent::instantiate(FieldType::Dropdown, None);
        assert_eq!(c.field_name, "newDropdown");
        assert_eq!(c.options_or_empty(), ["Option 1", "Option 2"]);

        let c = FormComponent::instantiate(FieldType::RadioGroup, None);
        assert_eq!(c.field_name, "newRadiogroup");
        assert_eq!(c.options_or_empty().len(), 2);
    }

    #[test]
    fn test_instantiate_switch_uses_fixed_label() {
        let c = FormComponent::instantiate(FieldType::Switch, None);
        assert_eq!(c.label, "Enable Feature");
        assert_eq!(c.field_name, "enableFeature");

        let c = FormComponent::instantiate(FieldType::Switch, Some("Dark mode"));
        assert_eq!(c.label, "Dark mode");
        assert_eq!(c.field_name, "darkMode");
    }

    #[test]
    fn test_instantiate_static_content_defaults() {
        let image = FormComponent::instantiate(FieldType::Image, None);
        assert_eq!(image.field_name, "");
        assert_eq!(image.label, "Image");
        assert_eq!(image.src.as_deref(), Some(DEFAULT_IMAGE_SRC));
        assert_eq!(image.alt.as_deref(), Some(DEFAULT_IMAGE_ALT));

        let rich = FormComponent::instantiate(FieldType::RichText, None);
        assert_eq!(rich.field_name, "");
        assert_eq!(rich.label, "Rich Text");
        assert_eq!(rich.value.as_deref(), Some(DEFAULT_RICH_TEXT));

        let table = FormComponent::instantiate(FieldType::DataTable, None);
        assert_eq!(table.field_name, "dataTable");
        assert_eq!(table.label, "Data Table");
        assert_eq!(
            table.columns_or_empty(),
            [
                DataTableColumn::new("Column 1", "col1"),
                DataTableColumn::new("Column 2", "col2"),
            ]
        );
    }

    #[test]
    fn test_instantiate_section_heading_name() {
        let c = FormComponent::instantiate(FieldType::SectionHeading, None);
        assert_eq!(c.label, "New section-heading");
        assert_eq!(c.field_name, "newSectionHeading");
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let mut c = FormComponent::instantiate(FieldType::Text, Some("Name"));
        let id = c.id;
        c.placeholder = Some("Jane".into());

        ComponentPatch::new()
            .with_label("Full name")
            .with_required(true)
            .apply_to(&mut c);

        assert_eq!(c.id, id);
        assert_eq!(c.label, "Full name");
        assert_eq!(c.field_name, "name");
        assert_eq!(c.required, Some(true));
        assert_eq!(c.placeholder.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_patch_type_change_keeps_properties() {
        let mut c = FormComponent::instantiate(FieldType::Dropdown, Some("Size"));
        ComponentPatch::new()
            .with_field_type(FieldType::Text)
            .apply_to(&mut c);

        assert_eq!(c.field_type, FieldType::Text);
        assert_eq!(c.options_or_empty().len(), 2);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ComponentPatch::new().is_empty());
        assert!(!ComponentPatch::new().with_disabled(false).is_empty());
    }

    #[test]
    fn test_component_wire_format() {
        let json = r#"{
            "type": "dropdown",
            "label": "Favorite Color",
            "fieldName": "favoriteColor",
            "options": ["Red", "Blue"],
            "helpText": "Pick one",
            "readOnly": true,
            "variant": "label-inline",
            "width": "6"
        }"#;

        let c: FormComponent = serde_json::from_str(json).unwrap();
        assert_eq!(c.field_type, FieldType::Dropdown);
        assert_eq!(c.field_name, "favoriteColor");
        assert_eq!(c.help_text.as_deref(), Some("Pick one"));
        assert_eq!(c.read_only, Some(true));
        assert_eq!(c.variant, Some(Variant::LabelInline));
        assert_eq!(c.width_or_default().get(), 6);

        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["type"], "dropdown");
        assert_eq!(value["fieldName"], "favoriteColor");
        assert_eq!(value["width"], 6);
        assert!(value.get("placeholder").is_none());
    }
}
