//! Field type tags, label variants and layout widths.
//!
//! [`FieldType`] is a closed set. Tags that are not recognised (for example
//! from a hand-edited design file) are kept as [`FieldType::Unsupported`] so
//! that every consumer handles them in an explicit match arm instead of
//! failing to load the design.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a form field.
///
/// Serialized as its wire tag (`"text"`, `"radiogroup"`, `"section-heading"`,
/// ...). Adding a variant means extending the visibility table and the IR
/// lowering; both match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Email address input
    Email,
    /// Masked password input
    Password,
    /// Numeric input
    Number,
    /// Telephone number input
    Tel,
    /// URL input
    Url,
    /// Search input
    Search,
    /// Multi-line text input
    Textarea,
    /// Combobox with a closed option list
    Dropdown,
    /// Single checkbox
    Checkbox,
    /// Date picker
    Date,
    /// Radio buttons with a closed option list
    RadioGroup,
    /// On/off toggle
    Switch,
    /// File upload
    File,
    /// Static image
    Image,
    /// Literal rich-text block
    RichText,
    /// Read-only table with sample rows
    DataTable,
    /// Heading that separates form sections
    SectionHeading,
    /// A tag this version does not know; generation skips it.
    Unsupported(String),
}

impl FieldType {
    /// Every supported field type, in palette order.
    pub const ALL: [FieldType; 18] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Password,
        FieldType::Number,
        FieldType::Textarea,
        FieldType::Dropdown,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::RadioGroup,
        FieldType::Switch,
        FieldType::Tel,
        FieldType::Url,
        FieldType::Search,
        FieldType::File,
        FieldType::Image,
        FieldType::RichText,
        FieldType::DataTable,
        FieldType::SectionHeading,
    ];

    /// Resolve a wire tag. Unknown tags become [`FieldType::Unsupported`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "search" => Self::Search,
            "textarea" => Self::Textarea,
            "dropdown" => Self::Dropdown,
            "checkbox" => Self::Checkbox,
            "date" => Self::Date,
            "radiogroup" => Self::RadioGroup,
            "switch" => Self::Switch,
            "file" => Self::File,
            "image" => Self::Image,
            "richtext" => Self::RichText,
            "datatable" => Self::DataTable,
            "section-heading" => Self::SectionHeading,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// The wire tag of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::RadioGroup => "radiogroup",
            Self::Switch => "switch",
            Self::File => "file",
            Self::Image => "image",
            Self::RichText => "richtext",
            Self::DataTable => "datatable",
            Self::SectionHeading => "section-heading",
            Self::Unsupported(tag) => tag,
        }
    }

    /// Whether this version knows how to edit and generate the type.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Whether the field collects a value from the user.
    ///
    /// Static content (image, rich text, data table, heading) is not an input
    /// and never carries the shared label/name/required attributes.
    pub fn is_input(&self) -> bool {
        match self {
            Self::Text
            | Self::Email
            | Self::Password
            | Self::Number
            | Self::Tel
            | Self::Url
            | Self::Search
            | Self::Textarea
            | Self::Dropdown
            | Self::Checkbox
            | Self::Date
            | Self::RadioGroup
            | Self::Switch
            | Self::File => true,
            Self::Image
            | Self::RichText
            | Self::DataTable
            | Self::SectionHeading
            | Self::Unsupported(_) => false,
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Unsupported(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label placement for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Label above the control
    #[default]
    Standard,
    /// Label kept for accessibility but not shown
    LabelHidden,
    /// Label beside the control
    LabelInline,
}

impl Variant {
    /// The attribute value used in generated markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::LabelHidden => "label-hidden",
            Self::LabelInline => "label-inline",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proportional layout span on a 12-column grid.
///
/// Always within `1..=12`. Out-of-range input is clamped rather than
/// rejected; design files written by the browser editor store the width as a
/// string, so both `6` and `"6"` deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WidthRepr", into = "u8")]
pub struct Width(u8);

impl Width {
    /// Smallest span.
    pub const MIN: Width = Width(1);

    /// Full row, used when a component has no width.
    pub const FULL: Width = Width(12);

    /// Create a width, returning `None` outside `1..=12`.
    pub fn new(span: u8) -> Option<Self> {
        (1..=12).contains(&span).then_some(Self(span))
    }

    /// Create a width, clamping into `1..=12`.
    pub fn clamped(span: i64) -> Self {
        Self(span.clamp(1, 12) as u8)
    }

    /// The column span.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<Width> for u8 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Number(i64),
    Text(String),
}

impl From<WidthRepr> for Width {
    fn from(repr: WidthRepr) -> Self {
        match repr {
            WidthRepr::Number(n) => Width::clamped(n),
            WidthRepr::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Width::clamped)
                .unwrap_or(Width::FULL),
        }
    }
}
