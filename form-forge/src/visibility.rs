//! Property visibility rules.
//!
//! A single lookup table decides which optional properties are meaningful for
//! each field type. The property editor uses it to pick the controls it shows
//! and the IR lowering uses the very same table to pick the attributes it
//! emits, so the two never disagree.
//!
//! The first six flags are the editor's primary table:
//!
//! | Property | Applies to |
//! |----------|------------|
//! | placeholder | text, email, password, number, textarea, dropdown |
//! | required | every type except switch |
//! | options | dropdown, radiogroup |
//! | length bounds | text, password, textarea |
//! | pattern | text, password, email, number |
//! | variant | every type except checkbox, switch, radiogroup, date, image, richtext, datatable |
//!
//! The remaining flags cover the shared input attributes and the
//! type-specific content of static components.

use serde::Serialize;
use std::fmt;

use crate::field::FieldType;

/// An optional property that may or may not apply to a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Placeholder,
    Required,
    Options,
    LengthBounds,
    Pattern,
    Variant,
    HelpText,
    Disabled,
    ReadOnly,
    Image,
    RichText,
    Columns,
}

impl Property {
    /// Every property, in editor order.
    pub const ALL: [Property; 12] = [
        Property::Placeholder,
        Property::Required,
        Property::Options,
        Property::LengthBounds,
        Property::Pattern,
        Property::Variant,
        Property::HelpText,
        Property::Disabled,
        Property::ReadOnly,
        Property::Image,
        Property::RichText,
        Property::Columns,
    ];

    /// Short display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Required => "required",
            Self::Options => "options",
            Self::LengthBounds => "length-bounds",
            Self::Pattern => "pattern",
            Self::Variant => "variant",
            Self::HelpText => "help-text",
            Self::Disabled => "disabled",
            Self::ReadOnly => "read-only",
            Self::Image => "image",
            Self::RichText => "rich-text",
            Self::Columns => "columns",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applicability flags for one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyVisibility {
    pub placeholder: bool,
    pub required: bool,
    pub options: bool,
    pub length_bounds: bool,
    pub pattern: bool,
    pub variant: bool,
    pub help_text: bool,
    pub disabled: bool,
    pub read_only: bool,
    /// `src` and `alt`
    pub image: bool,
    /// Literal `value` content
    pub rich_text: bool,
    pub columns: bool,
}

impl PropertyVisibility {
    /// Whether `property` applies.
    pub fn is_applicable(&self, property: Property) -> bool {
        match property {
            Property::Placeholder => self.placeholder,
            Property::Required => self.required,
            Property::Options => self.options,
            Property::LengthBounds => self.length_bounds,
            Property::Pattern => self.pattern,
            Property::Variant => self.variant,
            Property::HelpText => self.help_text,
            Property::Disabled => self.disabled,
            Property::ReadOnly => self.read_only,
            Property::Image => self.image,
            Property::RichText => self.rich_text,
            Property::Columns => self.columns,
        }
    }

    /// The applicable properties, in editor order.
    pub fn applicable(&self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|p| self.is_applicable(*p))
            .collect()
    }
}

/// Look up which properties apply to `field_type`.
///
/// Unsupported types have no applicable properties: there is nothing to edit
/// and nothing will be generated for them.
pub fn visibility(field_type: &FieldType) -> PropertyVisibility {
    use FieldType::*;

    if let Unsupported(_) = field_type {
        return PropertyVisibility::default();
    }

    let input = field_type.is_input();

    PropertyVisibility {
        placeholder: matches!(
            field_type,
            Text | Email | Password | Number | Textarea | Dropdown
        ),
        required: !matches!(field_type, Switch),
        options: matches!(field_type, Dropdown | RadioGroup),
        length_bounds: matches!(field_type, Text | Password | Textarea),
        pattern: matches!(field_type, Text | Password | Email | Number),
        variant: !matches!(
            field_type,
            Checkbox | Switch | RadioGroup | Date | Image | RichText | DataTable
        ),
        help_text: input,
        disabled: input,
        read_only: input && !matches!(field_type, Switch | File),
        image: matches!(field_type, Image),
        rich_text: matches!(field_type, RichText),
        columns: matches!(field_type, DataTable),
    }
}

impl FieldType {
    /// Shorthand for [`visibility`].
    pub fn visibility(&self) -> PropertyVisibility {
        visibility(self)
    }
}
