//! Intermediate representation shared by the markup and script renderers.
//!
//! Lowering walks the components once and, for every field, records both the
//! control the markup must emit and the script declarations that control
//! refers to. Both come from the same [`Symbol`] values, so a renderer can
//! never reference a name the other renderer did not declare.

use serde_json::{json, Map, Value};
use std::fmt;
use tracing::debug;

use crate::component::{ComponentId, FormComponent};
use crate::field::{FieldType, Variant, Width};
use crate::visibility::PropertyVisibility;

/// Number of synthetic rows given to every data table.
pub const SAMPLE_ROWS: usize = 3;

/// Placeholder shown by a dropdown that has none of its own.
pub const DEFAULT_CHOICE_PLACEHOLDER: &str = "Select an Option";

// =============================================================================
// Symbols and Declarations
// =============================================================================

/// What a script-side symbol holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    /// `(label, value)` choices of a dropdown or radio group
    Options,
    /// Literal rich-text content
    Value,
    /// Data table column definitions
    Columns,
    /// Data table sample rows
    Data,
}

impl SymbolKind {
    /// Suffix appended to the field name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Options => "Options",
            Self::Value => "Value",
            Self::Columns => "Columns",
            Self::Data => "Data",
        }
    }
}

/// A class property declared by the script and referenced by the markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub field_name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(field_name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            field_name: field_name.into(),
            kind,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field_name, self.kind.suffix())
    }
}

/// Initial value of a declared symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Structured data rendered as a JSON literal
    Json(Value),
    /// Text rendered verbatim inside a template literal
    Template(String),
}

/// One script declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub symbol: Symbol,
    pub value: Literal,
}

// =============================================================================
// Controls
// =============================================================================

/// Attributes every input shares, already filtered by visibility.
///
/// Flags are `true` only when both applicable and set; strings are `Some`
/// only when applicable and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonAttrs {
    pub label: String,
    pub name: String,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub variant: Option<Variant>,
    pub help_text: Option<String>,
}

/// Text-entry constraints, already filtered by visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextConstraints {
    pub placeholder: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
}

/// Presentation of a closed choice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Combobox,
    RadioGroup,
}

/// The markup a field needs, independent of any concrete syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Single-element input; `input_type` is the target's type attribute.
    Input {
        input_type: &'static str,
        common: CommonAttrs,
        text: TextConstraints,
    },
    TextArea {
        common: CommonAttrs,
        text: TextConstraints,
    },
    Choice {
        style: ChoiceStyle,
        common: CommonAttrs,
        placeholder: Option<String>,
        options: Symbol,
    },
    Image {
        src: String,
        alt: String,
    },
    RichText {
        value: Symbol,
    },
    DataTable {
        columns: Symbol,
        data: Symbol,
    },
    Heading {
        text: String,
    },
}

impl Control {
    /// Script symbols this control refers to, in attribute order.
    pub fn references(&self) -> Vec<&Symbol> {
        match self {
            Control::Choice { options, .. } => vec![options],
            Control::RichText { value } => vec![value],
            Control::DataTable { columns, data } => vec![data, columns],
            Control::Input { .. }
            | Control::TextArea { .. }
            | Control::Image { .. }
            | Control::Heading { .. } => Vec::new(),
        }
    }
}

/// One lowered field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIr {
    pub id: ComponentId,
    pub field_name: String,
    pub width: Width,
    pub control: Control,
    pub declarations: Vec<Declaration>,
}

impl FieldIr {
    /// Symbols the markup for this field references.
    pub fn references(&self) -> Vec<&Symbol> {
        self.control.references()
    }

    /// Symbols the script declares for this field.
    pub fn declared(&self) -> Vec<&Symbol> {
        self.declarations.iter().map(|d| &d.symbol).collect()
    }
}

/// A whole form, lowered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormIr {
    pub fields: Vec<FieldIr>,
    /// Components left out because their type is unsupported
    pub skipped: Vec<ComponentId>,
}

impl FormIr {
    /// Lower components in order. Unsupported types are skipped.
    pub fn lower(components: &[FormComponent]) -> Self {
        let mut form = FormIr::default();

        for component in components {
            match lower_component(component) {
                Some(field) => form.fields.push(field),
                None => {
                    debug!(
                        id = %component.id,
                        field_type = %component.field_type,
                        "Skipping unsupported field type"
                    );
                    form.skipped.push(component.id);
                }
            }
        }

        form
    }

    /// Every declaration, in form order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.fields.iter().flat_map(|f| f.declarations.iter())
    }

    /// Every referenced symbol, in form order.
    pub fn references(&self) -> impl Iterator<Item = &Symbol> {
        self.fields.iter().flat_map(|f| f.references())
    }
}

// =============================================================================
// Lowering
// =============================================================================

fn lower_component(c: &FormComponent) -> Option<FieldIr> {
    let vis = c.field_type.visibility();

    let (control, declarations) = match &c.field_type {
        FieldType::Text => (input("text", c, &vis), Vec::new()),
        FieldType::Email => (input("email", c, &vis), Vec::new()),
        FieldType::Password => (input("password", c, &vis), Vec::new()),
        FieldType::Number => (input("number", c, &vis), Vec::new()),
        FieldType::Tel => (input("tel", c, &vis), Vec::new()),
        FieldType::Url => (input("url", c, &vis), Vec::new()),
        FieldType::Search => (input("search", c, &vis), Vec::new()),
        FieldType::Checkbox => (input("checkbox", c, &vis), Vec::new()),
        FieldType::Date => (input("date", c, &vis), Vec::new()),
        FieldType::Switch => (input("toggle", c, &vis), Vec::new()),
        FieldType::File => (input("file", c, &vis), Vec::new()),
        FieldType::Textarea => (
            Control::TextArea {
                common: common_attrs(c, &vis),
                text: text_constraints(c, &vis),
            },
            Vec::new(),
        ),
        FieldType::Dropdown => choice(ChoiceStyle::Combobox, c, &vis),
        FieldType::RadioGroup => choice(ChoiceStyle::RadioGroup, c, &vis),
        FieldType::Image => (
            Control::Image {
                src: c.src.clone().unwrap_or_default(),
                alt: c.alt.clone().unwrap_or_default(),
            },
            Vec::new(),
        ),
        FieldType::RichText => {
            let value = Symbol::new(&c.field_name, SymbolKind::Value);
            let declaration = Declaration {
                symbol: value.clone(),
                value: Literal::Template(c.value.clone().unwrap_or_default()),
            };
            (Control::RichText { value }, vec![declaration])
        }
        FieldType::DataTable => data_table(c),
        FieldType::SectionHeading => (
            Control::Heading {
                text: c.label.clone(),
            },
            Vec::new(),
        ),
        FieldType::Unsupported(_) => return None,
    };

    Some(FieldIr {
        id: c.id,
        field_name: c.field_name.clone(),
        width: c.width_or_default(),
        control,
        declarations,
    })
}

fn input(input_type: &'static str, c: &FormComponent, vis: &PropertyVisibility) -> Control {
    Control::Input {
        input_type,
        common: common_attrs(c, vis),
        text: text_constraints(c, vis),
    }
}

fn choice(
    style: ChoiceStyle,
    c: &FormComponent,
    vis: &PropertyVisibility,
) -> (Control, Vec<Declaration>) {
    let options = Symbol::new(&c.field_name, SymbolKind::Options);
    let placeholder = match style {
        ChoiceStyle::Combobox => Some(
            non_empty(&c.placeholder)
                .filter(|_| vis.placeholder)
                .unwrap_or_else(|| DEFAULT_CHOICE_PLACEHOLDER.to_string()),
        ),
        ChoiceStyle::RadioGroup => None,
    };

    let pairs = c
        .options_or_empty()
        .iter()
        .map(|opt| json!({ "label": opt, "value": opt }))
        .collect();

    let declaration = Declaration {
        symbol: options.clone(),
        value: Literal::Json(Value::Array(pairs)),
    };

    let control = Control::Choice {
        style,
        common: common_attrs(c, vis),
        placeholder,
        options,
    };

    (control, vec![declaration])
}

fn data_table(c: &FormComponent) -> (Control, Vec<Declaration>) {
    let columns = Symbol::new(&c.field_name, SymbolKind::Columns);
    let data = Symbol::new(&c.field_name, SymbolKind::Data);

    let column_defs = c
        .columns_or_empty()
        .iter()
        .map(|col| json!({ "label": col.label, "fieldName": col.field_name }))
        .collect();

    let rows = (0..SAMPLE_ROWS)
        .map(|i| {
            let mut row = Map::new();
            row.insert("id".to_string(), Value::from(i));
            for col in c.columns_or_empty() {
                row.insert(
                    col.field_name.clone(),
                    Value::String(format!("Sample Data {}", i + 1)),
                );
            }
            Value::Object(row)
        })
        .collect();

    let declarations = vec![
        Declaration {
            symbol: columns.clone(),
            value: Literal::Json(Value::Array(column_defs)),
        },
        Declaration {
            symbol: data.clone(),
            value: Literal::Json(Value::Array(rows)),
        },
    ];

    (Control::DataTable { columns, data }, declarations)
}

fn common_attrs(c: &FormComponent, vis: &PropertyVisibility) -> CommonAttrs {
    CommonAttrs {
        label: c.label.clone(),
        name: c.field_name.clone(),
        required: vis.required && c.required == Some(true),
        disabled: vis.disabled && c.disabled == Some(true),
        read_only: vis.read_only && c.read_only == Some(true),
        variant: c.variant.filter(|_| vis.variant),
        help_text: non_empty(&c.help_text).filter(|_| vis.help_text),
    }
}

fn text_constraints(c: &FormComponent, vis: &PropertyVisibility) -> TextConstraints {
    TextConstraints {
        placeholder: non_empty(&c.placeholder).filter(|_| vis.placeholder),
        min_length: c.min_length.filter(|_| vis.length_bounds),
        max_length: c.max_length.filter(|_| vis.length_bounds),
        pattern: non_empty(&c.pattern).filter(|_| vis.pattern),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
