//! Consistency warnings for a design.
//!
//! The schema stays permissive: two fields may share a name and a length
//! range may be inverted. Lint reports those cases so a caller can surface
//! them, but generation never depends on its result.

use std::collections::BTreeMap;
use std::fmt;

use crate::component::{ComponentId, FormComponent};
use crate::field::FieldType;
use crate::generator::FormIr;
use crate::schema::needs_field_name;

/// A non-blocking problem found in a design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// Several fields use the same field name.
    DuplicateFieldName {
        field_name: String,
        ids: Vec<ComponentId>,
    },

    /// A data table has two columns with the same field name.
    DuplicateColumn {
        id: ComponentId,
        field_name: String,
    },

    /// `minLength` is greater than `maxLength`.
    InvertedLengthBounds {
        id: ComponentId,
        min_length: u32,
        max_length: u32,
    },

    /// A field that needs a name to bind its data has none.
    EmptyFieldName { id: ComponentId, field_type: FieldType },

    /// Several fields declare the same script symbol, so all their markup
    /// blocks bind to the last declaration.
    DuplicateSymbol {
        symbol: String,
        ids: Vec<ComponentId>,
    },
}

impl LintWarning {
    /// The component the warning is about (the first one for duplicates).
    pub fn id(&self) -> Option<ComponentId> {
        match self {
            Self::DuplicateFieldName { ids, .. } | Self::DuplicateSymbol { ids, .. } => {
                ids.first().copied()
            }
            Self::DuplicateColumn { id, .. }
            | Self::InvertedLengthBounds { id, .. }
            | Self::EmptyFieldName { id, .. } => Some(*id),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { field_name, ids } => write!(
                f,
                "field name '{}' is used by {} fields",
                field_name,
                ids.len()
            ),
            Self::DuplicateColumn { id, field_name } => {
                write!(f, "data table {} has duplicate column '{}'", id, field_name)
            }
            Self::InvertedLengthBounds {
                id,
                min_length,
                max_length,
            } => write!(
                f,
                "field {} has minLength {} greater than maxLength {}",
                id, min_length, max_length
            ),
            Self::EmptyFieldName { id, field_type } => {
                write!(f, "{} field {} has an empty field name", field_type, id)
            }
            Self::DuplicateSymbol { symbol, ids } => write!(
                f,
                "script symbol '{}' is declared by {} fields",
                symbol,
                ids.len()
            ),
        }
    }
}

/// Check a design for consistency problems.
///
/// Warnings for individual components come first, in form order, followed by
/// duplicate field names sorted by name, then colliding script symbols sorted
/// by symbol.
pub fn lint(components: &[FormComponent]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut names: BTreeMap<&str, Vec<ComponentId>> = BTreeMap::new();

    for c in components {
        if !needs_field_name(&c.field_type) && !declares_symbols(&c.field_type) {
            continue;
        }

        if c.field_name.is_empty() {
            if declares_symbols(&c.field_type) {
                warnings.push(LintWarning::EmptyFieldName {
                    id: c.id,
                    field_type: c.field_type.clone(),
                });
            }
        } else {
            names.entry(&c.field_name).or_default().push(c.id);
        }

        if let (Some(min), Some(max)) = (c.min_length, c.max_length) {
            if min > max {
                warnings.push(LintWarning::InvertedLengthBounds {
                    id: c.id,
                    min_length: min,
                    max_length: max,
                });
            }
        }

        let mut columns: BTreeMap<&str, usize> = BTreeMap::new();
        for column in c.columns_or_empty() {
            *columns.entry(&column.field_name).or_default() += 1;
        }
        for (field_name, count) in columns {
            if count > 1 {
                warnings.push(LintWarning::DuplicateColumn {
                    id: c.id,
                    field_name: field_name.to_string(),
                });
            }
        }
    }

    for (field_name, ids) in names {
        if ids.len() > 1 {
            warnings.push(LintWarning::DuplicateFieldName {
                field_name: field_name.to_string(),
                ids,
            });
        }
    }

    let ir = FormIr::lower(components);
    let mut symbols: BTreeMap<String, Vec<ComponentId>> = BTreeMap::new();
    for field in &ir.fields {
        for symbol in field.declared() {
            symbols.entry(symbol.to_string()).or_default().push(field.id);
        }
    }
    for (symbol, ids) in symbols {
        if ids.len() > 1 {
            warnings.push(LintWarning::DuplicateSymbol { symbol, ids });
        }
    }

    warnings
}

/// Types whose script declarations are named after the field.
fn declares_symbols(field_type: &FieldType) -> bool {
    matches!(
        field_type,
        FieldType::Dropdown | FieldType::RadioGroup | FieldType::RichText | FieldType::DataTable
    )
}
