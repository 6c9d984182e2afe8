//! Boundary to the advisory field-type suggestion service.
//!
//! The service looks at a label and proposes a field type and a list of
//! human-readable validation rules. Its answer is advisory: nothing in the
//! schema changes until a suggestion has arrived, and an answer for a field
//! that was deleted in the meantime is ignored.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::component::{ComponentId, ComponentPatch};
use crate::error::{SuggestError, SuggestResult};
use crate::field::FieldType;
use crate::schema::FormSchema;

/// A proposed field type and validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSuggestion {
    /// Suggested type tag, as returned by the service
    pub field_type: String,

    /// Suggested validation rules, informational only
    #[serde(default)]
    pub validation_rules: Vec<String>,
}

impl FieldSuggestion {
    pub fn new<I, S>(field_type: impl Into<String>, validation_rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_type: field_type.into(),
            validation_rules: validation_rules.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a raw JSON answer from the service.
    pub fn from_json(raw: &str) -> SuggestResult<Self> {
        serde_json::from_str(raw).map_err(|e| SuggestError::InvalidResponse(e.to_string()))
    }

    /// The suggested type, if it is one this crate supports.
    pub fn suggested_type(&self) -> Option<FieldType> {
        Some(FieldType::from_tag(self.field_type.trim())).filter(FieldType::is_supported)
    }

    /// The update this suggestion amounts to.
    ///
    /// Validation rules are always carried; the type only when it is known.
    pub fn to_patch(&self) -> ComponentPatch {
        let mut patch = ComponentPatch::new().with_validations(self.validation_rules.iter().cloned());
        patch.field_type = self.suggested_type();
        patch
    }
}

/// The external suggestion service.
#[async_trait]
pub trait FieldTypeAdvisor: Send + Sync {
    /// Ask for a suggestion for `label`.
    async fn suggest(&self, label: &str) -> SuggestResult<FieldSuggestion>;
}

/// Ask `advisor` about `label`, rejecting empty labels up front.
pub async fn request_suggestion(
    advisor: &dyn FieldTypeAdvisor,
    label: &str,
) -> SuggestResult<FieldSuggestion> {
    let label = label.trim();
    if label.is_empty() {
        return Err(SuggestError::EmptyLabel);
    }

    match advisor.suggest(label).await {
        Ok(suggestion) => {
            debug!(
                label = %label,
                field_type = %suggestion.field_type,
                rules = suggestion.validation_rules.len(),
                "Received field suggestion"
            );
            Ok(suggestion)
        }
        Err(e) => {
            warn!(label = %label, error = %e, "Field suggestion failed");
            Err(e)
        }
    }
}

/// Ask for a suggestion for the field `id` and apply it.
///
/// Returns `Ok(false)` when the field does not exist. On error the schema is
/// left exactly as it was.
pub async fn suggest_field(
    schema: &mut FormSchema,
    id: ComponentId,
    advisor: &dyn FieldTypeAdvisor,
) -> SuggestResult<bool> {
    let Some(label) = schema.get(id).map(|c| c.label.clone()) else {
        return Ok(false);
    };

    let suggestion = request_suggestion(advisor, &label).await?;
    Ok(schema.apply_suggestion(id, &suggestion))
}
