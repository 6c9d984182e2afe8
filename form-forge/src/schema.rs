//! The owned, ordered form design.
//!
//! [`FormSchema`] is the single owner of every [`FormComponent`] in a design
//! together with the editor's active selection. All mutation goes through its
//! methods; editors and generators only ever see `&[FormComponent]`
//! snapshots.
//!
//! Operations are total. An id that no longer exists (a stale reference from
//! the UI, or a late advisory response for a deleted field) makes the
//! operation a no-op instead of an error.

use std::collections::HashSet;
use tracing::{debug, trace};

use crate::component::{ComponentId, ComponentPatch, FormComponent, DEFAULT_OPTIONS};
use crate::error::{FormError, FormResult};
use crate::field::FieldType;
use crate::naming::to_camel_case;
use crate::suggest::FieldSuggestion;

/// An ordered collection of form components plus the active selection.
///
/// # Example
/// ```rust
/// use form_forge::{FieldType, FormSchema};
///
/// let mut schema = FormSchema::new();
/// let a = schema.create(FieldType::Text, Some("A")).id;
/// let b = schema.create(FieldType::Text, Some("B")).id;
/// let c = schema.create(FieldType::Text, Some("C")).id;
///
/// schema.reorder(a, c);
/// assert_eq!(schema.ids(), vec![b, c, a]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    components: Vec<FormComponent>,
    selected: Option<ComponentId>,
}

impl FormSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from existing components, keeping their order.
    ///
    /// Components without a field name get one derived from their label.
    /// Fails if two components share an id.
    pub fn from_components(components: Vec<FormComponent>) -> FormResult<Self> {
        let mut seen = HashSet::with_capacity(components.len());
        let mut components = components;

        for component in &mut components {
            if !seen.insert(component.id) {
                return Err(FormError::DuplicateId(component.id));
            }
            if component.field_name.is_empty() && needs_field_name(&component.field_type) {
                component.field_name = to_camel_case(&component.label);
            }
        }

        debug!(count = components.len(), "Loaded form schema");

        Ok(Self {
            components,
            selected: None,
        })
    }

    // =========================================================================
    // Snapshot access
    // =========================================================================

    /// The components in form order.
    pub fn components(&self) -> &[FormComponent] {
        &self.components
    }

    /// Consume the schema, returning its components.
    pub fn into_components(self) -> Vec<FormComponent> {
        self.components
    }

    /// Component ids in form order.
    pub fn ids(&self) -> Vec<ComponentId> {
        self.components.iter().map(|c| c.id).collect()
    }

    /// Look up a component by id.
    pub fn get(&self, id: ComponentId) -> Option<&FormComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Position of a component in the form.
    pub fn position(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Instantiate a field of `field_type`, append it and select it.
    ///
    /// See [`FormComponent::instantiate`] for the per-type defaults.
    pub fn create(&mut self, field_type: FieldType, label: Option<&str>) -> &FormComponent {
        let component = FormComponent::instantiate(field_type, label);
        let id = component.id;

        debug!(
            id = %id,
            field_type = %component.field_type,
            field_name = %component.field_name,
            "Created component"
        );

        self.components.push(component);
        self.selected = Some(id);
        &self.components[self.components.len() - 1]
    }

    /// Merge `patch` into the component with `id`.
    ///
    /// Returns whether a component was updated; a missing id is a no-op.
    pub fn update(&mut self, id: ComponentId, patch: ComponentPatch) -> bool {
        match self.components.iter_mut().find(|c| c.id == id) {
            Some(component) => {
                patch.apply_to(component);
                trace!(id = %id, "Updated component");
                true
            }
            None => {
                trace!(id = %id, "Ignoring update for missing component");
                false
            }
        }
    }

    /// Remove the component with `id`, clearing the selection if it was
    /// selected. Returns the removed component.
    pub fn delete(&mut self, id: ComponentId) -> Option<FormComponent> {
        let index = self.position(id)?;
        let removed = self.components.remove(index);

        if self.selected == Some(id) {
            self.selected = None;
        }

        debug!(id = %id, "Deleted component");
        Some(removed)
    }

    /// Move `moved` to the slot `target` occupies.
    ///
    /// The target index is taken before the moved component is removed, so
    /// moving forward lands the component just after the target and moving
    /// backward lands it just before: `[A, B, C]` with `reorder(A, C)` gives
    /// `[B, C, A]`. Returns whether anything moved; unknown ids are a no-op.
    pub fn reorder(&mut self, moved: ComponentId, target: ComponentId) -> bool {
        let (Some(from), Some(to)) = (self.position(moved), self.position(target)) else {
            trace!(moved = %moved, target = %target, "Ignoring reorder with missing component");
            return false;
        };

        let component = self.components.remove(from);
        self.components.insert(to, component);

        debug!(moved = %moved, from, to, "Reordered component");
        from != to
    }

    /// Make `id` the active selection. A missing id leaves the selection as it
    /// was.
    pub fn select(&mut self, id: ComponentId) -> bool {
        if self.position(id).is_none() {
            trace!(id = %id, "Ignoring selection of missing component");
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the active selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The id of the active selection.
    pub fn selected_id(&self) -> Option<ComponentId> {
        self.selected
    }

    /// The selected component.
    pub fn selected(&self) -> Option<&FormComponent> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Apply an advisory suggestion to the component with `id`.
    ///
    /// The suggested validations are always recorded. The type is replaced
    /// only when the suggestion names a known type; a field that gains a
    /// choice list this way gets the default options if it has none. Returns
    /// whether the component still existed.
    pub fn apply_suggestion(&mut self, id: ComponentId, suggestion: &FieldSuggestion) -> bool {
        let mut patch = suggestion.to_patch();

        if let (Some(new_type), Some(current)) = (&patch.field_type, self.get(id)) {
            if new_type.visibility().options && current.options.is_none() {
                patch.options = Some(DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect());
            }
        }

        let applied = self.update(id, patch);
        if applied {
            debug!(
                id = %id,
                suggested_type = %suggestion.field_type,
                rules = suggestion.validation_rules.len(),
                "Applied field suggestion"
            );
        }
        applied
    }
}

/// Types whose generated output uses the field name.
pub(crate) fn needs_field_name(field_type: &FieldType) -> bool {
    field_type.is_input() || matches!(field_type, FieldType::DataTable)
}
