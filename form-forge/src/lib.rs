//! # form-forge
//!
//! Form schema model and code generation for Lightning Web Components.
//!
//! A form design is an ordered list of [`FormComponent`]s owned by a
//! [`FormSchema`]. Editors mutate the schema through its command-style API
//! (`create`, `update`, `delete`, `reorder`, `select`) and the generation
//! engine turns the current snapshot into two documents: an HTML template and
//! a companion JavaScript class that declares every option list, rich-text
//! value and data-table fixture the template references.
//!
//! ## Quick Start
//!
//! ```rust
//! use form_forge::{generate, ComponentPatch, FieldType, FormSchema, GeneratorConfig};
//!
//! let mut schema = FormSchema::new();
//! let id = schema.create(FieldType::Dropdown, Some("Favorite Color")).id;
//! schema.update(id, ComponentPatch::new().with_options(["Red", "Blue"]));
//!
//! let form = generate(schema.components(), &GeneratorConfig::default());
//! assert!(form.markup.contains("options={favoriteColorOptions}"));
//! assert!(form.script.contains("favoriteColorOptions = ["));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Palette of field types with display metadata
//! - [`field`] - Field type tags, label variants and layout widths
//! - [`component`] - The `FormComponent` descriptor and partial updates
//! - [`schema`] - The owned, ordered form design and its operations
//! - [`visibility`] - Which optional properties apply to which field type
//! - [`naming`] - Machine-name derivation from labels
//! - [`generator`] - Intermediate representation and the Lightning target
//! - [`suggest`] - Boundary to the advisory field-type suggestion service
//! - [`lint`] - Non-blocking consistency warnings for a design
//! - [`error`] - Error types

pub mod catalog;
pub mod component;
pub mod error;
pub mod field;
pub mod generator;
pub mod lint;
pub mod naming;
pub mod schema;
pub mod suggest;
pub mod visibility;

pub use catalog::CatalogEntry;
pub use component::{ComponentId, ComponentPatch, DataTableColumn, FormComponent};
pub use error::{FormError, FormResult, SuggestError, SuggestResult};
pub use field::{FieldType, Variant, Width};
pub use generator::{
    emit_markup, emit_script, generate, FormTarget, GeneratedForm, GeneratorConfig,
    LightningTarget,
};
pub use lint::{lint, LintWarning};
pub use naming::to_camel_case;
pub use schema::FormSchema;
pub use suggest::{FieldSuggestion, FieldTypeAdvisor};
pub use visibility::{visibility, Property, PropertyVisibility};
