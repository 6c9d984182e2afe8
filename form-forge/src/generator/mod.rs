//! Code generation.
//!
//! Generation runs in two stages. [`ir::FormIr::lower`] turns the component
//! list into a per-field description of the control and the script
//! declarations it needs; a [`FormTarget`] then renders that description into
//! the two documents. Everything here is pure and deterministic.

pub mod ir;
pub mod lightning;
pub mod traits;

pub use ir::FormIr;
pub use lightning::LightningTarget;
pub use traits::{FormTarget, GeneratorConfig};

use tracing::debug;

use crate::component::FormComponent;

/// The two generated documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedForm {
    /// HTML template
    pub markup: String,
    /// JavaScript class
    pub script: String,
}

/// Generate both documents for the Lightning target.
pub fn generate(components: &[FormComponent], config: &GeneratorConfig) -> GeneratedForm {
    generate_with(&LightningTarget, components, config)
}

/// Generate both documents for `target` from a single lowering pass.
pub fn generate_with(
    target: &dyn FormTarget,
    components: &[FormComponent],
    config: &GeneratorConfig,
) -> GeneratedForm {
    let form = FormIr::lower(components);

    let generated = GeneratedForm {
        markup: target.render_markup(&form, config),
        script: target.render_script(&form, config),
    };

    debug!(
        target = target.id(),
        fields = form.fields.len(),
        skipped = form.skipped.len(),
        declarations = form.declarations().count(),
        "Generated form"
    );

    generated
}

/// Generate only the Lightning markup.
pub fn emit_markup(components: &[FormComponent], config: &GeneratorConfig) -> String {
    LightningTarget.render_markup(&FormIr::lower(components), config)
}

/// Generate only the Lightning script.
pub fn emit_script(components: &[FormComponent], config: &GeneratorConfig) -> String {
    LightningTarget.render_script(&FormIr::lower(components), config)
}
