//! Lightning Web Components target.
//!
//! Renders a `<template>` with a `lightning-card` holding one
//! `lightning-layout-item` per field, and an ES module exporting a
//! `LightningElement` subclass that declares every option list, rich-text
//! value and data-table fixture the template binds to.

mod markup;
mod script;

use super::ir::FormIr;
use super::traits::{FormTarget, GeneratorConfig};

pub use markup::escape_attr;
pub use script::escape_template;

/// Lightning Web Components generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningTarget;

impl LightningTarget {
    pub fn new() -> Self {
        Self
    }
}

impl FormTarget for LightningTarget {
    fn id(&self) -> &'static str {
        "lwc"
    }

    fn name(&self) -> &'static str {
        "Lightning Web Component"
    }

    fn render_markup(&self, form: &FormIr, config: &GeneratorConfig) -> String {
        markup::render(form, config)
    }

    fn render_script(&self, form: &FormIr, config: &GeneratorConfig) -> String {
        script::render(form, config)
    }
}
