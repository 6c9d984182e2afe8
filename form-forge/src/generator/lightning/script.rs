//! JavaScript class rendering.

use crate::generator::ir::{Declaration, FieldIr, FormIr, Literal};
use crate::generator::traits::GeneratorConfig;

const MEMBER_INDENT: usize = 4;

pub(super) fn render(form: &FormIr, config: &GeneratorConfig) -> String {
    let properties: Vec<String> = form
        .fields
        .iter()
        .filter(|f| !f.declarations.is_empty())
        .map(render_field)
        .collect();

    let mut out = String::new();
    out.push_str("import { LightningElement, track } from 'lwc';\n\n");
    out.push_str(&format!(
        "export default class {} extends LightningElement {{\n",
        config.class_name
    ));
    if !properties.is_empty() {
        out.push_str(&properties.join("\n\n"));
        out.push('\n');
    }
    out.push('\n');
    out.push_str("    @track value;\n\n");
    out.push_str("    // Add your form handling logic here\n");
    out.push_str("    // e.g., handleChange(event) { ... }\n");
    out.push_str("    handleSubmit(event) {\n");
    out.push_str("        // Implement your submit logic\n");
    out.push_str("        console.log('Form submitted');\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

fn render_field(field: &FieldIr) -> String {
    field
        .declarations
        .iter()
        .map(render_declaration)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_declaration(declaration: &Declaration) -> String {
    let value = match &declaration.value {
        Literal::Json(json) => reindent(&format!("{json:#}"), MEMBER_INDENT),
        Literal::Template(text) => format!("`{}`", escape_template(text)),
    };
    format!("    {} = {};", declaration.symbol, value)
}

/// Widen two-space JSON indentation to four and shift every continuation line
/// into the class body. JSON strings never contain raw newlines, so leading
/// spaces are always indentation.
fn reindent(pretty: &str, offset: usize) -> String {
    let mut lines = pretty.lines();
    let mut out = String::with_capacity(pretty.len() * 2);

    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        let content = line.trim_start_matches(' ');
        let depth = line.len() - content.len();
        out.push('\n');
        out.push_str(&" ".repeat(depth * 2 + offset));
        out.push_str(content);
    }
    out
}

/// Escape text for use inside a JavaScript template literal.
pub fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
