//! HTML template rendering.

use crate::generator::ir::{ChoiceStyle, CommonAttrs, Control, FieldIr, FormIr, TextConstraints};
use crate::generator::traits::GeneratorConfig;

const ITEM_INDENT: &str = "                ";
const CONTROL_INDENT: &str = "                    ";
const ATTR_INDENT: &str = "                        ";

pub(super) fn render(form: &FormIr, config: &GeneratorConfig) -> String {
    let blocks: Vec<String> = form.fields.iter().map(render_field).collect();

    let mut out = String::new();
    out.push_str("<template>\n");
    out.push_str(&format!(
        "    <lightning-card title=\"{}\" icon-name=\"{}\">\n",
        escape_attr(&config.card_title),
        escape_attr(&config.card_icon)
    ));
    out.push_str("        <div class=\"slds-p-around_medium\">\n");
    out.push_str("            <lightning-layout multiple-rows=\"true\">\n");
    if !blocks.is_empty() {
        out.push_str(&blocks.join("\n\n"));
        out.push('\n');
    }
    out.push_str("            </lightning-layout>\n");
    out.push_str("            <div class=\"slds-m-top_medium\">\n");
    out.push_str("                <lightning-button\n");
    out.push_str("                    variant=\"brand\"\n");
    out.push_str(&format!(
        "                    label=\"{}\"\n",
        escape_attr(&config.submit_label)
    ));
    out.push_str("                    onclick={handleSubmit}\n");
    out.push_str("                ></lightning-button>\n");
    out.push_str("            </div>\n");
    out.push_str("        </div>\n");
    out.push_str("    </lightning-card>\n");
    out.push_str("</template>\n");
    out
}

fn render_field(field: &FieldIr) -> String {
    let body = match &field.control {
        Control::Input {
            input_type,
            common,
            text,
        } => {
            let mut attrs = vec![attr("type", input_type)];
            push_common(&mut attrs, common);
            push_text(&mut attrs, text);
            element("lightning-input", attrs)
        }
        Control::TextArea { common, text } => {
            let mut attrs = Vec::new();
            push_common(&mut attrs, common);
            push_text(&mut attrs, text);
            element("lightning-textarea", attrs)
        }
        Control::Choice {
            style: ChoiceStyle::Combobox,
            common,
            placeholder,
            options,
        } => {
            let mut attrs = Vec::new();
            push_common(&mut attrs, common);
            attrs.push("value={value}".to_string());
            if let Some(placeholder) = placeholder {
                attrs.push(attr("placeholder", placeholder));
            }
            attrs.push(format!("options={{{options}}}"));
            element("lightning-combobox", attrs)
        }
        Control::Choice {
            style: ChoiceStyle::RadioGroup,
            common,
            options,
            ..
        } => {
            let mut attrs = Vec::new();
            push_common(&mut attrs, common);
            attrs.push(format!("options={{{options}}}"));
            attrs.push("value={value}".to_string());
            element("lightning-radio-group", attrs)
        }
        Control::Image { src, alt } => format!(
            "{CONTROL_INDENT}<img src=\"{}\" alt=\"{}\" class=\"slds-image slds-image_responsive\">",
            escape_attr(src),
            escape_attr(alt)
        ),
        Control::RichText { value } => element(
            "lightning-formatted-rich-text",
            vec![format!("value={{{value}}}")],
        ),
        Control::DataTable { columns, data } => element(
            "lightning-datatable",
            vec![
                attr("key-field", "id"),
                format!("data={{{data}}}"),
                format!("columns={{{columns}}}"),
                "hide-checkbox-column".to_string(),
            ],
        ),
        Control::Heading { text } => format!(
            "{CONTROL_INDENT}<h2 class=\"slds-text-heading_medium slds-m-bottom_small\">{}</h2>",
            escape_text(text)
        ),
    };

    format!(
        "{ITEM_INDENT}<lightning-layout-item size=\"{}\" padding=\"horizontal-small\" class=\"slds-m-bottom_small\">\n{body}\n{ITEM_INDENT}</lightning-layout-item>",
        field.width
    )
}

/// A multi-line element with one attribute per line.
fn element(tag: &str, attrs: Vec<String>) -> String {
    let mut out = format!("{CONTROL_INDENT}<{tag}\n");
    for attr in attrs {
        out.push_str(ATTR_INDENT);
        out.push_str(&attr);
        out.push('\n');
    }
    out.push_str(&format!("{CONTROL_INDENT}></{tag}>"));
    out
}

fn push_common(attrs: &mut Vec<String>, common: &CommonAttrs) {
    attrs.push(attr("label", &common.label));
    attrs.push(attr("name", &common.name));
    if common.required {
        attrs.push("required".to_string());
    }
    if common.disabled {
        attrs.push("disabled".to_string());
    }
    if common.read_only {
        attrs.push("readonly".to_string());
    }
    if let Some(variant) = common.variant {
        attrs.push(attr("variant", variant.as_str()));
    }
    if let Some(help) = &common.help_text {
        attrs.push(attr("field-level-help", help));
    }
}

fn push_text(attrs: &mut Vec<String>, text: &TextConstraints) {
    if let Some(placeholder) = &text.placeholder {
        attrs.push(attr("placeholder", placeholder));
    }
    if let Some(min) = text.min_length {
        attrs.push(format!("min-length=\"{min}\""));
    }
    if let Some(max) = text.max_length {
        attrs.push(format!("max-length=\"{max}\""));
    }
    if let Some(pattern) = &text.pattern {
        attrs.push(attr("pattern", pattern));
    }
}

fn attr(name: &str, value: &str) -> String {
    format!("{name}=\"{}\"", escape_attr(value))
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
