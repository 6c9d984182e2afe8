//! End-to-end generation tests over the public API.

use form_forge::{
    emit_markup, emit_script, generate, ComponentPatch, DataTableColumn, FieldType, FormComponent,
    FormSchema, GeneratorConfig, Width,
};

fn favorite_color() -> FormComponent {
    let mut c = FormComponent::new(FieldType::Dropdown, "favoriteColor", "Favorite Color");
    c.options = Some(vec!["Red".into(), "Blue".into()]);
    c
}

/// Names inside `{...}` bindings that end in one of the generated suffixes.
fn referenced_symbols(markup: &str) -> Vec<String> {
    markup
        .split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name.to_string()))
        .filter(|name| {
            ["Options", "Value", "Columns", "Data"]
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
        .collect()
}

fn declares(script: &str, symbol: &str) -> bool {
    script.contains(&format!("\n    {symbol} = "))
}

// =============================================================================
// Dropdown Scenario
// =============================================================================

#[test]
fn test_dropdown_generates_paired_options() {
    let config = GeneratorConfig::default();
    let form = generate(&[favorite_color()], &config);

    assert!(form.script.contains(concat!(
        "    favoriteColorOptions = [\n",
        "        {\n",
        "            \"label\": \"Red\",\n",
        "            \"value\": \"Red\"\n",
        "        },\n",
        "        {\n",
        "            \"label\": \"Blue\",\n",
        "            \"value\": \"Blue\"\n",
        "        }\n",
        "    ];\n",
    )));

    assert_eq!(form.markup.matches("<lightning-combobox").count(), 1);
    assert!(form.markup.contains("options={favoriteColorOptions}"));
    assert_eq!(form.markup.matches("<lightning-layout-item").count(), 1);
    assert_eq!(form.markup.matches("<lightning-button").count(), 1);
}

#[test]
fn test_emit_functions_match_generate() {
    let config = GeneratorConfig::default();
    let components = [favorite_color()];
    let form = generate(&components, &config);

    assert_eq!(emit_markup(&components, &config), form.markup);
    assert_eq!(emit_script(&components, &config), form.script);
}

// =============================================================================
// Unsupported Types
// =============================================================================

#[test]
fn test_unsupported_type_is_skipped_without_affecting_others() {
    let config = GeneratorConfig::default();
    let mut odd = FormComponent::new(FieldType::from_tag("signature"), "sig", "Sign here");
    odd.options = Some(vec!["x".into()]);

    let with_odd = generate(&[favorite_color(), odd.clone()], &config);
    let without = generate(&[favorite_color()], &config);

    assert_eq!(with_odd, without);
    assert!(!with_odd.markup.contains("Sign here"));
    assert!(!with_odd.script.contains("sigOptions"));
}

// =============================================================================
// Consistency
// =============================================================================

#[test]
fn test_every_reference_is_declared_for_all_types() {
    let mut schema = FormSchema::new();
    for ty in FieldType::ALL.iter() {
        schema.create(ty.clone(), None);
    }
    let rich = schema.create(FieldType::RichText, Some("Intro")).id;
    schema.update(rich, ComponentPatch::new().with_field_name("intro"));

    let form = generate(schema.components(), &GeneratorConfig::default());
    let symbols = referenced_symbols(&form.markup);

    assert!(symbols.contains(&"newDropdownOptions".to_string()));
    assert!(symbols.contains(&"newRadiogroupOptions".to_string()));
    assert!(symbols.contains(&"dataTableColumns".to_string()));
    assert!(symbols.contains(&"dataTableData".to_string()));
    assert!(symbols.contains(&"introValue".to_string()));

    for symbol in &symbols {
        assert!(declares(&form.script, symbol), "{symbol} is not declared");
    }
    let declarations = form.script.matches(" = ").count();
    assert_eq!(declarations, symbols.len());
}

#[test]
fn test_data_table_scenario() {
    let mut table = FormComponent::new(FieldType::DataTable, "contacts", "Contacts");
    table.columns = Some(vec![
        DataTableColumn::new("Name", "name"),
        DataTableColumn::new("Phone", "phone"),
    ]);

    let form = generate(&[table], &GeneratorConfig::default());

    assert!(form.markup.contains("data={contactsData}"));
    assert!(form.markup.contains("columns={contactsColumns}"));
    assert!(form.markup.contains("key-field=\"id\""));
    assert!(form.script.contains("\"fieldName\": \"phone\""));
    assert_eq!(form.script.matches("\"name\": \"Sample Data").count(), 3);
    assert!(form.script.contains("\"id\": 2,"));
    assert!(!form.script.contains("\"id\": 3"));
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn test_attributes_follow_visibility() {
    let mut schema = FormSchema::new();
    let name = schema.create(FieldType::Text, Some("Name")).id;
    schema.update(
        name,
        ComponentPatch::new()
            .with_required(true)
            .with_placeholder("Jane")
            .with_length_bounds(Some(2), Some(40))
            .with_pattern("[A-Za-z ]+")
            .with_help_text("Your full name")
            .with_width(Width::clamped(6)),
    );

    let phone = schema.create(FieldType::Tel, Some("Phone")).id;
    schema.update(
        phone,
        ComponentPatch::new()
            .with_placeholder("555")
            .with_pattern("[0-9]+"),
    );

    let markup = emit_markup(schema.components(), &GeneratorConfig::default());

    assert!(markup.contains("size=\"6\""));
    assert!(markup.contains("                        required\n"));
    assert!(markup.contains("placeholder=\"Jane\""));
    assert!(markup.contains("min-length=\"2\""));
    assert!(markup.contains("max-length=\"40\""));
    assert!(markup.contains("pattern=\"[A-Za-z ]+\""));
    assert!(markup.contains("field-level-help=\"Your full name\""));

    assert!(markup.contains("type=\"tel\""));
    assert!(!markup.contains("placeholder=\"555\""));
    assert!(!markup.contains("pattern=\"[0-9]+\""));
}

#[test]
fn test_generator_config_is_applied() {
    let config = GeneratorConfig::new()
        .with_class_name("ContactForm")
        .with_card_title("Contact \"Us\"")
        .with_submit_label("Send");

    let form = generate(&[], &config);
    assert!(form.markup.contains("title=\"Contact &quot;Us&quot;\""));
    assert!(form.markup.contains("label=\"Send\""));
    assert!(form.script.contains("class ContactForm extends LightningElement"));
}

#[test]
fn test_output_is_deterministic() {
    let mut schema = FormSchema::new();
    schema.create(FieldType::Dropdown, Some("Size"));
    schema.create(FieldType::DataTable, None);
    schema.create(FieldType::RichText, None);

    let config = GeneratorConfig::default();
    let first = generate(schema.components(), &config);
    let second = generate(schema.components(), &config);
    assert_eq!(first, second);
}
