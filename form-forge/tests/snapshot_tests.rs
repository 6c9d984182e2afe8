//! Snapshot tests for generated Lightning output.
//!
//! These tests use insta to capture and verify the exact generated documents.
//! Run `cargo insta review` to review and accept snapshot changes.

use form_forge::{
    generate, DataTableColumn, FieldType, FormComponent, GeneratorConfig, Variant, Width,
};

fn contact_form() -> Vec<FormComponent> {
    let heading = FormComponent::new(FieldType::SectionHeading, "", "Contact Details");

    let mut full_name = FormComponent::new(FieldType::Text, "fullName", "Full name");
    full_name.required = Some(true);
    full_name.placeholder = Some("Jane Doe".into());
    full_name.variant = Some(Variant::Standard);
    full_name.width = Width::new(6);
    full_name.max_length = Some(80);

    let mut email = FormComponent::new(FieldType::Email, "email", "Email");
    email.required = Some(true);
    email.width = Width::new(6);
    email.help_text = Some("We never share it".into());

    let mut topic = FormComponent::new(FieldType::Dropdown, "topic", "Topic");
    topic.options = Some(vec!["Sales".into(), "Support".into()]);

    let mut message = FormComponent::new(FieldType::Textarea, "message", "Message");
    message.placeholder = Some("How can we help?".into());
    message.min_length = Some(10);
    message.max_length = Some(500);

    let subscribe = FormComponent::new(FieldType::Checkbox, "subscribe", "Subscribe");

    vec![heading, full_name, email, topic, message, subscribe]
}

fn static_content() -> Vec<FormComponent> {
    let mut logo = FormComponent::new(FieldType::Image, "", "Logo");
    logo.src = Some("https://example.com/logo.png".into());
    logo.alt = Some("Logo".into());

    let mut intro = FormComponent::new(FieldType::RichText, "intro", "Intro");
    intro.value = Some("<p>Welcome</p>".into());

    let mut orders = FormComponent::new(FieldType::DataTable, "orders", "Orders");
    orders.width = Width::new(8);
    orders.columns = Some(vec![
        DataTableColumn::new("Order", "orderNo"),
        DataTableColumn::new("Total", "total"),
    ]);

    vec![logo, intro, orders]
}

// =============================================================================
// Input Forms
// =============================================================================

#[test]
fn snapshot_contact_form() {
    let form = generate(&contact_form(), &GeneratorConfig::default());
    insta::assert_snapshot!("contact_form_markup", form.markup);
    insta::assert_snapshot!("contact_form_script", form.script);
}

// =============================================================================
// Static Content
// =============================================================================

#[test]
fn snapshot_static_content() {
    let config = GeneratorConfig::new().with_class_name("OrderForm");
    let form = generate(&static_content(), &config);
    insta::assert_snapshot!("static_content_markup", form.markup);
    insta::assert_snapshot!("static_content_script", form.script);
}
