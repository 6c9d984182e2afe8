//! Palette of field types offered to the editor.

use serde::Serialize;

use crate::field::FieldType;

/// One palette entry: display name, icon and the type tag it instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Display name shown under the icon
    pub name: &'static str,
    /// Icon identifier from the editor's icon set
    pub icon: &'static str,
    /// Wire tag of the field type
    pub tag: &'static str,
}

impl CatalogEntry {
    /// The field type this entry creates.
    pub fn field_type(&self) -> FieldType {
        FieldType::from_tag(self.tag)
    }
}

static ENTRIES: [CatalogEntry; 18] = [
    entry("Text Input", "case-sensitive", "text"),
    entry("Email", "mail", "email"),
    entry("Password", "key-round", "password"),
    entry("Number", "hash", "number"),
    entry("Text Area", "message-square", "textarea"),
    entry("Dropdown", "chevron-down", "dropdown"),
    entry("Checkbox", "check-square", "checkbox"),
    entry("Date", "calendar-days", "date"),
    entry("Radio Group", "circle-dot", "radiogroup"),
    entry("Switch", "toggle-right", "switch"),
    entry("Phone", "phone", "tel"),
    entry("URL", "link", "url"),
    entry("Search", "search", "search"),
    entry("File Upload", "upload", "file"),
    entry("Image", "image", "image"),
    entry("Rich Text", "pilcrow", "richtext"),
    entry("Data Table", "table", "datatable"),
    entry("Section Heading", "heading", "section-heading"),
];

const fn entry(name: &'static str, icon: &'static str, tag: &'static str) -> CatalogEntry {
    CatalogEntry { name, icon, tag }
}

/// All palette entries, in display order.
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}

/// Find the palette entry for a wire tag.
pub fn find(tag: &str) -> Option<&'static CatalogEntry> {
    ENTRIES.iter().find(|e| e.tag == tag)
}

/// Find the palette entry for a field type. Unsupported types have none.
pub fn entry_for(field_type: &FieldType) -> Option<&'static CatalogEntry> {
    find(field_type.as_str()).filter(|_| field_type.is_supported())
}
