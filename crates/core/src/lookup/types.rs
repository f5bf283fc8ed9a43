use serde::Deserialize;

/// One custom field record as returned by the students API.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomField {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Envelope around the custom field collection in the response body.
#[derive(Debug, Deserialize)]
pub struct CustomFieldsCollection {
    #[serde(rename = "customFields")]
    pub custom_fields: Vec<CustomField>,
}
