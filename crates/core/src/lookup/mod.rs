//! Custom field lookup against the school REST API.
//!
//! The [`FieldSource`] trait is the seam the pipeline depends on; the real
//! implementation is [`RestFieldClient`], which authenticates once with the
//! client-credentials grant and then resolves one custom field value per
//! school id. After the first successful resolution the field's remote id is
//! cached so later calls fetch that single field directly instead of
//! searching the whole collection by name.

mod client;
mod error;
mod selector;
mod traits;
mod types;

pub use client::RestFieldClient;
pub use error::{AuthError, LookupError};
pub use selector::FieldSelector;
pub use traits::FieldSource;
pub use types::{CustomField, CustomFieldsCollection};
