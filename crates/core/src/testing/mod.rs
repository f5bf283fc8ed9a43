//! Testing utilities and mock implementations.
//!
//! Provides a mock [`FieldSource`](crate::lookup::FieldSource) so pipeline
//! tests can run against a temp directory without a real API.

mod mock_field_source;

pub use mock_field_source::MockFieldSource;
