use super::error::LookupError;
use super::types::CustomField;

/// Picks the right record out of a custom field collection.
///
/// The first time a record is matched by name, its id is cached; from then
/// on the client requests that single field directly and the selector takes
/// the returned singleton as-is. The cache is write-once for the lifetime of
/// the selector.
#[derive(Debug, Default)]
pub struct FieldSelector {
    field_id: Option<i64>,
}

impl FieldSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached remote id of the custom field, if resolved yet.
    pub fn field_id(&self) -> Option<i64> {
        self.field_id
    }

    /// Select the record for the configured field from `fields`.
    ///
    /// With a cached id the collection is the targeted fetch result and the
    /// first record wins. Without one, the collection is searched
    /// case-insensitively by `name` and the id of the match is cached.
    pub fn select<'a>(
        &mut self,
        fields: &'a [CustomField],
        name: &str,
        path: &str,
    ) -> Result<&'a CustomField, LookupError> {
        if self.field_id.is_some() {
            return fields.first().ok_or_else(|| LookupError::EmptyField {
                path: path.to_string(),
            });
        }

        let wanted = name.to_lowercase();
        let found = fields
            .iter()
            .find(|f| f.name.to_lowercase() == wanted)
            .ok_or_else(|| LookupError::FieldNotFound {
                path: path.to_string(),
                name: name.to_string(),
            })?;

        self.field_id = Some(found.id);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: i64, name: &str, value: &str) -> CustomField {
        CustomField {
            id,
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn test_select_by_name_caches_id() {
        let mut selector = FieldSelector::new();
        let fields = vec![field(1, "House", "Red"), field(7, "StudentName", "Jane")];

        let selected = selector
            .select(&fields, "StudentName", "http://x")
            .unwrap();
        assert_eq!(selected.id, 7);
        assert_eq!(selector.field_id(), Some(7));
    }

    #[test]
    fn test_select_by_name_is_case_insensitive() {
        let mut selector = FieldSelector::new();
        let fields = vec![field(7, "studentname", "Jane")];

        let selected = selector
            .select(&fields, "StudentName", "http://x")
            .unwrap();
        assert_eq!(selected.id, 7);
    }

    #[test]
    fn test_select_not_found() {
        let mut selector = FieldSelector::new();
        let fields = vec![field(1, "House", "Red")];

        let result = selector.select(&fields, "StudentName", "http://x");
        assert!(matches!(result, Err(LookupError::FieldNotFound { .. })));
        assert_eq!(selector.field_id(), None);
    }

    #[test]
    fn test_cached_id_skips_name_search() {
        let mut selector = FieldSelector::new();
        let first = vec![field(7, "StudentName", "Jane")];
        selector.select(&first, "StudentName", "http://x").unwrap();

        // The targeted fetch returns a singleton whose name no longer
        // matters; the selector must not search by name again.
        let second = vec![field(7, "renamed-on-remote", "John")];
        let selected = selector
            .select(&second, "StudentName", "http://x")
            .unwrap();
        assert_eq!(selected.value.as_deref(), Some("John"));
    }

    #[test]
    fn test_cached_id_is_never_overwritten() {
        let mut selector = FieldSelector::new();
        let first = vec![field(7, "StudentName", "Jane")];
        selector.select(&first, "StudentName", "http://x").unwrap();

        let second = vec![field(99, "StudentName", "John")];
        selector.select(&second, "StudentName", "http://x").unwrap();
        assert_eq!(selector.field_id(), Some(7));
    }

    #[test]
    fn test_cached_id_with_empty_collection() {
        let mut selector = FieldSelector::new();
        selector
            .select(&[field(7, "StudentName", "Jane")], "StudentName", "http://x")
            .unwrap();

        let result = selector.select(&[], "StudentName", "http://x");
        assert!(matches!(result, Err(LookupError::EmptyField { .. })));
    }
}
