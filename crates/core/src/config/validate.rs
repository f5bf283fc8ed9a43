use super::{types::Config, ConfigError};

/// Validate configuration
///
/// Every required setting is checked so the operator sees the full list of
/// problems in one pass instead of fixing them one at a time.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.domain.trim().is_empty() {
        errors.push("no 'domain' value was found in the configuration");
    }
    if config.rest_api_client_id.trim().is_empty() {
        errors.push("no 'rest_api_client_id' value was found in the configuration");
    }
    if config.rest_api_client_secret.trim().is_empty() {
        errors.push("no 'rest_api_client_secret' value was found in the configuration");
    }
    if config.target_directory.as_os_str().is_empty() {
        errors.push("no 'target_directory' value was found in the configuration");
    }
    if config.custom_field_name.trim().is_empty() {
        errors.push("no 'custom_field_name' value was found in the configuration");
    }

    if !errors.is_empty() {
        return Err(ConfigError::ValidationError(errors.join("; ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid() -> Config {
        Config {
            domain: "https://school.example.com".to_string(),
            rest_api_client_id: "client".to_string(),
            rest_api_client_secret: "secret".to_string(),
            target_directory: PathBuf::from("/data/reports"),
            custom_field_name: "StudentName".to_string(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_validate_missing_domain_fails() {
        let mut config = valid();
        config.domain = String::new();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("'domain'"));
    }

    #[test]
    fn test_validate_reports_all_missing_values() {
        let config = Config {
            domain: String::new(),
            rest_api_client_id: String::new(),
            rest_api_client_secret: String::new(),
            target_directory: PathBuf::new(),
            custom_field_name: String::new(),
        };
        let err = validate_config(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'domain'"));
        assert!(message.contains("'rest_api_client_id'"));
        assert!(message.contains("'rest_api_client_secret'"));
        assert!(message.contains("'target_directory'"));
        assert!(message.contains("'custom_field_name'"));
    }

    #[test]
    fn test_validate_blank_field_name_fails() {
        let mut config = valid();
        config.custom_field_name = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
