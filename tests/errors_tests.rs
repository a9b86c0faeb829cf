use landingdesk::errors::{LandingDeskError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = LandingDeskError::not_found("Page '42' not found");

        assert!(matches!(error, LandingDeskError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("Page '42' not found"));
        assert_eq!(error.code(), "E001");
    }

    #[test]
    fn test_validation_error() {
        let error = LandingDeskError::validation("Title is required");

        assert!(matches!(error, LandingDeskError::Validation(_)));
        assert_eq!(error.format_simple(), "Validation Error: Title is required");
        assert_eq!(error.message(), "Title is required");
    }

    #[test]
    fn test_external_service_error() {
        let error = LandingDeskError::external_service("model unavailable");
        assert_eq!(error.error_type(), "External Service Error");
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_colored_output_contains_code_and_message() {
        let error = LandingDeskError::storage_operation("disk full");
        let colored = error.format_colored();
        assert!(colored.contains("E004"));
        assert!(colored.contains("disk full"));
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: LandingDeskError = io.into();
        assert!(matches!(error, LandingDeskError::FileOperation(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let error: LandingDeskError = json_err.into();
        assert!(matches!(error, LandingDeskError::Serialization(_)));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let error: LandingDeskError = toml_err.into();
        assert!(matches!(error, LandingDeskError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/landingdesk.json")?)
        }
        let error = read_missing().unwrap_err();
        assert_eq!(error.code(), "E005");
        assert!(error.source().is_none());
    }
}
