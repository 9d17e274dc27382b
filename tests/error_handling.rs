use gist_stars::error::{GistStarsError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = GistStarsError::NotFound("gist not found".to_string());
    assert_eq!(format!("{}", error), "Resource not found: gist not found");

    let error = GistStarsError::SchemaValidation("missing field `url`".to_string());
    assert_eq!(format!("{}", error), "Schema validation error: missing field `url`");

    let error = GistStarsError::Inaccessible("status 502".to_string());
    assert_eq!(format!("{}", error), "Inaccessible: status 502");

    let error = GistStarsError::AuthError("Bad credentials".to_string());
    assert_eq!(format!("{}", error), "Authentication error: Bad credentials");
}

#[test]
fn test_pretty_messages() {
    assert_eq!(
        GistStarsError::NotFound("gist not found".to_string()).pretty_message(),
        "gist not found"
    );
    assert_eq!(
        GistStarsError::SchemaValidation("x".to_string()).pretty_message(),
        "invalid response data"
    );
    assert_eq!(
        GistStarsError::InvalidResponse("x".to_string()).pretty_message(),
        "invalid response data"
    );
    assert_eq!(GistStarsError::AuthError("x".to_string()).pretty_message(), "auth required");
    assert_eq!(
        GistStarsError::EnvError("x".to_string()).pretty_message(),
        "improperly configured"
    );
    assert_eq!(GistStarsError::Inaccessible("x".to_string()).pretty_message(), "inaccessible");
}

#[test]
fn test_error_source() {
    let error = GistStarsError::NotFound("gist not found".to_string());
    assert!(error.source().is_none());

    let json_error = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
    let error: GistStarsError = json_error.into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    let error: GistStarsError = io_error.into();
    assert!(matches!(error, GistStarsError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: GistStarsError = json_error.into();
    assert!(matches!(error, GistStarsError::JsonError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<String> {
        Err(GistStarsError::NotFound("gist not found".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
