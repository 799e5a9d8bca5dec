use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dalle_client::{DalleClient, DalleError, GeneratedImage, GenerationRequest};

// --- Request payload tests ---

#[test]
fn test_request_wire_format() {
    let req = GenerationRequest::new("A red apple");
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"prompt": "A red apple"}));
}

#[test]
fn test_request_preserves_unicode_prompt() {
    let req = GenerationRequest::new("ein roter Apfel 🍎");
    let json = serde_json::to_string(&req).unwrap();
    let back: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back["prompt"], "ein roter Apfel 🍎");
}

// --- Save-to-file tests ---

#[test]
fn test_save_roundtrip_exact_bytes() {
    // spec'd example: base64 of 0x01 0x02 0x03 ends up byte-for-byte on disk
    let encoded = STANDARD.encode([0x01u8, 0x02, 0x03]);
    let bytes = STANDARD.decode(&encoded).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated_image.jpeg");
    let saved = GeneratedImage::new(bytes).save_to(&path).unwrap();

    assert_eq!(std::fs::read(&saved).unwrap(), vec![0x01, 0x02, 0x03]);
}

#[test]
fn test_save_returns_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpeg");
    let saved = GeneratedImage::new(vec![0xFF]).save_to(&path).unwrap();
    assert!(saved.is_absolute());
}

#[test]
fn test_second_save_overwrites_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated_image.jpeg");

    GeneratedImage::new(vec![0x01, 0x02, 0x03, 0x04])
        .save_to(&path)
        .unwrap();
    GeneratedImage::new(vec![0xAA, 0xBB]).save_to(&path).unwrap();

    // last write wins, including truncation of the longer first image
    assert_eq!(std::fs::read(&path).unwrap(), vec![0xAA, 0xBB]);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_subdir").join("out.jpeg");
    let err = GeneratedImage::new(vec![0x01]).save_to(&path).unwrap_err();
    assert!(matches!(err, DalleError::Io(_)));
}

// --- Client construction ---

#[test]
fn test_client_normalizes_endpoint() {
    let client = DalleClient::new("https://host/api/v1/dalle/");
    assert_eq!(client.endpoint(), "https://host/api/v1/dalle");
}

#[tokio::test]
async fn test_empty_prompt_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated_image.jpeg");

    // unroutable endpoint: the empty prompt must be rejected before any I/O
    let client = DalleClient::new("http://127.0.0.1:1");
    let err = client.generate_to_file("", &path).await.unwrap_err();

    assert!(matches!(err, DalleError::EmptyPrompt));
    assert!(!path.exists());
}

// --- Error taxonomy display ---

#[test]
fn test_error_display() {
    let err = DalleError::Http {
        status: 502,
        body: "Bad Gateway".into(),
    };
    assert_eq!(err.to_string(), "backend returned HTTP 502: Bad Gateway");

    let err = DalleError::MissingPhoto(r#"{"error":"quota"}"#.into());
    assert_eq!(
        err.to_string(),
        r#"response missing 'photo' field, got: {"error":"quota"}"#
    );

    let err = DalleError::EmptyPrompt;
    assert_eq!(err.to_string(), "prompt must not be empty");

    let err = DalleError::Unexpected("connection pool poisoned".into());
    assert_eq!(err.to_string(), "unexpected error: connection pool poisoned");
}

#[test]
fn test_base64_error_classification() {
    let err: DalleError = STANDARD.decode("%%%").unwrap_err().into();
    assert!(matches!(err, DalleError::Base64(_)));
}

#[test]
fn test_json_error_classification() {
    let err: DalleError = serde_json::from_str::<serde_json::Value>("<html>")
        .unwrap_err()
        .into();
    assert!(matches!(err, DalleError::Json(_)));
}
