//! Model and options survive a JSON round-trip.

use keyhole::codec::{ReadOptions, WriteOptions};

use crate::helpers::document_fixtures::full_document;

#[test]
fn test_model_serializes_to_json_and_back() {
    let kml = full_document();
    let json = serde_json::to_string(&kml).unwrap();
    let back: keyhole::Kml = serde_json::from_str(&json).unwrap();
    assert_eq!(back, kml);
}

#[test]
fn test_options_fill_missing_fields_with_defaults() {
    let write: WriteOptions = serde_json::from_str(r#"{"indent": null}"#).unwrap();
    assert_eq!(
        write,
        WriteOptions {
            indent: None,
            ..WriteOptions::default()
        }
    );
    let read: ReadOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(read, ReadOptions::default());
}
