//! Error Tests

use std::error::Error as _;

use rch_domain::Error;

#[test]
fn test_definition_error_names_factory_and_interface() {
    let error = Error::definition("acme::TokenFactory", "org.acme.Greeter", "constructor panicked");
    let message = error.to_string();

    assert!(message.contains("acme::TokenFactory"), "{message}");
    assert!(message.contains("org.acme.Greeter"), "{message}");
    assert_eq!(
        error.source().map(ToString::to_string),
        Some("constructor panicked".to_string())
    );
}

#[test]
fn test_startup_error_message() {
    let error = Error::startup("no header filler plugin registered");
    assert_eq!(
        error.to_string(),
        "Startup failure: no header filler plugin registered"
    );
}

#[test]
fn test_header_computation_with_source() {
    let io = std::io::Error::other("token service down");
    let error = Error::header_computation_with_source("Authorization", "compute failed", io);

    match &error {
        Error::HeaderComputation { header, source, .. } => {
            assert_eq!(header, "Authorization");
            assert!(source.is_some());
        }
        other => panic!("Expected HeaderComputation error, got {other:?}"),
    }
}
