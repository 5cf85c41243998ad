//! Tests for the annotation filler plugin binding rules

use std::sync::Arc;

use rch_domain::ports::{AnnotationInspector, ClientProxy, FillerPlugin};
use rch_domain::{Error, HeaderParam, InterfaceDescriptor, MethodDescriptor};
use rch_providers::{AnnotationFillerPlugin, DefaultMethodTable};

fn proxy() -> Arc<dyn ClientProxy> {
    DefaultMethodTable::new()
        .with_value("computeToken", "token-1")
        .into_proxy()
}

#[test]
fn test_method_without_headers_gets_no_provider() {
    let descriptor =
        InterfaceDescriptor::new("demo.Greeter").with_method(MethodDescriptor::new("greet"));
    let target = descriptor.target("greet").expect("declared method");

    let provider = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect("bind succeeds");

    assert!(provider.is_none());
}

#[test]
fn test_default_method_gets_no_provider() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("computeToken")
            .with_default_body()
            .with_header(HeaderParam::new("X-Ignored", "value")),
    );
    let target = descriptor.target("computeToken").expect("declared method");

    let provider = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect("bind succeeds");

    assert!(provider.is_none());
}

#[test]
fn test_method_header_is_bound() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet").with_header(HeaderParam::new("X-Source", "test")),
    );
    let target = descriptor.target("greet").expect("declared method");

    let provider = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect("bind succeeds")
        .expect("provider bound");

    assert_eq!(provider.target(), &target);
    let headers = provider.headers(&[]).expect("headers computed");
    assert_eq!(headers.first("X-Source"), Some("test"));
    assert_eq!(headers.len(), 1);
}

#[test]
fn test_method_header_overrides_interface_header() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter")
        .with_header(HeaderParam::new("X-Source", "interface"))
        .with_header(HeaderParam::new("X-Client", "greeter"))
        .with_method(
            MethodDescriptor::new("greet").with_header(HeaderParam::new("x-source", "method")),
        );
    let target = descriptor.target("greet").expect("declared method");

    let provider = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect("bind succeeds")
        .expect("provider bound");

    let headers = provider.headers(&[]).expect("headers computed");
    assert_eq!(headers.first("X-Source"), Some("method"));
    assert_eq!(headers.first("X-Client"), Some("greeter"));
    assert_eq!(headers.len(), 2);
}

#[test]
fn test_inherited_method_uses_parent_interface_headers() {
    let parent = Arc::new(
        InterfaceDescriptor::new("demo.Base")
            .with_header(HeaderParam::new("X-Base", "yes"))
            .with_method(MethodDescriptor::new("ping")),
    );
    let child = InterfaceDescriptor::new("demo.Child")
        .with_header(HeaderParam::new("X-Child", "yes"))
        .extending(parent);
    let target = child
        .methods()
        .into_iter()
        .find(|t| t.name() == "ping")
        .expect("inherited method");

    let provider = AnnotationFillerPlugin::new()
        .bind(&target, &child, &proxy())
        .expect("bind succeeds")
        .expect("provider bound");

    let headers = provider.headers(&[]).expect("headers computed");
    assert_eq!(headers.first("X-Base"), Some("yes"));
    assert!(!headers.contains("X-Child"));
}

#[test]
fn test_compute_value_must_be_alone() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet").with_header(HeaderParam::with_values(
            "X-Token",
            ["{computeToken}", "literal"],
        )),
    );
    let target = descriptor.target("greet").expect("declared method");

    let error = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect_err("mixed compute value is rejected");

    assert!(matches!(error, Error::InvalidAnnotation { .. }));
    assert!(error.to_string().contains("only value"));
}

#[test]
fn test_unknown_compute_method_is_rejected() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet").with_header(HeaderParam::new("X-Token", "{missing}")),
    );
    let target = descriptor.target("greet").expect("declared method");

    let error = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect_err("unknown method is rejected");

    assert!(matches!(error, Error::InvalidAnnotation { .. }));
    assert!(error.to_string().contains("missing"));
}

#[test]
fn test_duplicate_method_headers_are_rejected() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet")
            .with_header(HeaderParam::new("X-Source", "a"))
            .with_header(HeaderParam::new("x-source", "b")),
    );
    let target = descriptor.target("greet").expect("declared method");

    let error = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect_err("duplicate header is rejected");

    assert!(error.to_string().contains("more than once"));
}

#[test]
fn test_empty_values_are_rejected() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet")
            .with_header(HeaderParam::with_values("X-Empty", Vec::<String>::new())),
    );
    let target = descriptor.target("greet").expect("declared method");

    let result = AnnotationFillerPlugin::new().bind(&target, &descriptor, &proxy());

    assert!(matches!(result, Err(Error::InvalidAnnotation { .. })));
}

#[test]
fn test_malformed_header_name_is_rejected() {
    for name in ["X Bad", "X-Bad:Name", "X-Bad\r\n"] {
        let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
            MethodDescriptor::new("greet").with_header(HeaderParam::new(name, "ok")),
        );
        let target = descriptor.target("greet").expect("declared method");

        let error = AnnotationFillerPlugin::new()
            .bind(&target, &descriptor, &proxy())
            .expect_err("malformed name is rejected");

        assert!(matches!(error, Error::InvalidAnnotation { .. }), "{name:?}");
        assert!(error.to_string().contains("not a valid HTTP header name"));
    }
}

#[test]
fn test_literal_with_line_break_is_rejected() {
    let descriptor = InterfaceDescriptor::new("demo.Greeter").with_method(
        MethodDescriptor::new("greet")
            .with_header(HeaderParam::new("X-Source", "ok\r\nInjected: evil")),
    );
    let target = descriptor.target("greet").expect("declared method");

    let error = AnnotationFillerPlugin::new()
        .bind(&target, &descriptor, &proxy())
        .expect_err("injected literal is rejected");

    assert!(matches!(error, Error::InvalidAnnotation { .. }));
    assert!(error.to_string().contains("X-Source"));
}

#[test]
fn test_plugin_name_reflects_property_source() {
    let plain = AnnotationFillerPlugin::new();
    assert_eq!(plain.name(), "annotation");
    assert_eq!(plain.priority(), 0);

    let properties = std::collections::BTreeMap::<String, String>::new();
    let with_properties = AnnotationFillerPlugin::with_properties(Arc::new(properties), 10);
    assert_eq!(with_properties.name(), "annotation+properties");
    assert_eq!(with_properties.priority(), 10);
}
