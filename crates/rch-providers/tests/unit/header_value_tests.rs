//! Tests for header values produced at invocation time

use std::collections::BTreeMap;
use std::sync::Arc;

use rch_domain::ports::{AnnotationInspector, ClientProxy, FillerPlugin, HeaderProvider};
use rch_domain::{Error, HeaderParam, InterfaceDescriptor, MethodDescriptor};
use rch_providers::{AnnotationFillerPlugin, DefaultMethodTable};
use serde_json::json;

fn bind(
    plugin: &AnnotationFillerPlugin,
    header: HeaderParam,
    proxy: &Arc<dyn ClientProxy>,
) -> Arc<dyn HeaderProvider> {
    let descriptor = InterfaceDescriptor::new("demo.Orders").with_method(
        MethodDescriptor::new("find")
            .with_parameters(["String"])
            .with_header(header),
    );
    let target = descriptor.methods().remove(0);
    plugin
        .bind(&target, &descriptor, proxy)
        .expect("bind succeeds")
        .expect("provider bound")
}

fn properties(entries: &[(&str, &str)]) -> Arc<BTreeMap<String, String>> {
    Arc::new(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_multiple_literal_values_are_kept_in_order() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::with_values("Accept", ["application/json", "text/plain"]),
        &proxy,
    );

    let headers = provider.headers(&[]).expect("headers computed");
    assert_eq!(headers.values("accept"), vec!["application/json", "text/plain"]);
}

#[test]
fn test_compute_method_receives_header_name_and_arguments() {
    let proxy = DefaultMethodTable::new()
        .with_method("correlation", |request| {
            let order = request
                .arguments
                .first()
                .and_then(|v| v.as_str())
                .unwrap_or("none");
            Ok(vec![format!("{}:{order}", request.header_name)])
        })
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("X-Correlation", "{correlation}"),
        &proxy,
    );

    let headers = provider
        .headers(&[json!("order-7")])
        .expect("headers computed");
    assert_eq!(headers.first("X-Correlation"), Some("X-Correlation:order-7"));
}

#[test]
fn test_property_value_is_resolved() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let plugin =
        AnnotationFillerPlugin::with_properties(properties(&[("api.version", "v2")]), 0);
    let provider = bind(&plugin, HeaderParam::new("X-Api-Version", "${api.version}"), &proxy);

    let headers = provider.headers(&[]).expect("headers computed");
    assert_eq!(headers.first("X-Api-Version"), Some("v2"));
}

#[test]
fn test_missing_property_fails_required_header() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let plugin = AnnotationFillerPlugin::with_properties(properties(&[]), 0);
    let provider = bind(&plugin, HeaderParam::new("X-Api-Version", "${api.version}"), &proxy);

    let error = provider.headers(&[]).expect_err("required header fails");
    match error {
        Error::HeaderComputation { header, .. } => assert_eq!(header, "X-Api-Version"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_property_skips_optional_header() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("X-Api-Version", "${api.version}").optional(),
        &proxy,
    );

    let headers = provider.headers(&[]).expect("optional header is skipped");
    assert!(headers.is_empty());
}

#[test]
fn test_failing_compute_method_fails_required_header() {
    let proxy = DefaultMethodTable::new()
        .with_method("token", |_| Err("token service unavailable".into()))
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("Authorization", "{token}"),
        &proxy,
    );

    let error = provider.headers(&[]).expect_err("required header fails");
    assert!(matches!(error, Error::HeaderComputation { .. }));
    assert!(error.to_string().contains("Authorization"));
}

#[test]
fn test_failing_compute_method_skips_optional_header() {
    let proxy = DefaultMethodTable::new()
        .with_method("token", |_| Err("token service unavailable".into()))
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("Authorization", "{token}").optional(),
        &proxy,
    );

    let headers = provider.headers(&[]).expect("optional header is skipped");
    assert!(!headers.contains("Authorization"));
}

#[test]
fn test_empty_computed_values_skip_header() {
    let proxy = DefaultMethodTable::new()
        .with_method("nothing", |_| Ok(Vec::new()))
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("X-Nothing", "{nothing}"),
        &proxy,
    );

    let headers = provider.headers(&[]).expect("headers computed");
    assert!(headers.is_empty());
}

#[test]
fn test_provider_replaces_existing_header() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("X-Source", "annotation"),
        &proxy,
    );

    let mut headers = rch_domain::HeaderMap::try_from([("x-source", vec!["caller"])]).unwrap();
    provider
        .add_headers(&[], &mut headers)
        .expect("headers added");
    assert_eq!(headers.values("X-Source"), vec!["annotation"]);
}

#[test]
fn test_computed_value_with_line_break_fails_required_header() {
    let proxy = DefaultMethodTable::new()
        .with_value("token", "abc\r\nInjected: evil")
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("Authorization", "{token}"),
        &proxy,
    );

    let error = provider.headers(&[]).expect_err("injected value is rejected");
    match error {
        Error::HeaderComputation { header, message, .. } => {
            assert_eq!(header, "Authorization");
            assert!(message.contains("invalid header value"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_computed_value_with_line_break_skips_optional_header() {
    let proxy = DefaultMethodTable::new()
        .with_value("token", "abc\nInjected: evil")
        .into_proxy();
    let provider = bind(
        &AnnotationFillerPlugin::new(),
        HeaderParam::new("Authorization", "{token}").optional(),
        &proxy,
    );

    let headers = provider.headers(&[]).expect("optional header is skipped");
    assert!(headers.is_empty());
}

#[test]
fn test_property_value_with_line_break_fails_required_header() {
    let proxy = DefaultMethodTable::new().into_proxy();
    let plugin = AnnotationFillerPlugin::with_properties(
        properties(&[("api.version", "v2\r\nInjected: evil")]),
        0,
    );
    let provider = bind(&plugin, HeaderParam::new("X-Api-Version", "${api.version}"), &proxy);

    let error = provider.headers(&[]).expect_err("injected property is rejected");
    assert!(matches!(error, Error::HeaderComputation { .. }));
    assert!(error.to_string().contains("X-Api-Version"));
}
