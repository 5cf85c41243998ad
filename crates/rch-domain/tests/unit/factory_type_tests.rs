//! Tests for declared header factory types

use rch_domain::ports::HeaderFactory;
use rch_domain::{FactoryType, HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Default)]
struct EchoFactory;

impl HeaderFactory for EchoFactory {
    fn update(&self, _incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap {
        outgoing.clone()
    }
}

#[derive(Debug)]
struct NeedsTenant {
    tenant: String,
}

impl HeaderFactory for NeedsTenant {
    fn update(&self, _incoming: &HeaderMap, outgoing: &HeaderMap) -> HeaderMap {
        let mut headers = outgoing.clone();
        let tenant = HeaderValue::from_str(&self.tenant).expect("valid tenant");
        headers.insert(HeaderName::from_static("x-tenant"), [tenant]);
        headers
    }
}

#[test]
fn test_default_constructor_builds_declared_type() {
    let factory_type = FactoryType::of::<EchoFactory>();

    let factory = factory_type.construct().expect("default constructor");
    assert!(factory.is::<EchoFactory>());
    assert!(factory_type.name().ends_with("EchoFactory"));
}

#[test]
fn test_managed_type_cannot_be_constructed_directly() {
    let factory_type = FactoryType::managed::<NeedsTenant>();

    assert!(!factory_type.has_constructor());
    let error = factory_type.construct().expect_err("no constructor");
    assert!(error.to_string().contains("no accessible no-argument constructor"));
}

#[test]
fn test_failing_constructor_reports_cause() {
    let factory_type =
        FactoryType::with_constructor::<NeedsTenant, _>(|| Err("tenant not configured".into()));

    let error = factory_type.construct().expect_err("constructor fails");
    assert_eq!(error.to_string(), "tenant not configured");
}

#[test]
fn test_equality_is_type_identity() {
    let constructed = FactoryType::with_constructor(|| {
        Ok(NeedsTenant {
            tenant: "acme".to_string(),
        })
    });

    assert_eq!(constructed, FactoryType::managed::<NeedsTenant>());
    assert_ne!(constructed, FactoryType::of::<EchoFactory>());
}
