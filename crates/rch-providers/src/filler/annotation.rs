//! Annotation filler plugin
//!
//! Builds header providers from header annotations. The effective headers of
//! a method are the annotations of its declaring interface, overridden by
//! same-named annotations on the method itself. Methods with a default body
//! run on the client side and never get a provider.

use std::sync::Arc;

use rch_domain::constants::DEFAULT_FILLER_PRIORITY;
use rch_domain::error::{Error, Result};
use rch_domain::ports::{
    AnnotationInspector, ClientProxy, FillerPlugin, HeaderProvider, PropertySource,
};
use rch_domain::{CallTarget, HeaderName, HeaderParam};

use super::expression::ValueExpression;
use super::header_filler::HeaderFiller;
use crate::header::AnnotatedHeaderProvider;

/// Filler plugin interpreting header annotations
#[derive(Clone)]
pub struct AnnotationFillerPlugin {
    priority: i32,
    properties: Option<Arc<dyn PropertySource>>,
}

impl AnnotationFillerPlugin {
    /// Plugin without a property source, at the default priority
    pub fn new() -> Self {
        Self {
            priority: DEFAULT_FILLER_PRIORITY,
            properties: None,
        }
    }

    /// Plugin resolving `${key}` values from `properties`
    pub fn with_properties(properties: Arc<dyn PropertySource>, priority: i32) -> Self {
        Self {
            priority,
            properties: Some(properties),
        }
    }

    fn effective_headers(
        target: &CallTarget,
        inspector: &dyn AnnotationInspector,
    ) -> Result<Vec<HeaderParam>> {
        let mut effective = inspector.interface_headers(target.declaring());
        ensure_unique(&effective, target.declaring())?;

        let method_level = inspector.method_headers(target);
        ensure_unique(&method_level, target)?;

        for header in method_level {
            match effective
                .iter_mut()
                .find(|existing| existing.name.eq_ignore_ascii_case(&header.name))
            {
                Some(existing) => *existing = header,
                None => effective.push(header),
            }
        }
        Ok(effective)
    }

    fn create_filler(
        &self,
        header: HeaderParam,
        target: &CallTarget,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<HeaderFiller> {
        if header.name.trim().is_empty() {
            return Err(Error::invalid_annotation(target, "header name must not be empty"));
        }
        if header.values.is_empty() {
            return Err(Error::invalid_annotation(
                target,
                format!("header '{}' declares no value", header.name),
            ));
        }

        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|_| {
            Error::invalid_annotation(
                target,
                format!("'{}' is not a valid HTTP header name", header.name),
            )
        })?;

        let expressions = header
            .values
            .iter()
            .map(|raw| {
                ValueExpression::parse(raw).map_err(|_| {
                    Error::invalid_annotation(
                        target,
                        format!("header '{}' has an invalid HTTP header value", header.name),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if expressions.len() > 1 && expressions.iter().any(ValueExpression::is_compute) {
            return Err(Error::invalid_annotation(
                target,
                format!(
                    "a computed value must be the only value of header '{}'",
                    header.name
                ),
            ));
        }
        for expression in &expressions {
            match expression {
                ValueExpression::Compute(method) if method.is_empty() => {
                    return Err(Error::invalid_annotation(
                        target,
                        format!("header '{}' names an empty compute method", header.name),
                    ));
                }
                ValueExpression::Compute(method) if !proxy.has_default_method(method) => {
                    return Err(Error::invalid_annotation(
                        target,
                        format!(
                            "compute method '{method}' for header '{}' is not a default method of the client",
                            header.name
                        ),
                    ));
                }
                ValueExpression::Property(key) if key.is_empty() => {
                    return Err(Error::invalid_annotation(
                        target,
                        format!("header '{}' names an empty property", header.name),
                    ));
                }
                _ => {}
            }
        }

        Ok(HeaderFiller::new(
            name,
            header.name,
            expressions,
            header.required,
            Arc::clone(proxy),
            self.properties.clone(),
        ))
    }
}

impl Default for AnnotationFillerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl FillerPlugin for AnnotationFillerPlugin {
    fn name(&self) -> &str {
        if self.properties.is_some() {
            "annotation+properties"
        } else {
            "annotation"
        }
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn bind(
        &self,
        target: &CallTarget,
        inspector: &dyn AnnotationInspector,
        proxy: &Arc<dyn ClientProxy>,
    ) -> Result<Option<Arc<dyn HeaderProvider>>> {
        if inspector.is_default_method(target) {
            return Ok(None);
        }

        let headers = Self::effective_headers(target, inspector)?;
        if headers.is_empty() {
            return Ok(None);
        }

        let fillers = headers
            .into_iter()
            .map(|header| self.create_filler(header, target, proxy))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Arc::new(AnnotatedHeaderProvider::new(
            target.clone(),
            fillers,
        ))))
    }
}

fn ensure_unique(headers: &[HeaderParam], owner: &impl ToString) -> Result<()> {
    for (i, header) in headers.iter().enumerate() {
        if headers[..i]
            .iter()
            .any(|earlier| earlier.name.eq_ignore_ascii_case(&header.name))
        {
            return Err(Error::invalid_annotation(
                owner.to_string(),
                format!("header '{}' is declared more than once", header.name),
            ));
        }
    }
    Ok(())
}
