//! Error handling types

use thiserror::Error;

/// Boxed error used for failures raised by external collaborators
/// (constructors, default method bodies, injection containers)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the REST client header registry
#[derive(Error, Debug)]
pub enum Error {
    /// No usable header filler plugin could be selected at startup
    #[error("Startup failure: {message}")]
    Startup {
        /// Description of the startup failure
        message: String,
    },

    /// A header factory declared by a client interface could not be instantiated
    #[error("Failed to instantiate {factory}, the client header factory for {interface}")]
    Definition {
        /// Name of the declared factory type
        factory: String,
        /// Name of the client interface declaring the factory
        interface: String,
        /// The underlying construction failure
        #[source]
        source: BoxError,
    },

    /// Header annotations on a client method are malformed
    #[error("Invalid header annotation on {target}: {message}")]
    InvalidAnnotation {
        /// The method or interface carrying the annotation
        target: String,
        /// Description of the problem
        message: String,
    },

    /// A required header value could not be computed for an invocation
    #[error("Failed to compute header '{header}': {message}")]
    HeaderComputation {
        /// Header name
        header: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Dependency injection container failure
    #[error("Injection error: {message}")]
    Injection {
        /// Description of the injection failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Registry lifecycle error creation methods
impl Error {
    /// Create a startup failure
    pub fn startup<S: Into<String>>(message: S) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    /// Create a definition error naming the factory and the declaring interface
    pub fn definition<F, I, E>(factory: F, interface: I, source: E) -> Self
    where
        F: Into<String>,
        I: Into<String>,
        E: Into<BoxError>,
    {
        Self::Definition {
            factory: factory.into(),
            interface: interface.into(),
            source: source.into(),
        }
    }

    /// Create an invalid annotation error
    pub fn invalid_annotation<T: ToString, S: Into<String>>(target: T, message: S) -> Self {
        Self::InvalidAnnotation {
            target: target.to_string(),
            message: message.into(),
        }
    }
}

// Invocation-time error creation methods
impl Error {
    /// Create a header computation error
    pub fn header_computation<H: Into<String>, S: Into<String>>(header: H, message: S) -> Self {
        Self::HeaderComputation {
            header: header.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a header computation error with source
    pub fn header_computation_with_source<H, S, E>(header: H, message: S, source: E) -> Self
    where
        H: Into<String>,
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self::HeaderComputation {
            header: header.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an injection error
    pub fn injection<S: Into<String>>(message: S) -> Self {
        Self::Injection {
            message: message.into(),
            source: None,
        }
    }

    /// Create an injection error with source
    pub fn injection_with_source<S: Into<String>, E: Into<BoxError>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Injection {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: Into<BoxError>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: Into<BoxError>>(message: S, source: E) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
