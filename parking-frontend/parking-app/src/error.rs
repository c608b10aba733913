use std::{error, fmt::Display};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("Can't search an empty string")]
    EmptyString,
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("DOM {0}")]
    Dom(String),
    #[error("Invalid UI config {0}")]
    Config(String),
    #[error("Template {0}")]
    Template(String),
}

/// This error type implements From's for the non cloneable error types and keeps them behind an `Rc`
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "hydrate")]
    GlooError(std::rc::Rc<gloo_net::Error>),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(value: minijinja::Error) -> Self {
        Self::Template(value.to_string())
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(std::rc::Rc::new(value))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(serde) => Self::Json(serde.to_string()),
            other => Self::SystemError(other.into()),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "hydrate")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
