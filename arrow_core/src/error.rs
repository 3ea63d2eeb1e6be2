use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Zones,
    Timing,
    Geometry,
    Sensor,
}

impl ConfigErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            "C1001" | "C1002" | "C1003" | "C1004" => Self::Zones,
            "C2001" | "C2002" | "C2003" | "C2004" => Self::Timing,
            "C3001" | "C3002" | "C3003" => Self::Geometry,
            "C4001" | "C4002" => Self::Sensor,
            _ => Self::Geometry,
        }
    }
}

/// Rejected game configuration. Raised before a session can be started.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{code}: {message}")]
pub struct ConfigError {
    pub code: &'static str,
    pub kind: ConfigErrorKind,
    pub message: String,
    pub field: Option<&'static str>,
}

impl ConfigError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: ConfigErrorKind::from_code(code),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }
}
