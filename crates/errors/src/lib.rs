use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiringError {
    /// The decorated service did not produce the event manager the delegator expects.
    #[error("{0}")]
    ServiceNotFound(String),
    #[error("服务未找到: {id}")]
    NotFound { id: String },
    #[error("无效的服务: {0}")]
    InvalidService(String),
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("序列化错误: {0}")]
    Serialization(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type WiringResult<T> = Result<T, WiringError>;

impl WiringError {
    pub fn service_not_found<S: Into<String>>(msg: S) -> Self {
        Self::ServiceNotFound(msg.into())
    }
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }
    pub fn invalid_service<S: Into<String>>(msg: S) -> Self {
        Self::InvalidService(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    /// Short stable label for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            WiringError::ServiceNotFound(_) => "service_not_found",
            WiringError::NotFound { .. } => "not_found",
            WiringError::InvalidService(_) => "invalid_service",
            WiringError::Configuration(_) => "configuration",
            WiringError::Serialization(_) => "serialization",
            WiringError::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for WiringError {
    fn from(err: serde_json::Error) -> Self {
        WiringError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for WiringError {
    fn from(err: anyhow::Error) -> Self {
        WiringError::Internal(err.to_string())
    }
}
