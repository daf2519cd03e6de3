//! UI state - presentation state separate from domain data

/// Which part of a resource panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Form,
}

/// Result of the start-up health check
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Offline(String),
}
