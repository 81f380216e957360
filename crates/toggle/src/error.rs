#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// A selector resolved to no element.
    ElementNotFound { selector: String },
    /// The host rejected a mutation or listener registration.
    Host(String),
    /// Configuration document could not be parsed.
    Config(String),
}

impl ToggleError {
    pub fn not_found(selector: impl Into<String>) -> Self {
        ToggleError::ElementNotFound {
            selector: selector.into(),
        }
    }
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::ElementNotFound { selector } => {
                write!(f, "no element matches selector `{selector}`")
            }
            ToggleError::Host(msg) => write!(f, "host error: {msg}"),
            ToggleError::Config(msg) => write!(f, "invalid toggle config: {msg}"),
        }
    }
}

impl std::error::Error for ToggleError {}
