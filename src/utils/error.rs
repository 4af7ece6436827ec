use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("{entity} does not implement `{capability}`")]
    NotImplemented {
        entity: String,
        capability: &'static str,
    },

    #[error("Unknown variant kind '{kind}' (known: {known})")]
    UnknownVariant { kind: String, known: String },

    #[error("Animal {id} not found")]
    NotFound { id: u64 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolidError {
    pub fn not_implemented(entity: impl Into<String>, capability: &'static str) -> Self {
        Self::NotImplemented {
            entity: entity.into(),
            capability,
        }
    }

    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotImplemented { .. } => ErrorCategory::Contract,
            Self::UnknownVariant { .. } | Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::Validation { .. } | Self::Config { .. } | Self::TomlParse(_) => {
                ErrorCategory::Configuration
            }
            Self::Io(_) | Self::Serialization(_) | Self::Csv(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            // 呼叫抽象本身是程式錯誤
            ErrorCategory::Contract => ErrorSeverity::Critical,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotImplemented { entity, capability } => {
                format!("'{}' is an abstraction and cannot {}", entity, capability)
            }
            Self::UnknownVariant { kind, .. } => format!("There is no variant called '{}'", kind),
            Self::NotFound { id } => format!("No animal is stored under id {}", id),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Contract => "Register a concrete variant instead of the abstraction",
            ErrorCategory::Lookup => "Run `solid-kit kinds` to list the registered variants",
            ErrorCategory::Configuration => "Check the catalog file and command line arguments",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_is_critical_contract_error() {
        let err = SolidError::not_implemented("animal", "make_sound");
        assert_eq!(err.category(), ErrorCategory::Contract);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "animal does not implement `make_sound`");
    }

    #[test]
    fn test_lookup_errors_suggest_listing_kinds() {
        let err = SolidError::UnknownVariant {
            kind: "dragon".to_string(),
            known: "lion, mouse".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("kinds"));
        assert!(err.user_friendly_message().contains("dragon"));
    }
}
