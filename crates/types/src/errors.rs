use thiserror::Error;

// ============================================================================
// Main Error Enum
// ============================================================================

/// Error enum shared by the Pulse crates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PulseError {
    // ========================================================================
    // Contract Errors
    // ========================================================================

    /// Category name outside the closed set
    #[error("Unknown token category '{value}': expected one of new-pairs, final-stretch, migrated")]
    UnknownCategory { value: String },

    /// Sort field name not recognised
    #[error("Unknown sort field '{value}'")]
    UnknownSortField { value: String },

    /// Preset name not recognised
    #[error("Unknown preset '{value}': expected P1, P2 or P3")]
    UnknownPreset { value: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    /// Invalid parameter
    #[error("Invalid parameter '{parameter}': got '{value}', expected '{expected}'")]
    InvalidParameter { parameter: String, value: String, expected: String },

    /// Invalid configuration
    #[error("Invalid configuration for '{component}': {reason}")]
    InvalidConfiguration { component: String, reason: String },

    // ========================================================================
    // IO Errors
    // ========================================================================

    /// Serialization or parse failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem failure
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl PulseError {
    /// Create an unknown category error
    pub fn unknown_category(value: &str) -> Self {
        Self::UnknownCategory {
            value: value.to_string(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, value: &str, expected: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(component: &str, reason: &str) -> Self {
        Self::InvalidConfiguration {
            component: component.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse_error(message: &str) -> Self {
        Self::Serialization {
            message: format!("Parse error: {}", message),
        }
    }
}

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        PulseError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PulseError::unknown_category("graduated");
        assert_eq!(
            err.to_string(),
            "Unknown token category 'graduated': expected one of new-pairs, final-stretch, migrated"
        );

        let err = PulseError::invalid_parameter("count", "0", "greater than 0");
        assert!(err.to_string().contains("'count'"));
    }
}
