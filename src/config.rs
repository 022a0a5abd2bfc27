//! Parser configuration.

/// What a syntax error does once its diagnostic has been printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Hand the error back to the caller.
    #[default]
    Return,
    /// Terminate the process with exit code 1.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub error_policy: ErrorPolicy,
    /// Print diagnostics to stderr as they are raised
    pub report: bool,
}

impl ParserConfig {
    pub fn new(error_policy: ErrorPolicy) -> Self {
        ParserConfig {
            error_policy,
            report: true,
        }
    }

    /// No diagnostics on stderr, errors returned to the caller.
    pub fn quiet() -> Self {
        ParserConfig {
            error_policy: ErrorPolicy::Return,
            report: false,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::new(ErrorPolicy::Return)
    }
}
