//! Errors raised while talking to the game referee.

/// Problems reading the referee's input.
#[derive(Debug,thiserror::Error)]
pub enum InputError {
    /// The referee closed stdin, which is how a match ends.
    #[error("end of input")]
    EndOfInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not have the expected shape.
    #[error("malformed {what}: {reason}")]
    Malformed {
        /// Which line was being read.
        what: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    #[error("invalid integer {value:?} in {what}")]
    InvalidInteger {
        /// Which line was being read.
        what: &'static str,
        /// The offending token.
        value: String,
    },
}

/// Problems loading configuration overrides.
#[derive(Debug,thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Environment variable name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
