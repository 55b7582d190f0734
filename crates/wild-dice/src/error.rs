//! Error types for dice parsing.

/// Errors that can occur while building dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The text is not valid dice notation.
    #[error("invalid dice expression: '{0}'")]
    InvalidExpression(String),

    /// A die must have at least one side.
    #[error("dice expression '{0}' has a zero-sided die")]
    ZeroSides(String),

    /// A multiplier or divisor of zero was given.
    #[error("dice expression '{0}' scales by zero")]
    ZeroScale(String),

    /// A count, side or scale exceeds the supported limits.
    #[error("dice expression '{0}' is too large")]
    TooLarge(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
