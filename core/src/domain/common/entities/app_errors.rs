use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation provider rejected the credential: {0}")]
    ProviderAuthError(String),

    #[error("Generation provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Malformed response from generation provider: {0}")]
    MalformedResponse(String),

    #[error("Generated plan violates dietary restrictions: {}", tokens.join(", "))]
    DietaryViolation { tokens: Vec<String> },

    #[error("Internal server error")]
    InternalServerError,
}
