use thiserror::Error;

/// Failure reported by the identity provider for sign-in, sign-up or sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider refused the request (bad credentials, malformed input,
    /// duplicate account, throttling).
    #[error("{message}")]
    Rejected { code: String, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response from identity provider: {0}")]
    MalformedResponse(String),
}

impl AuthError {
    /// Build a rejection from a provider error code such as `EMAIL_EXISTS`
    /// or `WEAK_PASSWORD : Password should be at least 6 characters`.
    pub fn rejected(raw: &str) -> Self {
        let (code, detail) = match raw.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };

        let message = match code {
            "EMAIL_EXISTS" => "An account already exists for this email address.".to_string(),
            "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" => {
                "Invalid email or password.".to_string()
            }
            "INVALID_EMAIL" | "MISSING_EMAIL" => "That email address is not valid.".to_string(),
            "MISSING_PASSWORD" => "Please enter a password.".to_string(),
            "WEAK_PASSWORD" => detail
                .unwrap_or("Password should be at least 6 characters.")
                .to_string(),
            "USER_DISABLED" => "This account has been disabled.".to_string(),
            "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
                "Your session has expired. Please sign in again.".to_string()
            }
            "TOO_MANY_ATTEMPTS_TRY_LATER" => {
                "Too many attempts. Please wait a moment and try again.".to_string()
            }
            "OPERATION_NOT_ALLOWED" => {
                "Email and password sign-in is not enabled for this project.".to_string()
            }
            other => match detail {
                Some(detail) => format!("{other}: {detail}"),
                None => other.to_string(),
            },
        };

        AuthError::Rejected {
            code: code.to_string(),
            message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No identity gateway was constructed for this session.
    #[error("Authentication service is not ready. Please try again.")]
    GatewayUnavailable,

    #[error("missing build setting {0}")]
    MissingSetting(&'static str),

    #[error("unknown auth provider '{0}', expected 'firebase' or 'local'")]
    UnknownProvider(String),
}

/// Everything the Auth screen can show after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}
