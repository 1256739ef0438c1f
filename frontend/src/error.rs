use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Connectivity(String),

    #[error("{message}")]
    Request { status: u16, message: String },
}

impl ApiError {
    /// Builds a request error from a non-2xx response body, preferring the
    /// server's own `message` (or `error`) field when the body is JSON.
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                ["message", "error"].iter().find_map(|key| {
                    json.get(*key)
                        .and_then(|v| v.as_str())
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                })
            });

        ApiError::Request {
            status,
            message: server_message
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
        }
    }

    pub fn unexpected_body(status: u16) -> Self {
        ApiError::Request {
            status,
            message: "Unexpected response from the server.".to_string(),
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Select the account to transfer from.")]
    MissingSource,
    #[error("Choose where the money should go.")]
    MissingDestination,
    #[error("Enter a name for the new account.")]
    MissingNewAccountName,
    #[error("Enter the recipient's name.")]
    MissingRecipient,
    #[error("Amount must be a positive number.")]
    InvalidAmount,
    #[error("Select a vendor or create a new one.")]
    MissingVendor,
    #[error("New vendors need a name and an email.")]
    IncompleteVendor,
    #[error("Select the invoice being paid.")]
    MissingInvoice,
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
}
