use thiserror::Error;

#[derive(Debug, Error)]
pub enum WooError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-2xx response whose body is reported as an excerpt.
    #[error("WooCommerce API error {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Non-2xx response carrying a WooCommerce error `message`. Displays as
    /// the bare remote message.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("invalid product id \"{0}\"")]
    InvalidProductId(String),
}
