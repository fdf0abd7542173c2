//! Fixed remediation messages for the connection diagnostic.
//!
//! Each failing step maps to one [`Diagnostic`] variant, and each variant to
//! one operator-facing guide. The guides are keyed by failure category only;
//! they never attempt to explain the underlying transport error.

use storesync_core::{DiagnosticResult, DEFAULT_API_VERSION};

/// Namespace the REST discovery document must declare for the store to be
/// usable.
pub const REQUIRED_NAMESPACE: &str = "wc/v3";

/// Longest response-body excerpt echoed back in messages and errors.
pub const BODY_EXCERPT_CHARS: usize = 200;

/// A diagnostic step that stopped the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The storefront root answered with a non-2xx status.
    SiteStatus { status: u16 },
    /// No HTTP response at all from the storefront root.
    SiteUnreachable,
    /// `/wp-json/` answered with a non-2xx status.
    DiscoveryStatus { status: u16 },
    /// `/wp-json/` could not be fetched or did not return JSON.
    DiscoveryUnavailable,
    /// The discovery document does not list [`REQUIRED_NAMESPACE`].
    NamespaceMissing { namespaces: Vec<String> },
    /// HTTP 401 from the products endpoint.
    InvalidCredentials,
    /// HTTP 404 from the products endpoint.
    ApiVersionNotFound { api_version: String },
    /// Any other non-2xx status from the products endpoint.
    CredentialStatus { status: u16, body_excerpt: String },
}

impl Diagnostic {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::SiteStatus { status } => format!(
                "The store responded with HTTP {status}.\n\n\
                 The site may be down for maintenance or blocking automated requests.\n\
                 Open the store in a browser, confirm it loads, and try again."
            ),
            Self::SiteUnreachable => "Could not connect to the store.\n\n\
                 Likely causes:\n\
                 1. The domain's DNS has not finished propagating (this can take up to 48 hours)\n\
                 2. WordPress and WooCommerce are not set up on this host yet\n\
                 3. The wrong scheme is configured (try toggling SSL)"
                .to_string(),
            Self::DiscoveryStatus { status } => format!(
                "The WordPress REST API is not available (HTTP {status}).\n\n\
                 How to fix:\n\
                 1. In WordPress admin, go to Settings > Permalinks\n\
                 2. Select any structure other than \"Plain\" (\"Post name\" is recommended)\n\
                 3. Click \"Save Changes\" to regenerate the rewrite rules\n\
                 4. Make sure no security plugin is blocking /wp-json/"
            ),
            Self::DiscoveryUnavailable => "The WordPress REST API does not respond.\n\n\
                 Possible causes:\n\
                 1. A security plugin or firewall is blocking /wp-json/\n\
                 2. The REST API has been disabled by a plugin or theme\n\
                 3. The site returned an HTML page instead of JSON (maintenance mode or a redirect)"
                .to_string(),
            Self::NamespaceMissing { namespaces } => {
                let listed = if namespaces.is_empty() {
                    "(none)".to_string()
                } else {
                    namespaces.join(", ")
                };
                format!(
                    "WooCommerce is not installed or not active.\n\n\
                     The REST API does not declare the \"{REQUIRED_NAMESPACE}\" namespace.\n\
                     Namespaces found: {listed}\n\n\
                     How to fix:\n\
                     1. Install the WooCommerce plugin from Plugins > Add New\n\
                     2. Activate it\n\
                     3. Make sure WooCommerce is up to date"
                )
            }
            Self::InvalidCredentials => "Invalid credentials: the store rejected the API keys (HTTP 401).\n\n\
                 How to generate new keys:\n\
                 1. In WordPress admin, go to WooCommerce > Settings > Advanced > REST API\n\
                 2. Click \"Add key\"\n\
                 3. Enter a description and select a user with administrator rights\n\
                 4. Set Permissions to \"Read/Write\"\n\
                 5. Click \"Generate API key\"\n\
                 6. Copy the Consumer Key (ck_...) and Consumer Secret (cs_...) into the settings"
                .to_string(),
            Self::ApiVersionNotFound { api_version } => format!(
                "API version \"{api_version}\" was not found (HTTP 404).\n\n\
                 Change the API version to \"{DEFAULT_API_VERSION}\" and try again."
            ),
            Self::CredentialStatus {
                status,
                body_excerpt,
            } => format!(
                "Unexpected response from the WooCommerce API (HTTP {status}).\n\n\
                 Response: {body_excerpt}"
            ),
        }
    }

    #[must_use]
    pub fn into_result(self) -> DiagnosticResult {
        DiagnosticResult::failure(self.message())
    }
}

/// Message for a fully successful diagnostic run.
#[must_use]
pub fn connected_message(total_products: u64, woo_version: &str) -> String {
    format!(
        "Connected to WooCommerce successfully.\n\n\
         Products found: {total_products}\n\
         WooCommerce version: {woo_version}"
    )
}

/// First [`BODY_EXCERPT_CHARS`] characters of a response body.
pub(crate) fn body_excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
