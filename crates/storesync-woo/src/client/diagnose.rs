//! Three-step connection diagnostic: reachability, REST discovery,
//! credentials. Each step gates the next; the first failure ends the run.

use reqwest::{Method, StatusCode};
use storesync_core::{ConnectionInfo, DiagnosticResult, StoreConfig};

use super::{StoreEndpoints, WooClient};
use crate::diagnostics::{body_excerpt, connected_message, Diagnostic, REQUIRED_NAMESPACE};
use crate::error::WooError;
use crate::pagination::PageTotals;
use crate::types::{ApiRoot, SystemStatus};

/// Outcome of the credential step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    /// Keys accepted; carries the store's `X-WP-Total` product count.
    Accepted { total_products: u64 },
    Rejected(Diagnostic),
}

/// Result of the best-effort WooCommerce version lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLookup {
    Fetched(String),
    /// The lookup failed; `reason` is logged, never surfaced to callers.
    Defaulted { reason: String },
}

impl VersionLookup {
    /// Version reported when the lookup was defaulted.
    pub const UNKNOWN: &'static str = "Unknown";

    #[must_use]
    pub fn into_version(self) -> String {
        match self {
            Self::Fetched(version) => version,
            Self::Defaulted { .. } => Self::UNKNOWN.to_owned(),
        }
    }
}

impl WooClient {
    /// Runs the full connection diagnostic against one store.
    ///
    /// Steps run in order and stop at the first failure:
    /// 1. [`Self::probe_site`]
    /// 2. [`Self::check_discovery`]
    /// 3. [`Self::check_credentials`], then a best-effort
    ///    [`Self::lookup_version`]
    ///
    /// Diagnostic failures are returned as `Ok` with `success == false`.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Http`] only when the credential request itself
    /// fails at the transport level (timeout, connection reset).
    pub async fn test_connection(
        &self,
        config: &StoreConfig,
    ) -> Result<DiagnosticResult, WooError> {
        let endpoints = StoreEndpoints::new(config);
        tracing::info!(store_url = endpoints.root(), "starting connection diagnostic");

        if let Err(diagnostic) = self.probe_site(&endpoints).await {
            return Ok(diagnostic.into_result());
        }

        if let Err(diagnostic) = self.check_discovery(&endpoints).await {
            return Ok(diagnostic.into_result());
        }

        let total_products = match self.check_credentials(config, &endpoints).await? {
            CredentialCheck::Accepted { total_products } => total_products,
            CredentialCheck::Rejected(diagnostic) => return Ok(diagnostic.into_result()),
        };

        let woo_version = self.lookup_version(config, &endpoints).await.into_version();

        tracing::info!(
            store_url = endpoints.root(),
            total_products,
            woo_version = woo_version.as_str(),
            "connection diagnostic passed"
        );

        Ok(DiagnosticResult::connected(
            connected_message(total_products, &woo_version),
            ConnectionInfo {
                total_products,
                woo_version,
                api_version: endpoints.api_version().to_owned(),
                store_url: endpoints.root().to_owned(),
            },
        ))
    }

    /// Step 1: `GET {root}` must answer with a 2xx status.
    ///
    /// # Errors
    ///
    /// - [`Diagnostic::SiteStatus`] for a non-2xx response.
    /// - [`Diagnostic::SiteUnreachable`] when no response arrives at all.
    pub async fn probe_site(&self, endpoints: &StoreEndpoints) -> Result<(), Diagnostic> {
        let result = self
            .client
            .get(endpoints.root())
            .timeout(self.timeouts.probe)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(store_url = endpoints.root(), status, "store root returned non-success status");
                Err(Diagnostic::SiteStatus { status })
            }
            Err(e) => {
                tracing::warn!(store_url = endpoints.root(), error = %e, "store root unreachable");
                Err(Diagnostic::SiteUnreachable)
            }
        }
    }

    /// Step 2: `GET {root}/wp-json/` must return JSON declaring
    /// [`REQUIRED_NAMESPACE`].
    ///
    /// # Errors
    ///
    /// - [`Diagnostic::DiscoveryStatus`] for a non-2xx response.
    /// - [`Diagnostic::NamespaceMissing`] when the namespace is not declared.
    /// - [`Diagnostic::DiscoveryUnavailable`] for transport or parse failures.
    pub async fn check_discovery(&self, endpoints: &StoreEndpoints) -> Result<(), Diagnostic> {
        let response = match self
            .client
            .get(endpoints.discovery())
            .timeout(self.timeouts.discovery)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(store_url = endpoints.root(), error = %e, "REST discovery request failed");
                return Err(Diagnostic::DiscoveryUnavailable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                store_url = endpoints.root(),
                status = status.as_u16(),
                "REST discovery returned non-success status"
            );
            return Err(Diagnostic::DiscoveryStatus {
                status: status.as_u16(),
            });
        }

        let root = match response.json::<ApiRoot>().await {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(store_url = endpoints.root(), error = %e, "REST discovery body is not valid JSON");
                return Err(Diagnostic::DiscoveryUnavailable);
            }
        };

        if root.declares(REQUIRED_NAMESPACE) {
            Ok(())
        } else {
            tracing::warn!(
                store_url = endpoints.root(),
                namespaces = ?root.namespaces,
                "WooCommerce namespace not declared"
            );
            Err(Diagnostic::NamespaceMissing {
                namespaces: root.namespaces,
            })
        }
    }

    /// Step 3: an authenticated `GET .../products?per_page=1`.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Http`] if the request fails at the transport
    /// level. HTTP-level rejections come back as
    /// [`CredentialCheck::Rejected`].
    pub async fn check_credentials(
        &self,
        config: &StoreConfig,
        endpoints: &StoreEndpoints,
    ) -> Result<CredentialCheck, WooError> {
        let response = self
            .authed(
                Method::GET,
                config,
                &endpoints.products(),
                self.timeouts.credentials,
            )
            .query(&[("per_page", "1")])
            .send()
            .await?;

        let status = response.status();
        let check = if status == StatusCode::UNAUTHORIZED {
            CredentialCheck::Rejected(Diagnostic::InvalidCredentials)
        } else if status == StatusCode::NOT_FOUND {
            CredentialCheck::Rejected(Diagnostic::ApiVersionNotFound {
                api_version: endpoints.api_version().to_owned(),
            })
        } else if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            CredentialCheck::Rejected(Diagnostic::CredentialStatus {
                status: status.as_u16(),
                body_excerpt: body_excerpt(&body),
            })
        } else {
            CredentialCheck::Accepted {
                total_products: PageTotals::from_headers(response.headers()).total,
            }
        };

        if let CredentialCheck::Rejected(_) = &check {
            tracing::warn!(
                store_url = endpoints.root(),
                status = status.as_u16(),
                "credential check rejected"
            );
        }

        Ok(check)
    }

    /// Best-effort lookup of the WooCommerce version from `system_status`.
    ///
    /// Never fails: any error is logged and reported as
    /// [`VersionLookup::Defaulted`].
    pub async fn lookup_version(
        &self,
        config: &StoreConfig,
        endpoints: &StoreEndpoints,
    ) -> VersionLookup {
        let lookup = match self.fetch_system_status(config, endpoints).await {
            Ok(status) => match status.woo_version() {
                Some(version) => VersionLookup::Fetched(version.to_owned()),
                None => VersionLookup::Defaulted {
                    reason: "system status did not report a version".to_owned(),
                },
            },
            Err(e) => VersionLookup::Defaulted {
                reason: e.to_string(),
            },
        };

        if let VersionLookup::Defaulted { reason } = &lookup {
            tracing::warn!(
                store_url = endpoints.root(),
                reason = reason.as_str(),
                "WooCommerce version lookup failed; reporting Unknown"
            );
        }

        lookup
    }

    async fn fetch_system_status(
        &self,
        config: &StoreConfig,
        endpoints: &StoreEndpoints,
    ) -> Result<SystemStatus, WooError> {
        let response = self
            .authed(
                Method::GET,
                config,
                &endpoints.system_status(),
                self.timeouts.system_status,
            )
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WooError::UnexpectedStatus {
                status: status.as_u16(),
                body: body_excerpt(&body),
            });
        }

        serde_json::from_str::<SystemStatus>(&body).map_err(|e| WooError::Deserialize {
            context: format!("system status from {}", endpoints.root()),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_version_is_kept() {
        assert_eq!(
            VersionLookup::Fetched("8.5.1".to_owned()).into_version(),
            "8.5.1"
        );
    }

    #[test]
    fn defaulted_version_is_unknown() {
        let lookup = VersionLookup::Defaulted {
            reason: "timeout".to_owned(),
        };
        assert_eq!(lookup.into_version(), "Unknown");
    }
}
