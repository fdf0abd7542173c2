use std::{
    collections::HashSet,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// API key auth settings used by middleware.
#[derive(Debug, Clone)]
pub struct AuthState {
    api_keys: Arc<HashSet<String>>,
    pub enabled: bool,
}

impl AuthState {
    /// Builds auth config from the configured key list.
    ///
    /// In development, an empty list disables auth for local iteration.
    /// In non-development envs, an empty list fails startup.
    pub fn from_keys(keys: Vec<String>, is_development: bool) -> anyhow::Result<Self> {
        let keys: HashSet<String> = keys.into_iter().collect();

        if keys.is_empty() {
            if is_development {
                tracing::warn!(
                    "STORESYNC_API_KEYS not set; API key auth disabled in development environment"
                );
                return Ok(Self {
                    api_keys: Arc::new(HashSet::new()),
                    enabled: false,
                });
            }

            anyhow::bail!(
                "STORESYNC_API_KEYS is required outside development; provide comma-separated keys"
            );
        }

        Ok(Self {
            api_keys: Arc::new(keys),
            enabled: true,
        })
    }

    fn allows(&self, token: &str) -> bool {
        self.api_keys.contains(token)
    }
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    started_at: Instant,
    count: usize,
}

/// Fixed-window limiter shared by every dispatcher request in the process.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    state: Arc<Mutex<RateLimitWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(RateLimitWindow {
                started_at: Instant::now(),
                count: 0,
            })),
        }
    }

    #[must_use]
    pub fn per_minute(max_requests: usize) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }
}

/// Same shape as dispatcher failures so clients need one error parser.
#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    success: bool,
    message: &'static str,
}

fn reject(status: StatusCode, message: &'static str) -> Response {
    (
        status,
        Json(MiddlewareErrorBody {
            success: false,
            message,
        }),
    )
        .into_response()
}

/// Axum middleware that extracts or generates a request ID.
///
/// If the incoming request has an `x-request-id` header, that value is used.
/// Otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware enforcing API key auth when enabled.
///
/// Accepts the key as `Authorization: Bearer <key>` or as an `apikey`
/// header. `OPTIONS` requests always pass so CORS preflights work.
pub async fn require_api_key(State(auth): State<AuthState>, req: Request, next: Next) -> Response {
    if !auth.enabled || req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    match extract_api_key(req.headers()) {
        Some(key) if auth.allows(key) => next.run(req).await,
        _ => reject(StatusCode::UNAUTHORIZED, "missing or invalid API key"),
    }
}

/// Middleware enforcing a fixed request-per-window limit.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let mut window = rate_limit.state.lock().await;
    let elapsed = window.started_at.elapsed();

    if elapsed >= rate_limit.window {
        window.started_at = Instant::now();
        window.count = 0;
    }

    if window.count >= rate_limit.max_requests {
        tracing::warn!(max_requests = rate_limit.max_requests, "rate limit exceeded");
        return reject(StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded");
    }

    window.count += 1;
    drop(window);

    next.run(req).await
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());

    bearer
        .or(apikey)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
