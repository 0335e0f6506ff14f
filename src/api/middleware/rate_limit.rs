//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client-IP rate limiter for the deck API.
///
/// # Limits
///
/// - **Rate**: one token replenished every `1 / per_second` seconds
/// - **Burst**: up to `burst` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with connect info.
///
/// # Panics
///
/// Panics if `per_second` or `burst` is zero; [`crate::config::Config::validate`]
/// rejects both at startup.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api/v1", deck_routes(false))
///     .layer(rate_limit::layer(10, 100));
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(replenish_period(per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit period and burst must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Interval after which one token is replenished, at nanosecond precision.
fn replenish_period(per_second: u64) -> Duration {
    Duration::from_nanos(1_000_000_000 / per_second.max(1))
}
