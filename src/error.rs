//! Error taxonomy shared by the sampler, scorer, oracle adapter and optimizer.

/// Errors raised by the route approximation core.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Malformed track or waypoint subset. Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The directions service returned no itinerary for the submitted waypoints.
    #[error("no route found")]
    NoRouteFound,

    /// Transport, auth or quota failure reported by the directions service.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RouteError {
    /// Whether the optimizer may skip the round that produced this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RouteError::NoRouteFound)
    }

    pub(crate) fn too_few_points(what: &str, count: usize) -> Self {
        RouteError::InvalidInput(format!(
            "{} needs at least 2 points, got {}",
            what, count
        ))
    }
}

/// Failures talking to the directions service.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("directions request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("directions service returned {status}{}", detail(.message))]
    Status {
        status: String,
        message: Option<String>,
    },
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Upstream(UpstreamError::Http(err))
    }
}
