//! One-shot acquisition of the visitor's position.
//!
//! A position is requested once, bounded by [`GeolocationOptions::timeout`].
//! The outcome settles a [`GeolocationStatus`] exactly once. There is no
//! continuous tracking and no retry.

use std::future::Future;

use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    constants::{
        GEOLOCATION_DENIED_MESSAGE, GEOLOCATION_TIMEOUT_MESSAGE, GEOLOCATION_UNSUPPORTED_MESSAGE,
    },
    geopoint::GeoPoint,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout: SignedDuration,

    /// How old a previously acquired fix may be and still be reused.
    pub maximum_age: SignedDuration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        GeolocationOptions {
            enable_high_accuracy: false,
            timeout: SignedDuration::from_secs(8),
            maximum_age: SignedDuration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub point: GeoPoint,
    pub timestamp: Timestamp,
}

impl PositionFix {
    pub fn now(point: GeoPoint) -> Self {
        PositionFix {
            point,
            timestamp: Timestamp::now(),
        }
    }

    fn is_fresh(&self, now: Timestamp, maximum_age: SignedDuration) -> bool {
        now.duration_since(self.timestamp) <= maximum_age
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("{}", GEOLOCATION_UNSUPPORTED_MESSAGE)]
    Unsupported,

    #[error("{}", message_or_denied(.0))]
    PermissionDenied(Option<String>),

    #[error("{}", message_or_denied(.0))]
    Unavailable(Option<String>),

    #[error("{}", GEOLOCATION_TIMEOUT_MESSAGE)]
    Timeout,
}

/// Providers may report no message or an empty one.
fn message_or_denied(message: &Option<String>) -> &str {
    message
        .as_deref()
        .filter(|message| !message.is_empty())
        .unwrap_or(GEOLOCATION_DENIED_MESSAGE)
}

/// Source of the visitor's position.
pub trait GeolocationProvider {
    fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> impl Future<Output = Result<PositionFix, GeolocationError>> + Send;
}

/// Requests the position once.
///
/// `None` means the capability is absent and yields
/// [`GeolocationError::Unsupported`] without waiting.
#[instrument(skip(provider))]
pub async fn request_position<P>(
    provider: Option<&P>,
    options: GeolocationOptions,
) -> Result<GeoPoint, GeolocationError>
where
    P: GeolocationProvider,
{
    let Some(provider) = provider else {
        warn!("No geolocation provider available");
        return Err(GeolocationError::Unsupported);
    };

    let result = tokio::time::timeout(
        options.timeout.unsigned_abs(),
        provider.current_position(&options),
    )
    .await;

    match result {
        Ok(Ok(fix)) => {
            info!("Position acquired at {}", fix.point);
            Ok(fix.point)
        }
        Ok(Err(error)) => {
            warn!("Geolocation failed: {}", error);
            Err(error)
        }
        Err(_) => {
            warn!("Geolocation timed out after {}", options.timeout);
            Err(GeolocationError::Timeout)
        }
    }
}

/// A provider that always reports the same configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider {
    point: GeoPoint,
}

impl FixedProvider {
    pub fn new(point: GeoPoint) -> Self {
        FixedProvider { point }
    }
}

impl GeolocationProvider for FixedProvider {
    async fn current_position(
        &self,
        _options: &GeolocationOptions,
    ) -> Result<PositionFix, GeolocationError> {
        Ok(PositionFix::now(self.point))
    }
}

/// Reuses the last fix while it is younger than
/// [`GeolocationOptions::maximum_age`] and asks `inner` otherwise.
pub struct CachedProvider<P> {
    inner: P,
    last_fix: Mutex<Option<PositionFix>>,
}

impl<P> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        CachedProvider {
            inner,
            last_fix: Mutex::new(None),
        }
    }

    pub fn with_fix(inner: P, fix: PositionFix) -> Self {
        CachedProvider {
            inner,
            last_fix: Mutex::new(Some(fix)),
        }
    }

    pub fn last_fix(&self) -> Option<PositionFix> {
        *self.last_fix.lock()
    }
}

impl<P> GeolocationProvider for CachedProvider<P>
where
    P: GeolocationProvider + Sync,
{
    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<PositionFix, GeolocationError> {
        let cached = *self.last_fix.lock();
        if let Some(fix) = cached
            && fix.is_fresh(Timestamp::now(), options.maximum_age)
        {
            debug!("Reusing cached fix from {}", fix.timestamp);
            return Ok(fix);
        }

        let fix = self.inner.current_position(options).await?;
        *self.last_fix.lock() = Some(fix);

        Ok(fix)
    }
}

/// Outcome of the one-shot position request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum GeolocationStatus {
    #[default]
    Pending,
    Located(GeoPoint),
    Failed(String),
}

impl GeolocationStatus {
    /// Records the request outcome. Only the first outcome is kept, later
    /// ones are ignored and `false` is returned.
    pub fn settle(&mut self, result: Result<GeoPoint, GeolocationError>) -> bool {
        if *self != GeolocationStatus::Pending {
            debug!("Geolocation already settled, ignoring {:?}", result);
            return false;
        }

        *self = match result {
            Ok(point) => GeolocationStatus::Located(point),
            Err(error) => GeolocationStatus::Failed(error.to_string()),
        };

        true
    }

    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            GeolocationStatus::Located(point) => Some(*point),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GeolocationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
