//! Geolocation collaborator boundary.
//!
//! The session never talks to a position capability directly. It issues
//! a [`GeoRequest`] carrying a sequence number; a driver resolves the
//! request against a [`GeolocationProvider`] and hands the outcome back
//! with the same number. Results from superseded requests are ignored —
//! the last-issued request wins, regardless of completion order.

use std::time::Duration;

use async_trait::async_trait;
use cuidamet_core::Coordinates;
use thiserror::Error;

/// Banner shown when no position capability exists at all.
pub const UNSUPPORTED_MESSAGE: &str =
    "La geolocalización no es compatible con tu dispositivo.";

/// Options forwarded to the position capability. A `maximum_age` of
/// zero means a cached fix is never acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("permiso de ubicación denegado")]
    PermissionDenied,
    #[error("posición no disponible")]
    Unavailable,
    #[error("tiempo de espera agotado")]
    Timeout,
}

impl GeoError {
    /// The banner text shown for a failed request.
    pub fn user_message(self) -> &'static str {
        match self {
            GeoError::PermissionDenied => {
                "Permiso de ubicación denegado. Mostrando una ubicación por defecto."
            }
            GeoError::Unavailable | GeoError::Timeout => {
                "No se pudo obtener tu ubicación. Activa los permisos."
            }
        }
    }
}

/// Sequence number tying a request to its eventual result.
pub type GeoSeq = u64;

/// A position request the session has issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoRequest {
    pub seq: GeoSeq,
    pub options: GeoOptions,
}

/// Asynchronous position capability.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self, options: GeoOptions) -> Result<Coordinates, GeoError>;
}
