//! Mock collaborators standing in for the real capabilities.
//!
//! There is no server and no device integration in this build: the
//! position capability resolves to a fixed spot in central Madrid, and
//! the support assistant streams scripted answers. Both honor the same
//! traits a real integration would implement.

use std::time::Duration;

use async_trait::async_trait;
use cuidamet_core::Coordinates;
use cuidamet_session::assistant::{AssistantError, SupportAssistant};
use cuidamet_session::geolocation::{GeoError, GeoOptions, GeolocationProvider};
use futures::stream::BoxStream;
use futures::StreamExt;

/// Puerta del Sol; the simulated device never moves.
const SIMULATED_POSITION: Coordinates = Coordinates::new(40.4168, -3.7038);
const FIX_DELAY: Duration = Duration::from_millis(800);
const CHUNK_DELAY: Duration = Duration::from_millis(40);

/// Simulated position capability.
pub struct MockGeolocation {
    outcome: Result<Coordinates, GeoError>,
    delay: Duration,
}

impl MockGeolocation {
    pub fn new(outcome: Result<Coordinates, GeoError>, delay: Duration) -> Self {
        Self { outcome, delay }
    }

    /// Reads `CUIDAMET_GEO` to simulate failures: `denied` for a
    /// permission refusal, `unavailable` for a missing fix. Anything
    /// else resolves to the fixed Madrid position.
    pub fn from_env() -> Self {
        let outcome = match std::env::var("CUIDAMET_GEO").as_deref() {
            Ok("denied") => Err(GeoError::PermissionDenied),
            Ok("unavailable") => Err(GeoError::Unavailable),
            _ => Ok(SIMULATED_POSITION),
        };
        Self::new(outcome, FIX_DELAY)
    }
}

#[async_trait]
impl GeolocationProvider for MockGeolocation {
    async fn current_position(&self, options: GeoOptions) -> Result<Coordinates, GeoError> {
        tokio::time::sleep(self.delay.min(options.timeout)).await;
        self.outcome
    }
}

/// Scripted stand-in for the generative support assistant.
pub struct MockAssistant;

fn scripted_reply(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    if prompt.contains("precio") || prompt.contains("tarifa") || prompt.contains("cuesta") {
        "Buscar y contactar con cuidadores es gratis. Solo pagas la tarifa \
         del cuidador más una pequeña tasa de servicio al confirmar una \
         reserva; el desglose se muestra siempre antes de pagar."
    } else if prompt.contains("segur") || prompt.contains("verific") {
        "Todos los cuidadores pasan una verificación de identidad y pueden \
         aportar certificados adicionales, que verás como insignias en su \
         perfil. Además, el chat y el pago se hacen dentro de la app."
    } else if prompt.contains("cuidador") || prompt.contains("trabajar") || prompt.contains("ofrecer") {
        "¡Nos encanta! Desde la pestaña central puedes publicar tu perfil de \
         cuidador: eliges tus servicios, tu tarifa por hora y tu zona, y las \
         familias te contactarán por el chat."
    } else if prompt.contains("reserva") || prompt.contains("pago") {
        "Desde el perfil de un cuidador pulsa «Reservar», elige fecha y \
         horario o un pack de horas, y confirma el pago con tarjeta, PayPal \
         o Bizum. Al terminar se abre el chat para acordar los detalles."
    } else {
        "Puedo ayudarte con el uso de la app, los precios, la seguridad o \
         cómo convertirte en cuidador. ¿Sobre qué quieres saber más?"
    }
}

#[async_trait]
impl SupportAssistant for MockAssistant {
    async fn reply(
        &self,
        prompt: &str,
    ) -> Result<BoxStream<'static, Result<String, AssistantError>>, AssistantError> {
        let chunks: Vec<String> = scripted_reply(prompt)
            .split_inclusive(' ')
            .map(str::to_string)
            .collect();
        Ok(futures::stream::iter(chunks)
            .then(|chunk| async move {
                tokio::time::sleep(CHUNK_DELAY).await;
                Ok(chunk)
            })
            .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_geolocation_resolves_to_fixed_position() {
        let geo = MockGeolocation::new(Ok(SIMULATED_POSITION), Duration::ZERO);
        let fix = geo.current_position(GeoOptions::default()).await.unwrap();
        assert_eq!(fix, SIMULATED_POSITION);
    }

    #[tokio::test]
    async fn test_geolocation_propagates_denial() {
        let geo = MockGeolocation::new(Err(GeoError::PermissionDenied), Duration::ZERO);
        let err = geo.current_position(GeoOptions::default()).await;
        assert_eq!(err, Err(GeoError::PermissionDenied));
    }

    #[tokio::test]
    async fn test_assistant_stream_reassembles_reply() {
        let mut stream = MockAssistant.reply("¿Cuánto cuesta?").await.unwrap();
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            text.push_str(&chunk.unwrap());
        }
        assert_eq!(text, scripted_reply("¿Cuánto cuesta?"));
        assert!(text.contains("tasa de servicio"));
    }
}
