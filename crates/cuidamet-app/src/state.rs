//! Shared signal context and the async drivers for simulated latency.

use cuidamet_core::mock_data;
use cuidamet_core::provider::ProviderId;
use cuidamet_session::geolocation::GeolocationProvider;
use cuidamet_session::loading;
use cuidamet_session::AppSession;
use dioxus::prelude::*;

use crate::mocks::MockGeolocation;

/// App-wide state provided via Dioxus context. The session is the only
/// state owner; components read it and invoke its transitions.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Signal<AppSession>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: Signal::new(AppSession::new()),
        }
    }

    /// Kick off the simulated catalog fetch. The session decides at
    /// completion time whether the result still applies.
    pub fn start_initial_load(mut self) {
        let ticket = self.session.write().begin_initial_load();
        spawn(async move {
            tokio::time::sleep(loading::INITIAL_LOAD_DELAY).await;
            let providers = mock_data::mock_providers();
            let chats = mock_data::mock_chats(&providers);
            self.session
                .write()
                .complete_initial_load(ticket, providers, chats);
        });
    }

    /// Open a profile and run its simulated fetch to completion.
    pub fn view_profile(mut self, provider_id: ProviderId) {
        let ticket = self.session.write().view_profile(provider_id);
        spawn(async move {
            tokio::time::sleep(loading::PROFILE_LOAD_DELAY).await;
            self.session.write().complete_profile_load(ticket);
        });
    }

    /// Ask the position capability for a fresh fix.
    pub fn request_location(mut self) {
        let request = self.session.write().request_location();
        spawn(async move {
            let outcome = MockGeolocation::from_env()
                .current_position(request.options)
                .await;
            self.session
                .write()
                .apply_location_result(request.seq, outcome);
        });
    }

    /// Simulate payment processing, then advance to the confirmation.
    pub fn process_payment(mut self) {
        spawn(async move {
            tokio::time::sleep(loading::PAYMENT_PROCESSING_DELAY).await;
            self.session.write().confirm_payment();
        });
    }
}
