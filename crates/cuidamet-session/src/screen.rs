//! Pure derivation from session state to the page to render.

use cuidamet_core::booking::BookingDetails;
use cuidamet_core::chat::ChatThread;
use cuidamet_core::legal::LegalDocument;
use cuidamet_core::provider::{CareCategory, Provider};

use crate::session::AppSession;
use crate::view::View;

/// What the root component should render right now. Derived on every
/// read; no `Screen` value outlives the render that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    /// The providers or favorites listing.
    ProviderList {
        providers: Vec<Provider>,
        favorites_mode: bool,
        /// Favorites reached from the profile hub renders with a plain
        /// page header and a back link instead of the search chrome.
        profile_origin: bool,
        loading: bool,
    },
    /// `provider` is `None` while loading, and also when the selected id
    /// matches no record — the component shows its own fallback.
    ProfileDetail {
        provider: Option<Provider>,
        loading: bool,
    },
    Offer,
    Inbox {
        threads: Vec<ChatThread>,
    },
    Chat {
        thread: ChatThread,
    },
    MyProfile,
    Map {
        providers: Vec<Provider>,
    },
    Prices,
    Security,
    Verification,
    Help,
    About,
    Blog,
    Contact,
    Settings,
    EditProfile {
        category: Option<CareCategory>,
    },
    SecuritySettings,
    Notifications,
    LegalInfo,
    LegalDocumentPage {
        document: &'static LegalDocument,
    },
    MyCaregiverProfile,
    BookingPage {
        provider: Provider,
    },
    Payment {
        provider: Provider,
        booking: BookingDetails,
    },
    BookingConfirmed {
        provider: Provider,
        booking: BookingDetails,
    },
    Support,
    SupportChat,
    SupportEmail,
    /// A view's required reference is missing; render nothing.
    Blank,
}

impl AppSession {
    /// Deterministic (view, auxiliary state) → page selection. The match
    /// is exhaustive over [`View`], so adding a view refuses to compile
    /// until it renders something.
    pub fn screen(&self) -> Screen {
        match self.view() {
            View::Landing => Screen::Landing,
            View::Providers => Screen::ProviderList {
                providers: self.visible_providers(),
                favorites_mode: false,
                profile_origin: false,
                loading: self.is_loading(),
            },
            View::Favorites => Screen::ProviderList {
                providers: self.visible_providers(),
                favorites_mode: true,
                profile_origin: self.navigation_context() == Some(View::MyProfile),
                loading: self.is_loading(),
            },
            View::Profile => match self.selected_provider_id() {
                Some(_) if self.is_profile_loading() => Screen::ProfileDetail {
                    provider: None,
                    loading: true,
                },
                Some(id) => Screen::ProfileDetail {
                    provider: self.annotated_provider(id),
                    loading: false,
                },
                None => Screen::Blank,
            },
            View::Offer => Screen::Offer,
            View::Inbox => Screen::Inbox {
                threads: self.chats().to_vec(),
            },
            View::Chat => match self.current_chat() {
                Some(thread) => Screen::Chat {
                    thread: thread.clone(),
                },
                None => Screen::Blank,
            },
            View::MyProfile => Screen::MyProfile,
            View::Map => Screen::Map {
                providers: self.annotated_providers(),
            },
            View::Prices => Screen::Prices,
            View::Security => Screen::Security,
            View::Verification => Screen::Verification,
            View::Help => Screen::Help,
            View::About => Screen::About,
            View::Blog => Screen::Blog,
            View::Contact => Screen::Contact,
            View::Settings => Screen::Settings,
            View::EditProfile => Screen::EditProfile {
                category: self.editing_category(),
            },
            View::SecuritySettings => Screen::SecuritySettings,
            View::Notifications => Screen::Notifications,
            View::LegalInfo => Screen::LegalInfo,
            View::LegalDocument => match self.legal_document() {
                Some(document) => Screen::LegalDocumentPage { document },
                None => Screen::Blank,
            },
            View::MyCaregiverProfile => Screen::MyCaregiverProfile,
            View::Booking => match self.selected_provider() {
                Some(provider) => Screen::BookingPage { provider },
                None => Screen::Blank,
            },
            View::Payment => match (self.selected_provider(), self.booking()) {
                (Some(provider), Some(booking)) => Screen::Payment {
                    provider,
                    booking: booking.clone(),
                },
                _ => Screen::Blank,
            },
            View::Confirmation => match (self.selected_provider(), self.booking()) {
                (Some(provider), Some(booking)) => Screen::BookingConfirmed {
                    provider,
                    booking: booking.clone(),
                },
                _ => Screen::Blank,
            },
            View::Support => Screen::Support,
            View::SupportChat => Screen::SupportChat,
            View::SupportEmail => Screen::SupportEmail,
        }
    }

    fn selected_provider(&self) -> Option<Provider> {
        let id = self.selected_provider_id()?;
        self.provider(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuidamet_core::mock_data;

    fn loaded_session() -> AppSession {
        let mut session = AppSession::new();
        let ticket = session.begin_initial_load();
        let providers = mock_data::mock_providers();
        let chats = mock_data::mock_chats(&providers);
        session.complete_initial_load(ticket, providers, chats);
        session
    }

    #[test]
    fn test_fresh_session_lands_on_landing() {
        assert_eq!(AppSession::new().screen(), Screen::Landing);
    }

    #[test]
    fn test_profile_without_selection_renders_blank() {
        let mut session = loaded_session();
        session.footer_navigate(View::Profile);
        assert_eq!(session.selected_provider_id(), None);
        assert_eq!(session.screen(), Screen::Blank);
    }

    #[test]
    fn test_profile_loading_then_loaded() {
        let mut session = loaded_session();
        let ticket = session.view_profile(1);
        assert_eq!(
            session.screen(),
            Screen::ProfileDetail {
                provider: None,
                loading: true
            }
        );
        session.complete_profile_load(ticket);
        match session.screen() {
            Screen::ProfileDetail {
                provider: Some(provider),
                loading: false,
            } => assert_eq!(provider.id, 1),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_unknown_provider_yields_missing_profile() {
        let mut session = loaded_session();
        let ticket = session.view_profile(999);
        session.complete_profile_load(ticket);
        assert_eq!(
            session.screen(),
            Screen::ProfileDetail {
                provider: None,
                loading: false
            }
        );
    }

    #[test]
    fn test_chat_without_thread_renders_blank() {
        let mut session = loaded_session();
        session.open_chat(42);
        assert_eq!(session.screen(), Screen::Blank);
    }

    #[test]
    fn test_payment_without_booking_renders_blank() {
        let mut session = loaded_session();
        session.start_booking(1);
        session.confirm_payment();
        assert_eq!(session.view(), View::Confirmation);
        assert_eq!(session.screen(), Screen::Blank);
    }

    #[test]
    fn test_favorites_from_profile_hub_marks_origin() {
        let mut session = loaded_session();
        session.navigate_my_profile();
        session.navigate_favorites();
        match session.screen() {
            Screen::ProviderList {
                favorites_mode: true,
                profile_origin: true,
                ..
            } => {}
            other => panic!("unexpected screen {other:?}"),
        }

        session.navigate_home();
        session.navigate_favorites();
        match session.screen() {
            Screen::ProviderList {
                favorites_mode: true,
                profile_origin: false,
                ..
            } => {}
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_every_view_derives_some_screen() {
        // Smoke the exhaustive match with an empty session: every view
        // must produce a screen without panicking.
        let mut session = AppSession::new();
        for view in [
            View::Landing,
            View::Providers,
            View::Favorites,
            View::Profile,
            View::Offer,
            View::Inbox,
            View::Chat,
            View::MyProfile,
            View::Map,
            View::Prices,
            View::Security,
            View::Verification,
            View::Help,
            View::About,
            View::Blog,
            View::Contact,
            View::Settings,
            View::EditProfile,
            View::SecuritySettings,
            View::Notifications,
            View::LegalInfo,
            View::LegalDocument,
            View::MyCaregiverProfile,
            View::Booking,
            View::Payment,
            View::Confirmation,
            View::Support,
            View::SupportChat,
            View::SupportEmail,
        ] {
            session.footer_navigate(view);
            let _ = session.screen();
        }
    }
}
