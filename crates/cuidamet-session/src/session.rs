//! The single owner of all UI state and its named transitions.

use std::collections::HashSet;

use cuidamet_core::booking::BookingDetails;
use cuidamet_core::chat::{self, ChatId, ChatThread, Sender};
use cuidamet_core::directory::{self, ListMode};
use cuidamet_core::legal::{self, LegalDocument};
use cuidamet_core::provider::{CareCategory, CategoryFilter, Provider, ProviderId};
use cuidamet_core::Coordinates;
use tracing::{debug, warn};

use crate::geolocation::{GeoError, GeoOptions, GeoRequest, GeoSeq, UNSUPPORTED_MESSAGE};
use crate::loading::{LoadGate, LoadTicket};
use crate::view::{ReturnView, View};

/// Destructive action awaiting user confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Logout,
    DeleteAccount,
}

/// Contents of the blocking confirmation modal. Only user-initiated
/// destructive actions go through it; system errors never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub action: ConfirmAction,
}

/// All client state, owned in one place. Reads go through accessors and
/// the derivation helpers; writes go through the named transitions below
/// and nowhere else.
#[derive(Debug)]
pub struct AppSession {
    view: View,
    previous_view: ReturnView,
    navigation_context: Option<View>,

    providers: Vec<Provider>,
    favorites: HashSet<ProviderId>,
    selected_provider_id: Option<ProviderId>,
    selected_category: CategoryFilter,
    search_query: String,

    chats: Vec<ChatThread>,
    current_chat_id: Option<ChatId>,

    loading: bool,
    initial_load: LoadGate,
    profile_loading: bool,
    profile_load: LoadGate,

    user_location: Option<Coordinates>,
    location_loading: bool,
    location_error: Option<String>,
    geo_seq: GeoSeq,

    legal_document: Option<&'static LegalDocument>,
    editing_category: Option<CareCategory>,
    booking: Option<BookingDetails>,
    confirmation: Option<ConfirmationPrompt>,

    scroll_epoch: u64,
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AppSession {
    /// A fresh session on the landing view, with the initial data fetch
    /// still pending.
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            previous_view: ReturnView::Providers,
            navigation_context: None,
            providers: Vec::new(),
            favorites: HashSet::new(),
            selected_provider_id: None,
            selected_category: CategoryFilter::All,
            search_query: String::new(),
            chats: Vec::new(),
            current_chat_id: None,
            loading: true,
            initial_load: LoadGate::default(),
            profile_loading: false,
            profile_load: LoadGate::default(),
            user_location: None,
            location_loading: false,
            location_error: None,
            geo_seq: 0,
            legal_document: None,
            editing_category: None,
            booking: None,
            confirmation: None,
            scroll_epoch: 0,
        }
    }

    // ----- reads ---------------------------------------------------------

    pub fn view(&self) -> View {
        self.view
    }

    pub fn previous_view(&self) -> ReturnView {
        self.previous_view
    }

    pub fn navigation_context(&self) -> Option<View> {
        self.navigation_context
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn favorites(&self) -> &HashSet<ProviderId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: ProviderId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn selected_provider_id(&self) -> Option<ProviderId> {
        self.selected_provider_id
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn chats(&self) -> &[ChatThread] {
        &self.chats
    }

    pub fn current_chat_id(&self) -> Option<ChatId> {
        self.current_chat_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_profile_loading(&self) -> bool {
        self.profile_loading
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    pub fn is_location_loading(&self) -> bool {
        self.location_loading
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    pub fn legal_document(&self) -> Option<&'static LegalDocument> {
        self.legal_document
    }

    pub fn editing_category(&self) -> Option<CareCategory> {
        self.editing_category
    }

    pub fn booking(&self) -> Option<&BookingDetails> {
        self.booking.as_ref()
    }

    pub fn confirmation(&self) -> Option<&ConfirmationPrompt> {
        self.confirmation.as_ref()
    }

    /// Bumped whenever a transition should reset the scroll position;
    /// the frontend keys its scroll container on this.
    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }

    // ----- derived data --------------------------------------------------

    /// Unread messages across every conversation. Recomputed on each
    /// read, never cached.
    pub fn unread_count(&self) -> usize {
        chat::total_unread(&self.chats)
    }

    /// The catalog with per-read distance annotation from the user's
    /// location, when one is known.
    pub fn annotated_providers(&self) -> Vec<Provider> {
        directory::with_distances(&self.providers, self.user_location)
    }

    /// Visible, ordered providers for the current listing view.
    pub fn visible_providers(&self) -> Vec<Provider> {
        let mode = if self.view == View::Favorites {
            ListMode::Favorites
        } else {
            ListMode::All
        };
        let mut visible = directory::filter_providers(
            &self.annotated_providers(),
            &self.favorites,
            mode,
            self.selected_category,
            &self.search_query,
        );
        directory::sort_providers(&mut visible);
        visible
    }

    pub fn provider(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    /// Like [`Self::provider`], but carrying the distance annotation.
    pub fn annotated_provider(&self, id: ProviderId) -> Option<Provider> {
        self.annotated_providers()
            .into_iter()
            .find(|provider| provider.id == id)
    }

    pub fn current_chat(&self) -> Option<&ChatThread> {
        let id = self.current_chat_id?;
        self.chats.iter().find(|thread| thread.id == id)
    }

    // ----- initial and profile loads -------------------------------------

    /// Begin the simulated catalog fetch. The completion must present
    /// the returned ticket.
    pub fn begin_initial_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.initial_load.issue()
    }

    /// Apply the fetched catalog unless the ticket was superseded.
    pub fn complete_initial_load(
        &mut self,
        ticket: LoadTicket,
        providers: Vec<Provider>,
        chats: Vec<ChatThread>,
    ) {
        if !self.initial_load.is_current(ticket) {
            warn!("discarding stale initial-load completion");
            return;
        }
        debug!(providers = providers.len(), chats = chats.len(), "catalog loaded");
        self.providers = providers;
        self.chats = chats;
        self.loading = false;
    }

    /// Finish the simulated profile fetch started by [`Self::view_profile`],
    /// unless the user has navigated on since.
    pub fn complete_profile_load(&mut self, ticket: LoadTicket) {
        if !self.profile_load.is_current(ticket) {
            warn!("discarding stale profile-load completion");
            return;
        }
        self.profile_loading = false;
    }

    // ----- geolocation ---------------------------------------------------

    /// Issue a position request. The newest sequence number supersedes
    /// every earlier in-flight request.
    pub fn request_location(&mut self) -> GeoRequest {
        self.location_loading = true;
        self.location_error = None;
        self.geo_seq += 1;
        debug!(seq = self.geo_seq, "geolocation requested");
        GeoRequest {
            seq: self.geo_seq,
            options: GeoOptions::default(),
        }
    }

    /// Apply a position outcome. Results from superseded requests are
    /// ignored — the last-issued request wins.
    pub fn apply_location_result(
        &mut self,
        seq: GeoSeq,
        result: Result<Coordinates, GeoError>,
    ) {
        if seq != self.geo_seq {
            warn!(seq, latest = self.geo_seq, "ignoring superseded geolocation result");
            return;
        }
        self.location_loading = false;
        match result {
            Ok(coordinates) => {
                self.user_location = Some(coordinates);
                self.location_error = None;
            }
            Err(error) => {
                self.user_location = None;
                self.location_error = Some(error.user_message().to_string());
            }
        }
    }

    /// No position capability exists on this device.
    pub fn mark_location_unsupported(&mut self) {
        self.location_error = Some(UNSUPPORTED_MESSAGE.to_string());
    }

    // ----- listing transitions -------------------------------------------

    pub fn toggle_favorite(&mut self, id: ProviderId) {
        directory::toggle_favorite(&mut self.favorites, id);
    }

    /// Jump from the landing page into one vertical's listing.
    pub fn select_category(&mut self, category: CareCategory) {
        self.reset_scroll();
        self.selected_category = CategoryFilter::Only(category);
        self.view = View::Providers;
    }

    /// Change the category filter in place, without leaving the listing.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.reset_scroll();
        self.selected_category = filter;
    }

    /// Live edits from the search box; no navigation.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Submit a search from the landing page: clears the category filter
    /// and lands on the full listing.
    pub fn search(&mut self, query: &str) {
        self.reset_scroll();
        self.search_query = query.trim().to_string();
        self.selected_category = CategoryFilter::All;
        self.view = View::Providers;
    }

    // ----- primary navigation --------------------------------------------

    pub fn navigate_home(&mut self) {
        self.reset_scroll();
        self.view = View::Landing;
        self.leave_detail_views();
    }

    pub fn show_all_providers(&mut self) {
        self.reset_scroll();
        self.selected_category = CategoryFilter::All;
        self.view = View::Providers;
    }

    pub fn navigate_map(&mut self) {
        self.reset_scroll();
        self.view = View::Map;
        self.leave_detail_views();
    }

    /// Favorites is reachable both from the bottom bar and from the
    /// profile hub; the origin is recorded so back can return there.
    pub fn navigate_favorites(&mut self) {
        self.navigation_context = (self.view == View::MyProfile).then_some(View::MyProfile);
        self.reset_scroll();
        self.view = View::Favorites;
        self.leave_detail_views();
    }

    pub fn navigate_inbox(&mut self) {
        self.reset_scroll();
        self.view = View::Inbox;
        self.leave_detail_views();
    }

    pub fn navigate_offer(&mut self) {
        self.reset_scroll();
        self.view = View::Offer;
        self.leave_detail_views();
    }

    pub fn navigate_my_profile(&mut self) {
        self.reset_scroll();
        self.view = View::MyProfile;
        self.leave_detail_views();
    }

    /// Footer links: listing and offer go through their dedicated
    /// transitions, everything else switches the view directly.
    pub fn footer_navigate(&mut self, target: View) {
        match target {
            View::Providers => self.show_all_providers(),
            View::Offer => self.navigate_offer(),
            other => {
                self.reset_scroll();
                self.view = other;
            }
        }
    }

    // ----- profile detail -------------------------------------------------

    /// Open a provider profile, remembering which listing it was entered
    /// from, and start the simulated profile fetch.
    pub fn view_profile(&mut self, provider_id: ProviderId) -> LoadTicket {
        if matches!(self.view, View::Providers | View::Favorites | View::Map)
            && let Some(return_view) = ReturnView::from_view(self.view)
        {
            self.previous_view = return_view;
        }
        self.selected_provider_id = Some(provider_id);
        self.view = View::Profile;
        self.profile_loading = true;
        self.profile_load.issue()
    }

    /// Leave the profile (or a booking step) backwards. From booking or
    /// payment this returns to the profile; from the profile it returns
    /// to whichever listing was recorded — one level, never deeper.
    pub fn back_to_list(&mut self) {
        if matches!(self.view, View::Booking | View::Payment) {
            self.view = View::Profile;
            return;
        }
        self.view = self.previous_view.as_view();
        self.selected_provider_id = None;
        self.booking = None;
        self.profile_loading = false;
        self.profile_load.cancel();
    }

    // ----- chat -----------------------------------------------------------

    /// Open a conversation: every message in it becomes read, then the
    /// view switches.
    pub fn open_chat(&mut self, chat_id: ChatId) {
        if let Some(thread) = self.chats.iter_mut().find(|thread| thread.id == chat_id) {
            thread.mark_all_read();
        }
        self.current_chat_id = Some(chat_id);
        self.view = View::Chat;
    }

    pub fn back_to_inbox(&mut self) {
        self.view = View::Inbox;
        self.current_chat_id = None;
    }

    /// Route to the provider's conversation, creating an empty one on
    /// first contact. At most one conversation exists per provider.
    pub fn contact_provider(&mut self, provider_id: ProviderId) {
        let Some(provider) = self.provider(provider_id).cloned() else {
            warn!(provider_id, "contact requested for unknown provider");
            return;
        };
        let chat_id = chat::find_or_create_thread(&mut self.chats, &provider);
        self.open_chat(chat_id);
    }

    /// Append an outgoing message to a conversation.
    pub fn send_message(&mut self, chat_id: ChatId, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(thread) = self.chats.iter_mut().find(|thread| thread.id == chat_id) {
            thread.push(text, Sender::Me, true);
        }
    }

    // ----- booking flow ---------------------------------------------------

    pub fn start_booking(&mut self, provider_id: ProviderId) {
        self.selected_provider_id = Some(provider_id);
        self.view = View::Booking;
    }

    pub fn back_from_booking(&mut self) {
        self.view = View::Profile;
    }

    pub fn proceed_to_payment(&mut self, details: BookingDetails) {
        self.booking = Some(details);
        self.view = View::Payment;
    }

    pub fn back_from_payment(&mut self) {
        self.view = View::Booking;
    }

    pub fn confirm_payment(&mut self) {
        self.view = View::Confirmation;
    }

    /// Close out a confirmed booking by dropping into the provider's
    /// chat to arrange the details.
    pub fn finish_booking(&mut self) {
        match self.booking.take() {
            Some(details) => {
                self.contact_provider(details.provider_id);
                self.selected_provider_id = None;
            }
            None => self.navigate_home(),
        }
    }

    // ----- settings, legal, support ---------------------------------------

    pub fn navigate_settings(&mut self) {
        self.previous_view = ReturnView::MyProfile;
        self.view = View::Settings;
    }

    pub fn back_to_profile(&mut self) {
        self.view = View::MyProfile;
        self.navigation_context = None;
    }

    pub fn navigate_support(&mut self) {
        self.previous_view = ReturnView::MyProfile;
        self.view = View::Support;
    }

    pub fn navigate_support_chat(&mut self) {
        self.previous_view = ReturnView::Support;
        self.view = View::SupportChat;
    }

    pub fn navigate_support_email(&mut self) {
        self.previous_view = ReturnView::Support;
        self.view = View::SupportEmail;
    }

    pub fn back_to_support(&mut self) {
        self.view = View::Support;
    }

    pub fn back_to_settings(&mut self) {
        self.view = View::Settings;
    }

    pub fn navigate_my_caregiver_profile(&mut self) {
        self.view = View::MyCaregiverProfile;
    }

    /// Edit the caregiver profile, optionally jumping straight to one
    /// vertical's section. Reachable from settings and from the
    /// caregiver profile; back returns to whichever it was.
    pub fn navigate_edit_profile(&mut self, category: Option<CareCategory>) {
        if let Some(return_view) = ReturnView::from_view(self.view) {
            self.previous_view = return_view;
        }
        self.editing_category = category;
        self.view = View::EditProfile;
    }

    pub fn back_from_edit(&mut self) {
        self.view = self.previous_view.as_view();
    }

    pub fn navigate_security_settings(&mut self) {
        self.view = View::SecuritySettings;
    }

    pub fn navigate_notifications(&mut self) {
        self.view = View::Notifications;
    }

    pub fn navigate_legal_info(&mut self) {
        self.previous_view = ReturnView::Settings;
        self.view = View::LegalInfo;
    }

    /// Open one legal document. Unknown ids are ignored.
    pub fn open_legal_document(&mut self, id: &str) {
        if let Some(document) = legal::legal_document(id) {
            self.legal_document = Some(document);
            self.previous_view = ReturnView::LegalInfo;
            self.view = View::LegalDocument;
        }
    }

    pub fn back_to_legal_info(&mut self) {
        self.view = View::LegalInfo;
        self.legal_document = None;
    }

    // ----- confirmation modal ---------------------------------------------

    pub fn request_logout(&mut self) {
        self.confirmation = Some(ConfirmationPrompt {
            title: "Cerrar Sesión",
            message: "¿Estás seguro de que quieres cerrar tu sesión?",
            confirm_label: "Cerrar Sesión",
            action: ConfirmAction::Logout,
        });
    }

    pub fn request_delete_account(&mut self) {
        self.confirmation = Some(ConfirmationPrompt {
            title: "Eliminar Cuenta",
            message: "Esta acción es irreversible. Todos tus datos se borrarán \
                      permanentemente. ¿Estás seguro?",
            confirm_label: "Sí, eliminar mi cuenta",
            action: ConfirmAction::DeleteAccount,
        });
    }

    /// Execute the pending destructive action. Both current actions end
    /// the session flow and land back on the landing page.
    pub fn confirm_prompt(&mut self) {
        if let Some(prompt) = self.confirmation.take() {
            debug!(action = ?prompt.action, "destructive action confirmed");
            self.view = View::Landing;
        }
    }

    pub fn dismiss_prompt(&mut self) {
        self.confirmation = None;
    }

    // ----- internals ------------------------------------------------------

    fn reset_scroll(&mut self) {
        self.scroll_epoch += 1;
    }

    /// Leaving for a top-level tab clears the detail selections and
    /// supersedes any pending profile fetch.
    fn leave_detail_views(&mut self) {
        self.selected_provider_id = None;
        self.current_chat_id = None;
        self.profile_loading = false;
        self.profile_load.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuidamet_core::booking;
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
    fn test_initial_state() {
        let session = AppSession::new();
        assert_eq!(session.view(), View::Landing);
        assert_eq!(session.previous_view(), ReturnView::Providers);
        assert!(session.is_loading());
        assert!(session.providers().is_empty());
    }

    #[test]
    fn test_stale_initial_load_is_dropped() {
        let mut session = AppSession::new();
        let stale = session.begin_initial_load();
        let current = session.begin_initial_load();

        let providers = mock_data::mock_providers();
        session.complete_initial_load(stale, providers.clone(), Vec::new());
        assert!(session.is_loading());
        assert!(session.providers().is_empty());

        session.complete_initial_load(current, providers, Vec::new());
        assert!(!session.is_loading());
        assert!(!session.providers().is_empty());
    }

    #[test]
    fn test_profile_load_after_leaving_is_suppressed() {
        let mut session = loaded_session();
        session.show_all_providers();
        let ticket = session.view_profile(1);
        assert!(session.is_profile_loading());

        // User leaves before the simulated fetch resolves.
        session.navigate_home();
        assert!(!session.is_profile_loading());

        session.complete_profile_load(ticket);
        assert!(!session.is_profile_loading());
        assert_eq!(session.selected_provider_id(), None);
    }

    #[test]
    fn test_back_from_profile_returns_to_recorded_listing() {
        let mut session = loaded_session();

        session.navigate_map();
        session.view_profile(2);
        session.back_to_list();
        assert_eq!(session.view(), View::Map);

        session.show_all_providers();
        session.view_profile(2);
        session.back_to_list();
        assert_eq!(session.view(), View::Providers);
        assert_eq!(session.selected_provider_id(), None);
    }

    #[test]
    fn test_back_history_depth_is_one() {
        let mut session = loaded_session();
        // providers -> profile -> booking: backing out of booking lands
        // on the profile, and backing out of the profile lands on the
        // listing. There is no deeper path to retrace.
        session.show_all_providers();
        session.view_profile(3);
        session.start_booking(3);
        session.back_to_list();
        assert_eq!(session.view(), View::Profile);
        session.back_to_list();
        assert_eq!(session.view(), View::Providers);
    }

    #[test]
    fn test_booking_flow_round_trip() {
        let mut session = loaded_session();
        session.show_all_providers();
        session.view_profile(1);
        session.start_booking(1);
        assert_eq!(session.view(), View::Booking);

        let provider = session.provider(1).unwrap().clone();
        let quote = booking::quote_hour_pack(&provider, true);
        session.proceed_to_payment(quote.clone());
        assert_eq!(session.view(), View::Payment);
        assert_eq!(session.booking(), Some(&quote));

        session.confirm_payment();
        assert_eq!(session.view(), View::Confirmation);

        session.finish_booking();
        assert_eq!(session.view(), View::Chat);
        assert_eq!(session.booking(), None);
        assert_eq!(session.selected_provider_id(), None);
        let thread = session.current_chat().expect("booking opened a chat");
        assert_eq!(thread.provider.id, 1);
    }

    #[test]
    fn test_finish_booking_without_details_goes_home() {
        let mut session = loaded_session();
        session.finish_booking();
        assert_eq!(session.view(), View::Landing);
    }

    #[test]
    fn test_contact_provider_reuses_existing_thread() {
        let mut session = loaded_session();
        let before = session.chats().len();

        // Provider 3 already has a seeded conversation.
        session.contact_provider(3);
        assert_eq!(session.chats().len(), before);
        assert_eq!(session.view(), View::Chat);

        // Provider 1 does not: exactly one new thread appears, and a
        // second contact reuses it.
        session.contact_provider(1);
        assert_eq!(session.chats().len(), before + 1);
        let id = session.current_chat_id();
        session.contact_provider(1);
        assert_eq!(session.chats().len(), before + 1);
        assert_eq!(session.current_chat_id(), id);
    }

    #[test]
    fn test_opening_chat_clears_unread() {
        let mut session = loaded_session();
        let unread_before = session.unread_count();
        assert!(unread_before > 0);

        session.open_chat(1);
        let thread = session.current_chat().unwrap();
        assert_eq!(thread.unread_count(), 0);
        assert!(session.unread_count() < unread_before);
    }

    #[test]
    fn test_send_message_appends_to_thread() {
        let mut session = loaded_session();
        session.open_chat(1);
        let len = session.current_chat().unwrap().messages.len();

        session.send_message(1, "  ¿Te viene bien a las 17:00?  ");
        let thread = session.current_chat().unwrap();
        assert_eq!(thread.messages.len(), len + 1);
        let last = thread.last_message().unwrap();
        assert_eq!(last.text, "¿Te viene bien a las 17:00?");
        assert_eq!(last.sender, Sender::Me);
        assert!(last.read);

        session.send_message(1, "   ");
        assert_eq!(session.current_chat().unwrap().messages.len(), len + 1);
    }

    #[test]
    fn test_favorite_toggle_round_trips() {
        let mut session = loaded_session();
        session.toggle_favorite(7);
        assert!(session.is_favorite(7));
        session.toggle_favorite(7);
        assert!(!session.is_favorite(7));
    }

    #[test]
    fn test_search_clears_category_and_lands_on_listing() {
        let mut session = loaded_session();
        session.select_category(CareCategory::Pets);
        assert_eq!(
            session.selected_category(),
            CategoryFilter::Only(CareCategory::Pets)
        );

        session.search("  canguro ");
        assert_eq!(session.view(), View::Providers);
        assert_eq!(session.selected_category(), CategoryFilter::All);
        assert_eq!(session.search_query(), "canguro");
        assert!(!session.visible_providers().is_empty());
    }

    #[test]
    fn test_visible_providers_orders_premium_first() {
        let mut session = loaded_session();
        session.show_all_providers();
        let visible = session.visible_providers();
        let first_non_premium = visible
            .iter()
            .position(|p| !p.is_premium)
            .unwrap_or(visible.len());
        assert!(
            visible[first_non_premium..].iter().all(|p| !p.is_premium),
            "premium providers must form a prefix"
        );
    }

    #[test]
    fn test_geolocation_last_request_wins() {
        let mut session = loaded_session();
        let first = session.request_location();
        let second = session.request_location();

        let somewhere = Coordinates::new(40.42, -3.70);
        // The first request resolves late; its outcome is ignored.
        session.apply_location_result(first.seq, Err(GeoError::Timeout));
        assert!(session.is_location_loading());
        assert_eq!(session.location_error(), None);

        session.apply_location_result(second.seq, Ok(somewhere));
        assert!(!session.is_location_loading());
        assert_eq!(session.user_location(), Some(somewhere));

        // Distances only appear once a location is known.
        assert!(
            session
                .annotated_providers()
                .iter()
                .all(|p| p.distance_km.is_some())
        );
    }

    #[test]
    fn test_geolocation_failure_sets_banner() {
        let mut session = loaded_session();
        let request = session.request_location();
        session.apply_location_result(request.seq, Err(GeoError::PermissionDenied));
        assert_eq!(
            session.location_error(),
            Some(GeoError::PermissionDenied.user_message())
        );
        assert_eq!(session.user_location(), None);
    }

    #[test]
    fn test_edit_profile_returns_to_origin() {
        let mut session = loaded_session();

        session.navigate_my_profile();
        session.navigate_settings();
        session.navigate_edit_profile(None);
        assert_eq!(session.view(), View::EditProfile);
        session.back_from_edit();
        assert_eq!(session.view(), View::Settings);

        session.back_to_profile();
        session.navigate_my_caregiver_profile();
        session.navigate_edit_profile(Some(CareCategory::Children));
        assert_eq!(session.editing_category(), Some(CareCategory::Children));
        session.back_from_edit();
        assert_eq!(session.view(), View::MyCaregiverProfile);
    }

    #[test]
    fn test_legal_document_flow() {
        let mut session = loaded_session();
        session.navigate_my_profile();
        session.navigate_settings();
        session.navigate_legal_info();

        session.open_legal_document("nope");
        assert_eq!(session.view(), View::LegalInfo);

        session.open_legal_document("privacy");
        assert_eq!(session.view(), View::LegalDocument);
        assert_eq!(session.legal_document().unwrap().id, "privacy");

        session.back_to_legal_info();
        assert_eq!(session.view(), View::LegalInfo);
        assert_eq!(session.legal_document(), None);
    }

    #[test]
    fn test_confirmation_prompt_flow() {
        let mut session = loaded_session();
        session.navigate_my_profile();
        session.navigate_settings();

        session.request_logout();
        let prompt = session.confirmation().unwrap();
        assert_eq!(prompt.action, ConfirmAction::Logout);

        session.dismiss_prompt();
        assert_eq!(session.confirmation(), None);
        assert_eq!(session.view(), View::Settings);

        session.request_delete_account();
        session.confirm_prompt();
        assert_eq!(session.confirmation(), None);
        assert_eq!(session.view(), View::Landing);
    }

    #[test]
    fn test_scroll_epoch_bumps_on_navigation() {
        let mut session = loaded_session();
        let before = session.scroll_epoch();
        session.show_all_providers();
        assert!(session.scroll_epoch() > before);
    }

    #[test]
    fn test_unsupported_location_banner() {
        let mut session = loaded_session();
        session.mark_location_unsupported();
        assert_eq!(session.location_error(), Some(UNSUPPORTED_MESSAGE));
    }
}
