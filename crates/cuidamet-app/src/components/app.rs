//! Root component: exhaustive screen dispatch, shared chrome, and the
//! confirmation modal.

use cuidamet_core::booking::BookingDetails;
use cuidamet_core::provider::{CareCategory, CategoryFilter, ProviderId};
use cuidamet_session::Screen;
use dioxus::prelude::*;

use crate::state::AppContext;

#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(AppContext::new);

    use_effect(move || {
        ctx.start_initial_load();
    });

    let session = ctx.session.read();
    let view = session.view();
    let screen = session.screen();
    let unread = session.unread_count() as u32;
    let confirmation = session.confirmation().copied();
    let scroll_epoch = session.scroll_epoch();
    drop(session);

    rsx! {
        div { class: "app-shell",
            div { key: "content-{scroll_epoch}", class: "app-content",
                PageRouter { screen }
                if view.shows_footer() {
                    super::footer::Footer {}
                }
            }
            if view.shows_bottom_nav() {
                super::bottom_nav::BottomNav { current: view, unread }
            }
            if let Some(prompt) = confirmation {
                super::confirmation_modal::ConfirmationModal { prompt }
            }
        }
    }
}

/// Maps the derived [`Screen`] to a page component and wires its
/// callbacks to the session's named transitions. One arm per variant,
/// checked exhaustively.
#[component]
fn PageRouter(screen: Screen) -> Element {
    let mut ctx = use_context::<AppContext>();

    match screen {
        Screen::Landing => rsx! {
            super::landing::LandingPage {
                on_category_select: move |category: CareCategory| {
                    ctx.session.write().select_category(category)
                },
                on_show_all: move |_| ctx.session.write().show_all_providers(),
                on_navigate_map: move |_| ctx.session.write().navigate_map(),
                on_search: move |query: String| ctx.session.write().search(&query),
            }
        },
        Screen::ProviderList {
            providers,
            favorites_mode,
            profile_origin,
            loading,
        } => {
            let session = ctx.session.read();
            let favorites: Vec<ProviderId> = session.favorites().iter().copied().collect();
            let selected = session.selected_category();
            let query = session.search_query().to_string();
            let location_error = session.location_error().map(str::to_string);
            let has_location = session.user_location().is_some();
            drop(session);
            rsx! {
                super::provider_list::ProviderListPage {
                    providers,
                    favorites_mode,
                    profile_origin,
                    loading,
                    favorites,
                    selected,
                    query,
                    location_error,
                    has_location,
                    on_toggle_favorite: move |id: ProviderId| {
                        ctx.session.write().toggle_favorite(id)
                    },
                    on_view_profile: move |id: ProviderId| ctx.view_profile(id),
                    on_select_filter: move |filter: CategoryFilter| {
                        ctx.session.write().set_category_filter(filter)
                    },
                    on_query_change: move |query: String| {
                        ctx.session.write().set_search_query(query)
                    },
                    on_back: move |_| ctx.session.write().back_to_profile(),
                }
            }
        }
        Screen::ProfileDetail { provider, loading } => rsx! {
            super::profile_detail::ProfileDetailPage {
                provider,
                loading,
                on_back: move |_| ctx.session.write().back_to_list(),
                on_contact: move |id: ProviderId| ctx.session.write().contact_provider(id),
                on_book: move |id: ProviderId| ctx.session.write().start_booking(id),
            }
        },
        Screen::Offer => rsx! {
            super::offer::OfferServicePage {
                on_close: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Inbox { threads } => rsx! {
            super::inbox::InboxPage {
                threads,
                on_open_chat: move |id: u32| ctx.session.write().open_chat(id),
            }
        },
        Screen::Chat { thread } => {
            let chat_id = thread.id;
            rsx! {
                super::chat_view::ChatPage {
                    thread,
                    on_back: move |_| ctx.session.write().back_to_inbox(),
                    on_send: move |text: String| {
                        ctx.session.write().send_message(chat_id, &text)
                    },
                }
            }
        }
        Screen::MyProfile => rsx! {
            super::my_profile::MyProfilePage {
                on_navigate_favorites: move |_| ctx.session.write().navigate_favorites(),
                on_navigate_settings: move |_| ctx.session.write().navigate_settings(),
                on_navigate_caregiver_profile: move |_| {
                    ctx.session.write().navigate_my_caregiver_profile()
                },
                on_navigate_support: move |_| ctx.session.write().navigate_support(),
            }
        },
        Screen::Map { providers } => {
            let session = ctx.session.read();
            let user_location = session.user_location();
            let location_loading = session.is_location_loading();
            let location_error = session.location_error().map(str::to_string);
            drop(session);
            rsx! {
                super::map_view::MapPage {
                    providers,
                    user_location,
                    location_loading,
                    location_error,
                    on_view_profile: move |id: ProviderId| ctx.view_profile(id),
                    on_back: move |_| ctx.session.write().navigate_home(),
                    on_request_location: move |_| ctx.request_location(),
                }
            }
        }
        Screen::Prices => rsx! {
            super::static_pages::PricesPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Security => rsx! {
            super::static_pages::SecurityPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Verification => rsx! {
            super::static_pages::VerificationPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Help => rsx! {
            super::static_pages::HelpCenterPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::About => rsx! {
            super::static_pages::AboutUsPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Blog => rsx! {
            super::static_pages::BlogPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Contact => rsx! {
            super::static_pages::ContactPage {
                on_back: move |_| ctx.session.write().navigate_home(),
            }
        },
        Screen::Settings => rsx! {
            super::settings::SettingsPage {
                on_back: move |_| ctx.session.write().back_to_profile(),
                on_navigate_edit_profile: move |_| {
                    ctx.session.write().navigate_edit_profile(None)
                },
                on_navigate_security: move |_| {
                    ctx.session.write().navigate_security_settings()
                },
                on_navigate_notifications: move |_| {
                    ctx.session.write().navigate_notifications()
                },
                on_navigate_legal: move |_| ctx.session.write().navigate_legal_info(),
                on_logout: move |_| ctx.session.write().request_logout(),
            }
        },
        Screen::EditProfile { category } => rsx! {
            super::edit_profile::EditProfilePage {
                editing_category: category,
                on_back: move |_| ctx.session.write().back_from_edit(),
            }
        },
        Screen::SecuritySettings => rsx! {
            super::settings::SecuritySettingsPage {
                on_back: move |_| ctx.session.write().back_to_settings(),
                on_delete_account: move |_| ctx.session.write().request_delete_account(),
            }
        },
        Screen::Notifications => rsx! {
            super::settings::NotificationsPage {
                on_back: move |_| ctx.session.write().back_to_settings(),
            }
        },
        Screen::LegalInfo => rsx! {
            super::legal::LegalInfoPage {
                on_back: move |_| ctx.session.write().back_to_settings(),
                on_open_document: move |id: String| {
                    ctx.session.write().open_legal_document(&id)
                },
            }
        },
        Screen::LegalDocumentPage { document } => rsx! {
            super::legal::LegalDocumentPage {
                document: *document,
                on_back: move |_| ctx.session.write().back_to_legal_info(),
            }
        },
        Screen::MyCaregiverProfile => rsx! {
            super::caregiver_profile::MyCaregiverProfilePage {
                on_back: move |_| ctx.session.write().back_to_profile(),
                on_edit: move |category: CareCategory| {
                    ctx.session.write().navigate_edit_profile(Some(category))
                },
            }
        },
        Screen::BookingPage { provider } => rsx! {
            super::booking::BookingPage {
                provider,
                on_back: move |_| ctx.session.write().back_from_booking(),
                on_proceed: move |details: BookingDetails| {
                    ctx.session.write().proceed_to_payment(details)
                },
            }
        },
        Screen::Payment { provider, booking } => rsx! {
            super::payment::PaymentPage {
                provider,
                booking,
                on_back: move |_| ctx.session.write().back_from_payment(),
                on_pay: move |_| ctx.process_payment(),
            }
        },
        Screen::BookingConfirmed { provider, booking } => rsx! {
            super::confirmation_page::ConfirmationPage {
                provider,
                booking,
                on_go_to_chat: move |_| ctx.session.write().finish_booking(),
            }
        },
        Screen::Support => rsx! {
            super::support::SupportPage {
                on_back: move |_| ctx.session.write().back_to_profile(),
                on_navigate_chat: move |_| ctx.session.write().navigate_support_chat(),
                on_navigate_email: move |_| ctx.session.write().navigate_support_email(),
            }
        },
        Screen::SupportChat => rsx! {
            super::support_chat::SupportChatPage {
                on_back: move |_| ctx.session.write().back_to_support(),
            }
        },
        Screen::SupportEmail => rsx! {
            super::support::SupportEmailPage {
                on_back: move |_| ctx.session.write().back_to_support(),
            }
        },
        Screen::Blank => rsx! {},
    }
}
