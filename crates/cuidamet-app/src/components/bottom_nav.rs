//! Bottom navigation bar with the unread badge.

use cuidamet_session::View;
use dioxus::prelude::*;

use crate::state::AppContext;

#[component]
pub fn BottomNav(current: View, unread: u32) -> Element {
    let mut ctx = use_context::<AppContext>();

    let items: [(View, &str, &str); 5] = [
        (View::Landing, "🏠", "Inicio"),
        (View::Favorites, "♥", "Favoritos"),
        (View::Offer, "✚", "Ofrecer"),
        (View::Inbox, "✉", "Mensajes"),
        (View::MyProfile, "👤", "Perfil"),
    ];

    rsx! {
        nav { class: "bottom-nav",
            for (target, icon, label) in items {
                {
                    let item_class = if current == target {
                        "bottom-nav-item active"
                    } else {
                        "bottom-nav-item"
                    };
                    let with_badge = target == View::Inbox && unread > 0;
                    rsx! {
                        button {
                            key: "{label}",
                            class: "{item_class}",
                            onclick: move |_| {
                                let mut session = ctx.session.write();
                                match target {
                                    View::Favorites => session.navigate_favorites(),
                                    View::Offer => session.navigate_offer(),
                                    View::Inbox => session.navigate_inbox(),
                                    View::MyProfile => session.navigate_my_profile(),
                                    _ => session.navigate_home(),
                                }
                            },
                            span { class: "bottom-nav-icon",
                                "{icon}"
                                if with_badge {
                                    span { class: "unread-badge", "{unread}" }
                                }
                            }
                            span { class: "bottom-nav-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
