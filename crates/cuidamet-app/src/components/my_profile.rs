//! Profile hub: account card and entry points into favorites, the
//! caregiver profile, settings, and support.

use dioxus::prelude::*;

use crate::user::DEMO_USER;

#[component]
pub fn MyProfilePage(
    on_navigate_favorites: EventHandler<()>,
    on_navigate_settings: EventHandler<()>,
    on_navigate_caregiver_profile: EventHandler<()>,
    on_navigate_support: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page",
            header { class: "listing-header",
                h1 { class: "page-title", "Mi Perfil" }
            }
            main { class: "page-body",
                section { class: "card profile-hub-card",
                    img { class: "profile-photo small", src: "{DEMO_USER.photo_url}", alt: "{DEMO_USER.name}" }
                    div {
                        h2 { "{DEMO_USER.name}" }
                        p { class: "muted", "{DEMO_USER.location}" }
                    }
                }
                div { class: "card menu",
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_favorites.call(()),
                        span { "♥ Mis favoritos" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_caregiver_profile.call(()),
                        span { "🧾 Mi perfil de cuidador" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_settings.call(()),
                        span { "⚙ Configuración" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_support.call(()),
                        span { "🛟 Ayuda y soporte" }
                        span { class: "chevron", "›" }
                    }
                }
            }
        }
    }
}
