//! Landing page: hero search plus the three category entry points.

use cuidamet_core::provider::CareCategory;
use dioxus::prelude::*;

#[component]
pub fn LandingPage(
    on_category_select: EventHandler<CareCategory>,
    on_show_all: EventHandler<()>,
    on_navigate_map: EventHandler<()>,
    on_search: EventHandler<String>,
) -> Element {
    let mut query = use_signal(String::new);

    let categories: [(CareCategory, &str, &str); 3] = [
        (
            CareCategory::Elderly,
            "👵",
            "Compañía, medicación y apoyo en el día a día.",
        ),
        (
            CareCategory::Children,
            "🧒",
            "Canguros de confianza, deberes y juego creativo.",
        ),
        (
            CareCategory::Pets,
            "🐾",
            "Paseos, visitas y cuidado nocturno para tu mascota.",
        ),
    ];

    rsx! {
        div { class: "landing",
            section { class: "landing-hero",
                h1 { class: "landing-title", "Cuidado de confianza, cerca de ti" }
                p { class: "landing-subtitle",
                    "Encuentra cuidadores verificados para mayores, niños y mascotas."
                }
                form {
                    class: "landing-search",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        let text = query.read().clone();
                        if !text.trim().is_empty() {
                            on_search.call(text);
                        }
                    },
                    input {
                        class: "landing-search-input",
                        placeholder: "¿Qué necesitas? P. ej. canguro en Malasaña",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "button primary", r#type: "submit", "Buscar" }
                }
            }

            section { class: "landing-categories",
                for (category, icon, blurb) in categories {
                    button {
                        key: "{category}",
                        class: "category-card",
                        onclick: move |_| on_category_select.call(category),
                        span { class: "category-card-icon", "{icon}" }
                        span { class: "category-card-title", "{category}" }
                        span { class: "category-card-blurb", "{blurb}" }
                    }
                }
            }

            section { class: "landing-actions",
                button {
                    class: "button primary wide",
                    onclick: move |_| on_show_all.call(()),
                    "Ver todos los cuidadores"
                }
                button {
                    class: "button secondary wide",
                    onclick: move |_| on_navigate_map.call(()),
                    "Explorar en el mapa"
                }
            }
        }
    }
}
