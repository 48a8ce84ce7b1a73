//! The user's own caregiver listing, with per-vertical edit entry
//! points.

use cuidamet_core::provider::CareCategory;
use dioxus::prelude::*;

use super::page_header::PageHeader;
use crate::user::DEMO_USER;

#[component]
pub fn MyCaregiverProfilePage(
    on_back: EventHandler<()>,
    on_edit: EventHandler<CareCategory>,
) -> Element {
    let rate = format!("{:.0} €/h", DEMO_USER.hourly_rate);
    let rating = format!(
        "★ {:.1} · {} valoraciones",
        DEMO_USER.rating, DEMO_USER.reviews_count
    );

    rsx! {
        div { class: "page",
            PageHeader { title: "Mi Perfil de Cuidador", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card profile-hub-card",
                    img { class: "profile-photo small", src: "{DEMO_USER.photo_url}", alt: "{DEMO_USER.name}" }
                    div {
                        h2 { "{DEMO_USER.name}" }
                        p { class: "muted", "{DEMO_USER.location} · {rate}" }
                        p { class: "muted", "{rating}" }
                    }
                }

                section { class: "card",
                    h3 { "Experiencia" }
                    p { "{DEMO_USER.experience}" }
                    h3 { "Servicios" }
                    ul { class: "service-list",
                        for service in DEMO_USER.services {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }

                section { class: "card",
                    h3 { "Mis categorías" }
                    for category in CareCategory::ALL {
                        {
                            let active = DEMO_USER.categories.contains(&category);
                            let status = if active { "Activa" } else { "Sin publicar" };
                            rsx! {
                                div { key: "{category}", class: "menu-item static",
                                    div {
                                        p { "{category}" }
                                        p { class: "muted", "{status}" }
                                    }
                                    button {
                                        class: "link-button",
                                        onclick: move |_| on_edit.call(category),
                                        "Editar"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
