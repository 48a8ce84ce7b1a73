//! Full provider profile: loading state, missing-profile fallback, and
//! the booking/contact action bar.

use cuidamet_core::provider::{Provider, ProviderId};
use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn ProfileDetailPage(
    provider: Option<Provider>,
    loading: bool,
    on_back: EventHandler<()>,
    on_contact: EventHandler<ProviderId>,
    on_book: EventHandler<ProviderId>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "page fullscreen",
                PageHeader { title: "Cargando Perfil…", on_back: move |_| on_back.call(()) }
                div { class: "loading-block",
                    div { class: "spinner" }
                }
            }
        };
    }

    let Some(provider) = provider else {
        return rsx! {
            div { class: "page fullscreen",
                PageHeader { title: "Error", on_back: move |_| on_back.call(()) }
                div { class: "empty-block",
                    p { class: "empty-title", "No se pudo encontrar el perfil" }
                    p { "Lo sentimos, no pudimos cargar los datos del cuidador." }
                    button {
                        class: "button primary",
                        onclick: move |_| on_back.call(()),
                        "Volver"
                    }
                }
            }
        };
    };

    let id = provider.id;
    let distance = provider.distance_km.map(|km| format!("a {km:.1} km de ti"));

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Perfil", on_back: move |_| on_back.call(()) }
            main { class: "page-body profile-detail",
                section { class: "profile-hero",
                    img { class: "profile-photo", src: "{provider.photo_url}", alt: "{provider.name}" }
                    h2 { class: "profile-name", "{provider.name}" }
                    p { class: "profile-meta",
                        "★ {provider.rating:.1} · {provider.reviews_count} valoraciones"
                    }
                    p { class: "profile-location",
                        "{provider.location}"
                        if let Some(ref distance) = distance {
                            span { " · {distance}" }
                        }
                    }
                    div { class: "badge-row",
                        for badge in provider.badges.iter() {
                            span { key: "{badge}", class: "badge", "{badge}" }
                        }
                    }
                }

                section { class: "profile-section",
                    h3 { "Sobre este cuidador" }
                    for description in provider.descriptions.iter() {
                        div { key: "{description.category}", class: "profile-description",
                            h4 { "{description.category}" }
                            p { "{description.text}" }
                        }
                    }
                }

                section { class: "profile-section",
                    h3 { "Servicios" }
                    ul { class: "service-list",
                        for service in provider.services.iter() {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }

                section { class: "profile-section",
                    h3 { "Verificaciones" }
                    ul { class: "verification-list",
                        for verification in provider.verifications.iter() {
                            li { key: "{verification}", "✓ {verification}" }
                        }
                    }
                }

                section { class: "profile-section",
                    h3 { "Valoraciones" }
                    if provider.reviews.is_empty() {
                        p { class: "muted", "Todavía no hay valoraciones escritas." }
                    }
                    for review in provider.reviews.iter() {
                        div { key: "{review.id}", class: "review-card",
                            div { class: "review-head",
                                img { class: "review-avatar", src: "{review.author_photo_url}", alt: "{review.author_name}" }
                                div {
                                    p { class: "review-author", "{review.author_name}" }
                                    p { class: "review-date", "{review.date}" }
                                }
                                span { class: "review-rating", "★ {review.rating}" }
                            }
                            p { class: "review-comment", "{review.comment}" }
                        }
                    }
                }
            }

            footer { class: "profile-action-bar",
                div { class: "profile-rate",
                    span { class: "profile-rate-amount", "{provider.hourly_rate:.0} €" }
                    span { class: "muted", " /hora" }
                }
                button {
                    class: "button secondary",
                    onclick: move |_| on_contact.call(id),
                    "Contactar"
                }
                button {
                    class: "button primary",
                    onclick: move |_| on_book.call(id),
                    "Reservar"
                }
            }
        }
    }
}
