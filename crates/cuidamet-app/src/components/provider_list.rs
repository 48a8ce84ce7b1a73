//! Providers / favorites listing with search, category filter, and the
//! location banner.

use cuidamet_core::provider::{CareCategory, CategoryFilter, Provider, ProviderId};
use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn ProviderListPage(
    providers: Vec<Provider>,
    favorites_mode: bool,
    profile_origin: bool,
    loading: bool,
    favorites: Vec<ProviderId>,
    selected: CategoryFilter,
    query: String,
    location_error: Option<String>,
    has_location: bool,
    on_toggle_favorite: EventHandler<ProviderId>,
    on_view_profile: EventHandler<ProviderId>,
    on_select_filter: EventHandler<CategoryFilter>,
    on_query_change: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    // Favorites reached from the profile hub drops the search chrome.
    if favorites_mode && profile_origin {
        return rsx! {
            div { class: "page",
                PageHeader { title: "Favoritos", on_back: move |_| on_back.call(()) }
                main { class: "page-body",
                    ProviderGrid {
                        providers,
                        favorites,
                        favorites_mode,
                        loading,
                        on_toggle_favorite,
                        on_view_profile,
                    }
                }
            }
        };
    }

    let filters: [(CategoryFilter, &str); 4] = [
        (CategoryFilter::All, "Todos"),
        (CategoryFilter::Only(CareCategory::Elderly), "Mayores"),
        (CategoryFilter::Only(CareCategory::Children), "Niños"),
        (CategoryFilter::Only(CareCategory::Pets), "Mascotas"),
    ];

    rsx! {
        div { class: "page",
            header { class: "listing-header",
                input {
                    class: "listing-search",
                    placeholder: "Buscar por nombre, zona o servicio…",
                    value: "{query}",
                    oninput: move |evt| on_query_change.call(evt.value()),
                }
            }
            div { class: "category-selector",
                for (filter, label) in filters {
                    {
                        let chip_class = if selected == filter {
                            "category-chip active"
                        } else {
                            "category-chip"
                        };
                        rsx! {
                            button {
                                key: "{label}",
                                class: "{chip_class}",
                                onclick: move |_| on_select_filter.call(filter),
                                "{label}"
                            }
                        }
                    }
                }
            }
            main { class: "page-body",
                {
                    let banner = if has_location { None } else { location_error.clone() };
                    rsx! {
                        if let Some(ref error) = banner {
                            div { class: "banner warning",
                                p { class: "banner-title", "Aviso de ubicación" }
                                p { "{error}" }
                            }
                        }
                    }
                }
                ProviderGrid {
                    providers,
                    favorites,
                    favorites_mode,
                    loading,
                    on_toggle_favorite,
                    on_view_profile,
                }
            }
        }
    }
}

#[component]
fn ProviderGrid(
    providers: Vec<Provider>,
    favorites: Vec<ProviderId>,
    favorites_mode: bool,
    loading: bool,
    on_toggle_favorite: EventHandler<ProviderId>,
    on_view_profile: EventHandler<ProviderId>,
) -> Element {
    if loading {
        return rsx! {
            div { class: "loading-block",
                div { class: "spinner" }
                p { "Buscando cuidadores…" }
            }
        };
    }

    if providers.is_empty() {
        return rsx! {
            div { class: "empty-block",
                if favorites_mode {
                    p { "Aún no tienes cuidadores favoritos." }
                    p { "Pulsa el corazón en un perfil para añadirlo." }
                } else {
                    p { class: "empty-title", "No se encontraron resultados" }
                    p { "Prueba a cambiar los filtros o el término de búsqueda." }
                }
            }
        };
    }

    rsx! {
        div { class: "provider-grid",
            for provider in providers {
                ProviderCard {
                    key: "{provider.id}",
                    is_favorite: favorites.contains(&provider.id),
                    provider,
                    on_toggle_favorite,
                    on_view_profile,
                }
            }
        }
    }
}

#[component]
fn ProviderCard(
    provider: Provider,
    is_favorite: bool,
    on_toggle_favorite: EventHandler<ProviderId>,
    on_view_profile: EventHandler<ProviderId>,
) -> Element {
    let id = provider.id;
    let heart_class = if is_favorite {
        "favorite-toggle active"
    } else {
        "favorite-toggle"
    };
    let distance = provider
        .distance_km
        .map(|km| format!("{km:.1} km"));

    rsx! {
        div { class: "provider-card",
            div { class: "provider-card-photo",
                img { src: "{provider.photo_url}", alt: "{provider.name}" }
                if provider.is_premium {
                    span { class: "premium-badge", "Premium" }
                }
                button {
                    class: "{heart_class}",
                    onclick: move |_| on_toggle_favorite.call(id),
                    "♥"
                }
            }
            div {
                class: "provider-card-body",
                onclick: move |_| on_view_profile.call(id),
                h3 { class: "provider-card-name", "{provider.name}" }
                p { class: "provider-card-meta",
                    "★ {provider.rating:.1} · {provider.reviews_count} valoraciones"
                }
                p { class: "provider-card-location",
                    "{provider.location}"
                    if let Some(ref distance) = distance {
                        span { class: "provider-card-distance", " · {distance}" }
                    }
                }
                p { class: "provider-card-rate", "{provider.hourly_rate:.0} €/h" }
            }
        }
    }
}
