//! Map screen: permission flow, provider markers, and nearby points of
//! interest. Markers are plotted by projecting coordinates onto the
//! canvas; there is no tile layer in this build.

use cuidamet_core::mock_data::MOCK_POIS;
use cuidamet_core::poi::PoiCategory;
use cuidamet_core::provider::{CareCategory, CategoryFilter, Provider, ProviderId};
use cuidamet_core::Coordinates;
use dioxus::prelude::*;

use super::page_header::PageHeader;

/// Fallback center when no position is available.
const DEFAULT_CENTER: Coordinates = Coordinates::new(40.4168, -3.7038);
/// Degrees of latitude/longitude covered by the canvas around center.
const VIEW_SPAN_DEG: f64 = 0.05;

#[component]
pub fn MapPage(
    providers: Vec<Provider>,
    user_location: Option<Coordinates>,
    location_loading: bool,
    location_error: Option<String>,
    on_view_profile: EventHandler<ProviderId>,
    on_back: EventHandler<()>,
    on_request_location: EventHandler<()>,
) -> Element {
    let mut requested = use_signal(|| false);
    let mut selected = use_signal(|| CategoryFilter::All);

    // Straight to the map once we have a fix, or once a request already
    // failed; otherwise ask for permission first.
    let ready = user_location.is_some() || location_error.is_some();

    if !ready && location_loading {
        return rsx! {
            div { class: "page fullscreen",
                div { class: "loading-block",
                    div { class: "spinner" }
                    p { "Obteniendo tu ubicación…" }
                }
            }
        };
    }

    if !ready && !*requested.read() {
        return rsx! {
            div { class: "page fullscreen",
                div { class: "permission-card",
                    span { class: "permission-icon", "📍" }
                    h1 { "Encuentra cuidadores cerca de ti" }
                    p {
                        "Para mostrarte los cuidadores más cercanos, necesitamos \
                         acceder a tu ubicación. Tu ubicación solo se usará para \
                         esta búsqueda."
                    }
                    button {
                        class: "button primary wide",
                        onclick: move |_| {
                            requested.set(true);
                            on_request_location.call(());
                        },
                        "Permitir acceso a la ubicación"
                    }
                    button {
                        class: "button secondary wide",
                        onclick: move |_| on_back.call(()),
                        "Volver"
                    }
                }
            }
        };
    }

    let center = user_location.unwrap_or(DEFAULT_CENTER);
    let filter = *selected.read();
    let visible: Vec<Provider> = providers
        .into_iter()
        .filter(|provider| filter.matches(provider))
        .collect();
    let pois: Vec<_> = MOCK_POIS
        .iter()
        .filter(|poi| match filter {
            CategoryFilter::All => false,
            CategoryFilter::Only(category) => poi.category == poi_category(category),
        })
        .collect();

    let filters: [(CategoryFilter, &str); 4] = [
        (CategoryFilter::Only(CareCategory::Elderly), "Mayores"),
        (CategoryFilter::Only(CareCategory::Children), "Niños"),
        (CategoryFilter::Only(CareCategory::Pets), "Mascotas"),
        (CategoryFilter::All, "Todos"),
    ];

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Explora en el Mapa", on_back: move |_| on_back.call(()) }
            if let Some(ref error) = location_error {
                div { class: "banner warning", p { "{error}" } }
            }
            div { class: "map-canvas",
                if user_location.is_some() {
                    span {
                        class: "map-marker user",
                        style: marker_style(center, center),
                        title: "Tu ubicación",
                    }
                }
                for provider in visible {
                    {
                        let id = provider.id;
                        let style = marker_style(center, provider.coordinates);
                        rsx! {
                            button {
                                key: "p{id}",
                                class: "map-marker provider",
                                style: "{style}",
                                title: "{provider.name}",
                                onclick: move |_| on_view_profile.call(id),
                                img { src: "{provider.photo_url}", alt: "{provider.name}" }
                            }
                        }
                    }
                }
                for poi in pois.iter() {
                    span {
                        key: "poi{poi.id}",
                        class: "map-marker poi",
                        style: marker_style(center, poi.coordinates),
                        title: "{poi.name} · {poi.kind}",
                        "•"
                    }
                }
            }
            footer { class: "map-footer",
                h3 { "Filtra por Servicio" }
                p { class: "muted", "Pulsa una categoría para ver solo esos cuidadores." }
                div { class: "map-filter-row",
                    for (filter_option, label) in filters {
                        {
                            let chip_class = if filter == filter_option {
                                "category-chip active"
                            } else {
                                "category-chip"
                            };
                            rsx! {
                                button {
                                    key: "{label}",
                                    class: "{chip_class}",
                                    onclick: move |_| selected.set(filter_option),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn poi_category(category: CareCategory) -> PoiCategory {
    match category {
        CareCategory::Elderly => PoiCategory::Elderly,
        CareCategory::Children => PoiCategory::Children,
        CareCategory::Pets => PoiCategory::Pets,
    }
}

/// Project a coordinate into percentage offsets on the canvas, clamped
/// to its edges.
fn marker_style(center: Coordinates, point: Coordinates) -> String {
    let x = 50.0 + (point.longitude - center.longitude) / VIEW_SPAN_DEG * 50.0;
    let y = 50.0 - (point.latitude - center.latitude) / VIEW_SPAN_DEG * 50.0;
    format!(
        "left: {:.1}%; top: {:.1}%;",
        x.clamp(2.0, 98.0),
        y.clamp(2.0, 98.0)
    )
}
