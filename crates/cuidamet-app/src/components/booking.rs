//! Booking form: a concrete slot or a prepaid hour pack, plus the
//! optional insurance add-on.

use chrono::{NaiveDate, NaiveTime};
use cuidamet_core::booking::{self, BookingDetails, HOUR_PACK_HOURS};
use cuidamet_core::provider::Provider;
use dioxus::prelude::*;

use super::cost_breakdown::CostBreakdown;
use super::page_header::PageHeader;

const TIME_OPTIONS: [&str; 14] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
    "17:00", "18:00", "19:00", "20:00", "21:00",
];

#[component]
pub fn BookingPage(
    provider: Provider,
    on_back: EventHandler<()>,
    on_proceed: EventHandler<BookingDetails>,
) -> Element {
    let mut pack_mode = use_signal(|| false);
    let mut date = use_signal(String::new);
    let mut start = use_signal(|| "16:00".to_string());
    let mut end = use_signal(|| "19:00".to_string());
    let mut insurance = use_signal(|| false);

    let quote = if *pack_mode.read() {
        Some(booking::quote_hour_pack(&provider, *insurance.read()))
    } else {
        let parsed_date = NaiveDate::parse_from_str(&date.read(), "%Y-%m-%d").ok();
        let parsed_start = NaiveTime::parse_from_str(&start.read(), "%H:%M").ok();
        let parsed_end = NaiveTime::parse_from_str(&end.read(), "%H:%M").ok();
        match (parsed_date, parsed_start, parsed_end) {
            (Some(day), Some(from), Some(to)) => {
                booking::quote_slot(&provider, day, from, to, *insurance.read()).ok()
            }
            _ => None,
        }
    };
    let invalid_range = !*pack_mode.read() && !date.read().is_empty() && quote.is_none();

    let pack_hours = HOUR_PACK_HOURS as u32;
    let pack_label = format!("Pack de {pack_hours} horas");
    let pack_blurb = format!(
        "Compra un pack de {pack_hours} horas con un 10% de descuento y \
         acuerda los días directamente con {} por el chat.",
        provider.name
    );
    let insurance_label =
        format!("Añadir seguro adicional (+{:.2} €)", booking::INSURANCE_COST);

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Reservar", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card booking-provider",
                    img { class: "booking-avatar", src: "{provider.photo_url}", alt: "{provider.name}" }
                    div {
                        h3 { "{provider.name}" }
                        p { class: "muted", "{provider.hourly_rate:.0} €/h · {provider.location}" }
                    }
                }

                div { class: "segmented",
                    button {
                        class: if *pack_mode.read() { "segment" } else { "segment active" },
                        onclick: move |_| pack_mode.set(false),
                        "Fecha y hora"
                    }
                    button {
                        class: if *pack_mode.read() { "segment active" } else { "segment" },
                        onclick: move |_| pack_mode.set(true),
                        "{pack_label}"
                    }
                }

                if *pack_mode.read() {
                    section { class: "card",
                        p { "{pack_blurb}" }
                    }
                } else {
                    section { class: "card booking-form",
                        label { class: "field-label", "Fecha" }
                        input {
                            r#type: "date",
                            class: "field-input",
                            value: "{date}",
                            oninput: move |evt| date.set(evt.value()),
                        }
                        div { class: "field-row",
                            div {
                                label { class: "field-label", "Desde" }
                                select {
                                    class: "field-input",
                                    value: "{start}",
                                    oninput: move |evt| start.set(evt.value()),
                                    for option in TIME_OPTIONS {
                                        option { key: "{option}", value: "{option}", "{option}" }
                                    }
                                }
                            }
                            div {
                                label { class: "field-label", "Hasta" }
                                select {
                                    class: "field-input",
                                    value: "{end}",
                                    oninput: move |evt| end.set(evt.value()),
                                    for option in TIME_OPTIONS {
                                        option { key: "{option}", value: "{option}", "{option}" }
                                    }
                                }
                            }
                        }
                        if invalid_range {
                            p { class: "field-error",
                                "La hora de fin debe ser posterior a la de inicio."
                            }
                        }
                    }
                }

                section { class: "card",
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: *insurance.read(),
                            oninput: move |evt| insurance.set(evt.checked()),
                        }
                        span { "{insurance_label}" }
                    }
                }

                if let Some(ref quote) = quote {
                    section { class: "card",
                        CostBreakdown { booking: quote.clone() }
                    }
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    disabled: quote.is_none(),
                    onclick: move |_| {
                        if let Some(ref details) = quote {
                            on_proceed.call(details.clone());
                        }
                    },
                    "Continuar al pago"
                }
            }
        }
    }
}
