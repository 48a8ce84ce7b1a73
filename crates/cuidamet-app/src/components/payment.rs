//! Payment step: method selection and the simulated charge.

use cuidamet_core::booking::BookingDetails;
use cuidamet_core::provider::Provider;
use dioxus::prelude::*;

use super::cost_breakdown::CostBreakdown;
use super::page_header::PageHeader;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PaymentMethod {
    Card,
    PayPal,
    GooglePay,
    Bizum,
}

#[component]
pub fn PaymentPage(
    provider: Provider,
    booking: BookingDetails,
    on_back: EventHandler<()>,
    on_pay: EventHandler<()>,
) -> Element {
    let mut method = use_signal(|| PaymentMethod::Card);
    let mut processing = use_signal(|| false);
    let mut details_visible = use_signal(|| false);

    let methods: [(PaymentMethod, &str); 4] = [
        (PaymentMethod::Card, "Tarjeta de crédito/débito"),
        (PaymentMethod::PayPal, "PayPal"),
        (PaymentMethod::GooglePay, "Google / Apple Pay"),
        (PaymentMethod::Bizum, "Bizum"),
    ];

    let total = format!("{:.2}€", booking.total_cost);
    let pay_label = if *processing.read() {
        "Procesando pago…".to_string()
    } else {
        format!("Pagar {total} de forma segura")
    };
    let selected = *method.read();

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Realizar Pago", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    div { class: "payment-total",
                        div {
                            h3 { "Total a pagar" }
                            p { class: "muted", "Reserva con {provider.name}" }
                        }
                        span { class: "payment-amount", "{total}" }
                    }
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            let visible = *details_visible.read();
                            details_visible.set(!visible);
                        },
                        if *details_visible.read() { "Ocultar desglose" } else { "Ver desglose" }
                    }
                    if *details_visible.read() {
                        CostBreakdown { booking: booking.clone() }
                    }
                }

                section { class: "card",
                    h3 { "Método de pago" }
                    div { class: "payment-methods",
                        for (option, label) in methods {
                            {
                                let row_class = if selected == option {
                                    "payment-method active"
                                } else {
                                    "payment-method"
                                };
                                rsx! {
                                    button {
                                        key: "{label}",
                                        class: "{row_class}",
                                        onclick: move |_| method.set(option),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                    {match selected {
                        PaymentMethod::Card => rsx! {
                            div { class: "payment-form",
                                label { class: "field-label", "Número de tarjeta" }
                                input { class: "field-input", placeholder: "•••• •••• •••• ••••" }
                                div { class: "field-row",
                                    div {
                                        label { class: "field-label", "Caducidad" }
                                        input { class: "field-input", placeholder: "MM / AA" }
                                    }
                                    div {
                                        label { class: "field-label", "CVC" }
                                        input { class: "field-input", placeholder: "•••" }
                                    }
                                }
                            }
                        },
                        PaymentMethod::Bizum => rsx! {
                            div { class: "payment-form",
                                label { class: "field-label", "Número de teléfono" }
                                input { class: "field-input", placeholder: "600 000 000" }
                            }
                        },
                        _ => rsx! {
                            p { class: "muted",
                                "Serás redirigido para completar el pago de forma segura."
                            }
                        },
                    }}
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    disabled: *processing.read(),
                    onclick: move |_| {
                        processing.set(true);
                        on_pay.call(());
                    },
                    "🔒 {pay_label}"
                }
            }
        }
    }
}
