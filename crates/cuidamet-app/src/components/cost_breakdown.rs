//! Cost breakdown shared by the booking, payment, and confirmation
//! screens.

use cuidamet_core::booking::BookingDetails;
use dioxus::prelude::*;

#[component]
pub fn CostBreakdown(booking: BookingDetails) -> Element {
    let subtotal = format!("{:.2}€", booking.subtotal());
    let insurance = (booking.insurance_cost > 0.0)
        .then(|| format!("+ {:.2}€", booking.insurance_cost));
    let discount = (booking.discount_amount > 0.0)
        .then(|| format!("- {:.2}€", booking.discount_amount));
    let total = format!("{:.2}€", booking.total_cost);

    rsx! {
        div { class: "cost-breakdown",
            div { class: "cost-line",
                span { "Subtotal del servicio" }
                span { "{subtotal}" }
            }
            if let Some(ref insurance) = insurance {
                div { class: "cost-line",
                    span { "Seguro adicional" }
                    span { "{insurance}" }
                }
            }
            if let Some(ref discount) = discount {
                div { class: "cost-line discount",
                    span { "Descuento" }
                    span { "{discount}" }
                }
            }
            div { class: "cost-line total",
                span { "Total" }
                span { "{total}" }
            }
        }
    }
}
