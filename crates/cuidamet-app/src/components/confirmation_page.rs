//! Booking confirmed: summary and the jump into the provider's chat.

use chrono::{Datelike, NaiveDate};
use cuidamet_core::booking::BookingDetails;
use cuidamet_core::provider::Provider;
use dioxus::prelude::*;

use super::cost_breakdown::CostBreakdown;

const WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];
const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "octubre", "noviembre", "diciembre",
];

/// Long-form Spanish date, e.g. "sábado, 14 de junio de 2025".
fn format_date_es(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}

#[component]
pub fn ConfirmationPage(
    provider: Provider,
    booking: BookingDetails,
    on_go_to_chat: EventHandler<()>,
) -> Element {
    let hours = booking.hours;
    let when = match booking.date {
        Some(date) => format_date_es(date),
        None => format!("Pack de {hours:.0} horas"),
    };
    let slot = match (booking.start_time, booking.end_time) {
        (Some(start), Some(end)) => Some(format!(
            "De {} a {} ({hours:.1} horas)",
            start.format("%H:%M"),
            end.format("%H:%M")
        )),
        _ => None,
    };

    rsx! {
        div { class: "page fullscreen",
            main { class: "page-body centered",
                div { class: "card confirmation-card",
                    span { class: "confirmation-check", "✔" }
                    h1 { "¡Reserva Confirmada!" }
                    p {
                        "Has reservado con éxito a "
                        strong { "{provider.name}" }
                        ". Ya puedes contactar para organizar los últimos detalles."
                    }
                    div { class: "confirmation-summary",
                        p { "📅 {when}" }
                        if let Some(ref slot) = slot {
                            p { "🕑 {slot}" }
                        }
                    }
                    CostBreakdown { booking: booking.clone() }
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    onclick: move |_| on_go_to_chat.call(()),
                    "Ir al chat"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(format_date_es(date), "sábado, 14 de junio de 2025");
    }
}
