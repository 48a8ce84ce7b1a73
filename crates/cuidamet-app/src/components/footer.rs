//! Informational footer with secondary navigation links.

use cuidamet_session::View;
use dioxus::prelude::*;

use crate::state::AppContext;

#[component]
pub fn Footer() -> Element {
    let mut ctx = use_context::<AppContext>();

    let columns: [(&str, &[(View, &str)]); 3] = [
        (
            "Cuidamet",
            &[
                (View::About, "Sobre nosotros"),
                (View::Blog, "Blog"),
                (View::Contact, "Contacto"),
            ],
        ),
        (
            "Servicios",
            &[
                (View::Providers, "Buscar cuidadores"),
                (View::Offer, "Ofrecer mis servicios"),
                (View::Prices, "Precios"),
            ],
        ),
        (
            "Confianza",
            &[
                (View::Security, "Seguridad"),
                (View::Verification, "Proceso de verificación"),
                (View::Help, "Centro de ayuda"),
            ],
        ),
    ];

    rsx! {
        footer { class: "app-footer",
            div { class: "footer-columns",
                for (heading, links) in columns {
                    div { key: "{heading}", class: "footer-column",
                        h4 { class: "footer-heading", "{heading}" }
                        for (target, label) in links.iter().copied() {
                            button {
                                key: "{label}",
                                class: "footer-link",
                                onclick: move |_| ctx.session.write().footer_navigate(target),
                                "{label}"
                            }
                        }
                    }
                }
            }
            p { class: "footer-copyright", "© 2025 Cuidamet. Cuidado de confianza, cerca de ti." }
        }
    }
}
