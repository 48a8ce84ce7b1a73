//! Support hub and the email contact form.

use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn SupportPage(
    on_back: EventHandler<()>,
    on_navigate_chat: EventHandler<()>,
    on_navigate_email: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Ayuda y Soporte", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                p { class: "muted",
                    "¿Necesitas ayuda? Elige cómo prefieres hablar con nosotros."
                }
                div { class: "card menu",
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_chat.call(()),
                        div {
                            p { "💬 Chat con Cuidi" }
                            p { class: "muted", "Respuesta inmediata de nuestro asistente" }
                        }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_email.call(()),
                        div {
                            p { "✉ Escríbenos un correo" }
                            p { class: "muted", "Te respondemos en menos de 24 horas" }
                        }
                        span { class: "chevron", "›" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SupportEmailPage(on_back: EventHandler<()>) -> Element {
    let mut subject = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let can_send = !subject.read().trim().is_empty() && !body.read().trim().is_empty();

    if *sent.read() {
        return rsx! {
            div { class: "page fullscreen",
                PageHeader { title: "Soporte por Correo", on_back: move |_| on_back.call(()) }
                main { class: "page-body centered",
                    div { class: "card confirmation-card",
                        span { class: "confirmation-check", "✔" }
                        h2 { "Mensaje enviado" }
                        p { class: "muted",
                            "Gracias por escribirnos. Te responderemos en menos de 24 horas."
                        }
                        button {
                            class: "button primary wide",
                            onclick: move |_| on_back.call(()),
                            "Volver a soporte"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Soporte por Correo", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    label { class: "field-label", "Asunto" }
                    input {
                        class: "field-input",
                        value: "{subject}",
                        oninput: move |evt| subject.set(evt.value()),
                    }
                    label { class: "field-label", "¿En qué podemos ayudarte?" }
                    textarea {
                        class: "field-input tall",
                        value: "{body}",
                        oninput: move |evt| body.set(evt.value()),
                    }
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    disabled: !can_send,
                    onclick: move |_| sent.set(true),
                    "Enviar mensaje"
                }
            }
        }
    }
}
