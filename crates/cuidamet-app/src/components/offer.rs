//! Offer-your-services form for would-be caregivers.

use cuidamet_core::provider::CareCategory;
use dioxus::prelude::*;

use super::page_header::PageHeader;

const EXPERIENCE_LEVELS: [&str; 3] = [
    "Principiante (0-1 años)",
    "Intermedio (2-5 años)",
    "Experto (+5 años)",
];

#[component]
pub fn OfferServicePage(on_close: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut rate = use_signal(String::new);
    let mut experience = use_signal(|| EXPERIENCE_LEVELS[0].to_string());
    let mut categories = use_signal(Vec::<CareCategory>::new);
    let mut description = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let can_submit = !name.read().trim().is_empty()
        && !location.read().trim().is_empty()
        && !categories.read().is_empty();

    if *submitted.read() {
        return rsx! {
            div { class: "page fullscreen",
                main { class: "page-body centered",
                    div { class: "card confirmation-card",
                        span { class: "confirmation-check", "✔" }
                        h1 { "¡Perfil publicado!" }
                        p { class: "muted",
                            "Tu perfil de cuidador ya es visible para las familias \
                             de tu zona. Te avisaremos cuando alguien te contacte."
                        }
                        button {
                            class: "button primary wide",
                            onclick: move |_| on_close.call(()),
                            "Volver al inicio"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        div { class: "page fullscreen",
            PageHeader { title: "Ofrecer mis Servicios", on_back: move |_| on_close.call(()) }
            main { class: "page-body",
                section { class: "card",
                    label { class: "field-label", "Nombre completo" }
                    input {
                        class: "field-input",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "field-label", "Zona donde trabajas" }
                    input {
                        class: "field-input",
                        placeholder: "P. ej. Chamberí, Madrid",
                        value: "{location}",
                        oninput: move |evt| location.set(evt.value()),
                    }
                    label { class: "field-label", "Tarifa por hora (€)" }
                    input {
                        class: "field-input",
                        r#type: "number",
                        value: "{rate}",
                        oninput: move |evt| rate.set(evt.value()),
                    }
                    label { class: "field-label", "Experiencia" }
                    select {
                        class: "field-input",
                        value: "{experience}",
                        oninput: move |evt| experience.set(evt.value()),
                        for level in EXPERIENCE_LEVELS {
                            option { key: "{level}", value: "{level}", "{level}" }
                        }
                    }
                }

                section { class: "card",
                    h3 { "¿Qué cuidados ofreces?" }
                    for category in CareCategory::ALL {
                        {
                            let checked = categories.read().contains(&category);
                            rsx! {
                                label { key: "{category}", class: "checkbox-row",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        oninput: move |evt| {
                                            let mut current = categories.read().clone();
                                            if evt.checked() {
                                                if !current.contains(&category) {
                                                    current.push(category);
                                                }
                                            } else {
                                                current.retain(|c| *c != category);
                                            }
                                            categories.set(current);
                                        },
                                    }
                                    span { "{category}" }
                                }
                            }
                        }
                    }
                }

                section { class: "card",
                    label { class: "field-label", "Cuéntales a las familias sobre ti" }
                    textarea {
                        class: "field-input tall",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    disabled: !can_submit,
                    onclick: move |_| submitted.set(true),
                    "Publicar mi perfil"
                }
            }
        }
    }
}
