//! Caregiver profile editor. `editing_category` preselects the vertical
//! whose section the user came to change.

use cuidamet_core::provider::CareCategory;
use dioxus::prelude::*;

use super::page_header::PageHeader;
use crate::user::DEMO_USER;

#[component]
pub fn EditProfilePage(
    editing_category: Option<CareCategory>,
    on_back: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| DEMO_USER.name.to_string());
    let mut location = use_signal(|| DEMO_USER.location.to_string());
    let mut rate = use_signal(|| format!("{:.0}", DEMO_USER.hourly_rate));
    let mut description = use_signal(|| DEMO_USER.description.to_string());
    let mut categories = use_signal(|| {
        let mut initial: Vec<CareCategory> = DEMO_USER.categories.to_vec();
        if let Some(category) = editing_category
            && !initial.contains(&category)
        {
            initial.push(category);
        }
        initial
    });
    let mut saved = use_signal(|| false);

    rsx! {
        div { class: "page",
            PageHeader { title: "Editar el Perfil", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    label { class: "field-label", "Nombre" }
                    input {
                        class: "field-input",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "field-label", "Zona" }
                    input {
                        class: "field-input",
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
                }

                section { class: "card",
                    h3 { "Categorías de servicio" }
                    for category in CareCategory::ALL {
                        {
                            let checked = categories.read().contains(&category);
                            let highlight = editing_category == Some(category);
                            let row_class = if highlight {
                                "checkbox-row highlight"
                            } else {
                                "checkbox-row"
                            };
                            rsx! {
                                label { key: "{category}", class: "{row_class}",
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
                    label { class: "field-label", "Descripción" }
                    textarea {
                        class: "field-input tall",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                if *saved.read() {
                    div { class: "banner success", p { "Cambios guardados." } }
                }
            }
            footer { class: "page-action-bar",
                button {
                    class: "button primary wide",
                    onclick: move |_| saved.set(true),
                    "Guardar cambios"
                }
            }
        }
    }
}
