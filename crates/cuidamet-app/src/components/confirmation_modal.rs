//! Blocking confirmation dialog for destructive actions.

use cuidamet_session::ConfirmationPrompt;
use dioxus::prelude::*;

use crate::state::AppContext;

#[component]
pub fn ConfirmationModal(prompt: ConfirmationPrompt) -> Element {
    let mut ctx = use_context::<AppContext>();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal-card",
                h2 { class: "modal-title", "{prompt.title}" }
                p { class: "modal-message", "{prompt.message}" }
                div { class: "modal-actions",
                    button {
                        class: "button danger",
                        onclick: move |_| ctx.session.write().confirm_prompt(),
                        "{prompt.confirm_label}"
                    }
                    button {
                        class: "button secondary",
                        onclick: move |_| ctx.session.write().dismiss_prompt(),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
