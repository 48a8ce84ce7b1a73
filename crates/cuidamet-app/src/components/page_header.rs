//! Sticky page header with a back button.

use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        header { class: "page-header",
            button {
                class: "back-button",
                onclick: move |_| on_back.call(()),
                "‹"
            }
            h1 { class: "page-header-title", "{title}" }
            div { class: "page-header-spacer" }
        }
    }
}
