//! Legal information: document list and full-document reader.

use cuidamet_core::legal::{LegalDocument, LEGAL_DOCUMENTS};
use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn LegalInfoPage(
    on_back: EventHandler<()>,
    on_open_document: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Tu Información Legal", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                div { class: "card menu",
                    for document in LEGAL_DOCUMENTS {
                        button {
                            key: "{document.id}",
                            class: "menu-item",
                            onclick: move |_| on_open_document.call(document.id.to_string()),
                            div {
                                p { "{document.title}" }
                                p { class: "muted", "{document.description}" }
                            }
                            span { class: "chevron", "›" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LegalDocumentPage(document: LegalDocument, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader {
                title: document.title.to_string(),
                on_back: move |_| on_back.call(()),
            }
            main { class: "page-body",
                article { class: "card legal-body",
                    for (index, paragraph) in document.body.split("\n\n").enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }
            }
        }
    }
}
