//! Inbox: one row per conversation, newest context first as seeded.

use cuidamet_core::chat::{ChatId, ChatThread};
use dioxus::prelude::*;

#[component]
pub fn InboxPage(threads: Vec<ChatThread>, on_open_chat: EventHandler<ChatId>) -> Element {
    rsx! {
        div { class: "page",
            header { class: "listing-header",
                h1 { class: "page-title", "Mensajes" }
            }
            main { class: "page-body",
                if threads.is_empty() {
                    div { class: "empty-block",
                        p { class: "empty-title", "No tienes conversaciones" }
                        p { "Contacta con un cuidador desde su perfil para empezar." }
                    }
                }
                div { class: "conversation-list",
                    for thread in threads {
                        {
                            let chat_id = thread.id;
                            let unread = thread.unread_count();
                            let preview = thread
                                .last_message()
                                .map(|message| message.text.clone())
                                .unwrap_or_else(|| "Sin mensajes todavía".to_string());
                            let time = thread
                                .last_message()
                                .map(|message| message.timestamp.clone())
                                .unwrap_or_default();
                            rsx! {
                                button {
                                    key: "{chat_id}",
                                    class: "conversation-item",
                                    onclick: move |_| on_open_chat.call(chat_id),
                                    img {
                                        class: "conversation-avatar",
                                        src: "{thread.provider.photo_url}",
                                        alt: "{thread.provider.name}",
                                    }
                                    div { class: "conversation-info",
                                        p { class: "conversation-name", "{thread.provider.name}" }
                                        p { class: "conversation-preview", "{preview}" }
                                    }
                                    div { class: "conversation-meta",
                                        span { class: "conversation-time", "{time}" }
                                        if unread > 0 {
                                            span { class: "unread-badge", "{unread}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
