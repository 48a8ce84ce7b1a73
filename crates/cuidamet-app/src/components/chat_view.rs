//! One conversation with a provider.

use cuidamet_core::chat::{ChatThread, Sender};
use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn ChatPage(
    thread: ChatThread,
    on_back: EventHandler<()>,
    on_send: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "page fullscreen chat",
            PageHeader {
                title: thread.provider.name.clone(),
                on_back: move |_| on_back.call(()),
            }
            main { class: "chat-messages",
                if thread.messages.is_empty() {
                    div { class: "empty-block",
                        p { "Saluda a {thread.provider.name} para empezar la conversación." }
                    }
                }
                for message in thread.messages.iter() {
                    {
                        let bubble_class = if message.sender == Sender::Me {
                            "message-bubble mine"
                        } else {
                            "message-bubble theirs"
                        };
                        rsx! {
                            div { key: "{message.id}", class: "{bubble_class}",
                                p { class: "message-text", "{message.text}" }
                                p { class: "message-time", "{message.timestamp}" }
                            }
                        }
                    }
                }
            }
            MessageInput { on_send }
        }
    }
}

/// Compose bar with a send button. Sends on Enter as well.
#[component]
pub fn MessageInput(on_send: EventHandler<String>) -> Element {
    let mut text = use_signal(String::new);
    let can_send = !text.read().trim().is_empty();

    rsx! {
        footer { class: "message-input-bar",
            input {
                class: "message-input",
                placeholder: "Escribe un mensaje…",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && can_send {
                        evt.prevent_default();
                        let message = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(message);
                    }
                },
            }
            button {
                class: "send-button",
                disabled: !can_send,
                onclick: move |_| {
                    if can_send {
                        let message = text.read().trim().to_string();
                        text.set(String::new());
                        on_send.call(message);
                    }
                },
                "➤"
            }
        }
    }
}
