//! Streaming chat with the support assistant.

use cuidamet_core::chat::Sender;
use cuidamet_session::assistant::{SupportAssistant, SupportThread};
use dioxus::prelude::*;
use futures::StreamExt;

use super::chat_view::MessageInput;
use super::page_header::PageHeader;
use crate::mocks::MockAssistant;

#[component]
pub fn SupportChatPage(on_back: EventHandler<()>) -> Element {
    let mut thread = use_signal(SupportThread::new);

    let send = move |text: String| {
        let Some(prompt) = thread.write().send(&text) else {
            return;
        };
        spawn(async move {
            match MockAssistant.reply(&prompt).await {
                Ok(mut stream) => {
                    while let Some(chunk) = stream.next().await {
                        match chunk {
                            Ok(text) => thread.write().apply_chunk(&text),
                            Err(error) => {
                                tracing::warn!(%error, "assistant stream failed");
                                thread.write().fail_reply();
                                return;
                            }
                        }
                    }
                    thread.write().finish_reply();
                }
                Err(error) => {
                    tracing::warn!(%error, "assistant unreachable");
                    thread.write().fail_connect();
                }
            }
        });
    };

    let messages: Vec<_> = thread.read().messages().to_vec();
    let typing = thread.read().is_bot_typing();

    rsx! {
        div { class: "page fullscreen chat",
            PageHeader { title: "Soporte Cuidamet", on_back: move |_| on_back.call(()) }
            p { class: "support-status", "En línea" }
            main { class: "chat-messages",
                for message in messages {
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
                if typing {
                    div { class: "message-bubble theirs typing",
                        span { "•" }
                        span { "•" }
                        span { "•" }
                    }
                }
            }
            MessageInput { on_send: send }
        }
    }
}
