use dioxus::prelude::*;

use vocab_core::model::ChatRole;

use crate::context::AppContext;
use crate::vm::{clock_time, render_ai_text};

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut chat = use_signal(|| ctx.open_chat());
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_send = use_callback(move |()| {
        if busy() {
            return;
        }
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        busy.set(true);

        // Clone the conversation out, run the exchange, publish it back.
        let mut conversation = chat();
        spawn(async move {
            let _ = conversation.send(&text).await;
            chat.set(conversation);
            busy.set(false);
        });
    });

    let messages: Vec<_> = chat.read().messages().to_vec();

    rsx! {
        div { class: "page chat-page",
            header { class: "page-header",
                h2 { "AI助手" }
                p { class: "subtitle", "可以问我单词释义、语法问题、发音练习等" }
            }

            div { class: "chat-log",
                for (i, message) in messages.iter().enumerate() {
                    {
                        let bubble = match message.role() {
                            ChatRole::User => "bubble user",
                            ChatRole::Assistant => "bubble assistant",
                        };
                        let time = clock_time(message.sent_at());
                        let html = render_ai_text(message.text());
                        rsx! {
                            div { key: "{i}", class: "{bubble}",
                                div { dangerous_inner_html: "{html}" }
                                span { class: "bubble-time", "{time}" }
                            }
                        }
                    }
                }
                if busy() {
                    div { class: "bubble assistant pending", "思考中..." }
                }
            }

            div { class: "chat-input input-row",
                input {
                    value: "{draft}",
                    placeholder: "输入你的问题",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "button primary",
                    disabled: busy(),
                    onclick: move |_| on_send.call(()),
                    "发送"
                }
            }
        }
    }
}
