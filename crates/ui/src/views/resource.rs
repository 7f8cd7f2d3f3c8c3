use dioxus::prelude::*;

use crate::context::AppContext;

struct ResourceItem {
    title: &'static str,
    detail: &'static str,
}

const WORD_LISTS: [ResourceItem; 4] = [
    ResourceItem {
        title: "大学英语四级核心词汇",
        detail: "词汇量：2500",
    },
    ResourceItem {
        title: "雅思高频词汇",
        detail: "词汇量：3000",
    },
    ResourceItem {
        title: "商务英语词汇",
        detail: "词汇量：1200",
    },
    ResourceItem {
        title: "日常口语短语",
        detail: "词汇量：800",
    },
];

const EXTRAS: [ResourceItem; 2] = [
    ResourceItem {
        title: "英语学习方法指南",
        detail: "图文",
    },
    ResourceItem {
        title: "发音技巧视频",
        detail: "视频",
    },
];

#[component]
pub fn ResourceView() -> Element {
    let ctx = use_context::<AppContext>();
    let words = ctx.words();

    let mut syncing = use_signal(|| false);
    let mut outcome = use_signal(|| None::<(bool, String)>);

    let on_sync = use_callback(move |()| {
        if syncing() {
            return;
        }
        syncing.set(true);
        let words = words.clone();
        spawn(async move {
            match words.sync_library().await {
                Ok(report) => outcome.set(Some((
                    true,
                    format!("词库同步成功！已更新{}个新单词。", report.added),
                ))),
                Err(_) => outcome.set(Some((
                    false,
                    "词库同步失败，请检查网络连接后重试。".to_string(),
                ))),
            }
            syncing.set(false);
        });
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "资源库" }
                p { class: "subtitle", "精选词表与学习资料" }
            }

            section { class: "card",
                h3 { "学习资料" }
                ul { class: "resource-list",
                    for item in &WORD_LISTS {
                        li { key: "{item.title}",
                            span { class: "word-text", "{item.title}" }
                            span { class: "muted", "{item.detail}" }
                        }
                    }
                }
            }

            section { class: "card",
                h3 { "拓展资源" }
                ul { class: "resource-list",
                    for item in &EXTRAS {
                        li { key: "{item.title}",
                            span { class: "word-text", "{item.title}" }
                            span { class: "muted", "{item.detail}" }
                        }
                    }
                }
            }

            section { class: "card",
                h3 { "词库同步" }
                p { "同步最新词库，获取更多学习内容" }
                button {
                    class: "button primary",
                    disabled: syncing(),
                    onclick: move |_| on_sync.call(()),
                    if syncing() { "同步中..." } else { "同步词库" }
                }
                if let Some((success, message)) = outcome() {
                    p {
                        class: if success { "feedback" } else { "feedback error-text" },
                        "{message}"
                    }
                }
            }
        }
    }
}
