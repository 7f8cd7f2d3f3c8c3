use dioxus::prelude::*;

use vocab_core::model::{Phonetic, WordEntry};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn LearnView() -> Element {
    let ctx = use_context::<AppContext>();
    let words_for_resource = ctx.words();
    let words_for_search = ctx.words();
    let words_for_add = ctx.words();

    let mut index = use_signal(|| 0usize);
    let mut flipped = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    let resource = use_resource(move || {
        let words = words_for_resource.clone();
        // Re-runs whenever a word is added.
        let _tick = reload();
        async move { words.list().await.map_err(|_| ViewError::Unknown) }
    });
    let state = view_state_from_resource(resource);

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<WordEntry>::new);
    let mut searched = use_signal(|| false);

    let on_search = use_callback(move |()| {
        let words = words_for_search.clone();
        let text = query();
        spawn(async move {
            if let Ok(hits) = words.search(&text).await {
                results.set(hits);
                searched.set(true);
            }
        });
    });

    let mut new_word = use_signal(String::new);
    let mut add_message = use_signal(|| None::<String>);

    let on_add = use_callback(move |()| {
        let words = words_for_add.clone();
        let text = new_word();
        if text.trim().is_empty() {
            return;
        }
        spawn(async move {
            match words.add_word(&text, Phonetic::default()).await {
                Ok(entry) => {
                    add_message.set(Some(format!("已加入词库：{}", entry.word())));
                    new_word.set(String::new());
                    reload.set(reload() + 1);
                }
                Err(_) => add_message.set(Some(ViewError::message().to_string())),
            }
        });
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "单词学习" }
                p { class: "subtitle", "点击卡片翻转查看音标" }
            }

            match state {
                ViewState::Ready(list) if !list.is_empty() => {
                    let position = index() % list.len();
                    let word = list[position].clone();
                    let position_label = format!("{}/{}", position + 1, list.len());
                    rsx! {
                        section { class: "card",
                            div {
                                class: "flashcard",
                                onclick: move |_| flipped.set(!flipped()),
                                if flipped() {
                                    p { class: "flashcard-word", "{word.word()}" }
                                    p { class: "flashcard-phonetic", "美: {word.phonetic().us}" }
                                    p { class: "flashcard-phonetic", "英: {word.phonetic().uk}" }
                                } else {
                                    p { class: "flashcard-word", "{word.word()}" }
                                    p { class: "flashcard-hint", "点击卡片查看音标" }
                                }
                            }
                            p { class: "mode-position", "{position_label}" }
                            button {
                                class: "button primary",
                                onclick: move |_| {
                                    index.set(index() + 1);
                                    flipped.set(false);
                                },
                                "下一个单词"
                            }
                        }
                    }
                }
                ViewState::Ready(_) => rsx! {
                    section { class: "card", p { "词库是空的，先在下方加入一个单词吧。" } }
                },
                ViewState::Loading | ViewState::Idle => rsx! {
                    section { class: "card", p { "加载中..." } }
                },
                ViewState::Error(_) => rsx! {
                    section { class: "card error", p { {ViewError::message()} } }
                },
            }

            section { class: "card",
                h3 { "查单词" }
                div { class: "input-row",
                    input {
                        value: "{query}",
                        placeholder: "输入要查找的单词",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "button", onclick: move |_| on_search.call(()), "搜索" }
                }
                if searched() {
                    if results().is_empty() {
                        p { class: "muted", "没有找到匹配的单词" }
                    } else {
                        ul { class: "search-results",
                            for hit in results() {
                                li { key: "{hit.id()}",
                                    span { class: "word-text", "{hit.word()}" }
                                    span { class: "muted", "{hit.phonetic().us}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card",
                h3 { "加入词库" }
                div { class: "input-row",
                    input {
                        value: "{new_word}",
                        placeholder: "输入新单词",
                        oninput: move |evt| new_word.set(evt.value()),
                    }
                    button { class: "button primary", onclick: move |_| on_add.call(()), "添加" }
                }
                if let Some(message) = add_message() {
                    p { class: "muted", "{message}" }
                }
            }
        }
    }
}
