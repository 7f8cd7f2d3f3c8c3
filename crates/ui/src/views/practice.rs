use dioxus::prelude::*;

use services::PracticeTopic;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PracticeVm, render_ai_text};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let words = ctx.words();
    let practice = ctx.practice();

    let mut vm = use_signal(|| None::<PracticeVm>);
    let mut result = use_signal(|| ViewState::<String>::Idle);

    let resource = use_resource(move || {
        let words = words.clone();
        async move { words.list().await.map_err(|_| ViewError::Unknown) }
    });
    let state = view_state_from_resource(resource);

    use_effect(move || {
        let loaded = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .cloned();
        if let Some(list) = loaded {
            if vm.read().is_none() {
                vm.set(Some(PracticeVm::new(list)));
            }
        }
    });

    let on_generate = use_callback(move |()| {
        let request = vm
            .read()
            .as_ref()
            .and_then(|vm| vm.selected_word().map(|word| (word.word().to_string(), vm.topic())));
        let Some((word, topic)) = request else {
            return;
        };
        let practice = practice.clone();
        result.set(ViewState::Loading);
        spawn(async move {
            match practice.generate(&word, topic).await {
                Ok(text) => result.set(ViewState::Ready(text)),
                Err(_) => result.set(ViewState::Error(ViewError::Unknown)),
            }
        });
    });

    let snapshot = vm();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "专项练习" }
                p { class: "subtitle", "选择单词和练习类型，AI生成练习内容" }
            }

            match (snapshot, state) {
                (Some(vm_now), _) => {
                    let selected_index = vm_now.selected_index();
                    let topic = vm_now.topic();
                    let words: Vec<String> =
                        vm_now.words().iter().map(|w| w.word().to_string()).collect();
                    rsx! {
                        section { class: "card",
                            h3 { "选择单词" }
                            div { class: "chips",
                                for (i, word) in words.into_iter().enumerate() {
                                    button {
                                        key: "{i}",
                                        class: if i == selected_index { "chip selected" } else { "chip" },
                                        onclick: move |_| {
                                            if let Some(vm) = vm.write().as_mut() {
                                                vm.select_word(i);
                                            }
                                        },
                                        "{word}"
                                    }
                                }
                            }

                            h3 { "练习类型" }
                            div { class: "chips",
                                for candidate in PracticeTopic::ALL {
                                    button {
                                        key: "{candidate.label()}",
                                        class: if candidate == topic { "chip selected" } else { "chip" },
                                        onclick: move |_| {
                                            if let Some(vm) = vm.write().as_mut() {
                                                vm.select_topic(candidate);
                                            }
                                        },
                                        {candidate.label()}
                                    }
                                }
                            }

                            button {
                                class: "button primary",
                                onclick: move |_| on_generate.call(()),
                                "生成练习"
                            }
                        }

                        match result() {
                            ViewState::Ready(text) => {
                                let html = render_ai_text(&text);
                                rsx! {
                                    section { class: "card ai-output",
                                        div { dangerous_inner_html: "{html}" }
                                    }
                                }
                            }
                            ViewState::Loading => rsx! {
                                section { class: "card", p { "生成中..." } }
                            },
                            ViewState::Error(_) => rsx! {
                                section { class: "card error", p { {ViewError::message()} } }
                            },
                            ViewState::Idle => rsx! {},
                        }
                    }
                }
                (None, ViewState::Error(_)) => rsx! {
                    section { class: "card error", p { {ViewError::message()} } }
                },
                (None, _) => rsx! {
                    section { class: "card", p { "加载中..." } }
                },
            }
        }
    }
}
