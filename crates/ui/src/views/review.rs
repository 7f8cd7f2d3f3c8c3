use dioxus::prelude::*;

use vocab_core::model::{ReviewMode, ReviewSession, WordEntry};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ReviewEffect, ReviewIntent, ReviewVm};

#[component]
pub fn ReviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let review_for_resource = ctx.review();
    let review_for_persist = ctx.review();

    let mut vm = use_signal(|| None::<ReviewVm>);

    let resource = use_resource(move || {
        let review = review_for_resource.clone();
        async move {
            review
                .start_session()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let state = view_state_from_resource(resource);

    // Adopt the loaded session exactly once; afterwards the vm owns it.
    use_effect(move || {
        let loaded = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .cloned();
        if let Some(session) = loaded {
            if vm.read().is_none() {
                vm.set(Some(ReviewVm::new(session)));
            }
        }
    });

    let on_intent = use_callback(move |intent: ReviewIntent| {
        let effect = vm.write().as_mut().map(|vm| vm.apply(intent));
        if let Some(ReviewEffect::Persist(id)) = effect {
            let snapshot = vm.read().as_ref().map(|vm| vm.session().clone());
            if let Some(session) = snapshot {
                let review = review_for_persist.clone();
                spawn(async move {
                    // Storage failures leave the in-memory session authoritative.
                    let _ = review.persist_reviewed(&session, id).await;
                });
            }
        }
    });

    let current = vm();
    let subtitle = current.as_ref().map(ReviewVm::due_label);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "复习" }
                if let Some(subtitle) = subtitle {
                    p { class: "subtitle", "{subtitle}" }
                }
            }

            match (current, state) {
                (Some(vm_now), _) => rsx! {
                    {progress_card(&vm_now)}
                    {mode_panel(&vm_now, on_intent)}
                },
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

fn progress_card(vm: &ReviewVm) -> Element {
    let percent = vm.session().progress_percent();
    let label = vm.progress_label();
    rsx! {
        section { class: "card",
            h3 { "复习进度" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
            p { class: "progress-percent", "{label}" }
        }
    }
}

fn mode_panel(vm: &ReviewVm, on_intent: Callback<ReviewIntent>) -> Element {
    match vm.session().mode() {
        None => list_panel(vm.session(), on_intent),
        Some(ReviewMode::Flashcard) => flashcard_panel(vm, on_intent),
        Some(ReviewMode::Dictation) => dictation_panel(vm, on_intent),
        Some(ReviewMode::Quiz) => quiz_panel(vm, on_intent),
    }
}

fn list_panel(session: &ReviewSession, on_intent: Callback<ReviewIntent>) -> Element {
    let words = session.words().to_vec();
    rsx! {
        section { class: "card",
            h3 { "选择复习模式" }
            div { class: "mode-buttons",
                button {
                    class: "button primary",
                    onclick: move |_| on_intent.call(ReviewIntent::Start(ReviewMode::Flashcard)),
                    "闪卡模式"
                }
                button {
                    class: "button",
                    onclick: move |_| on_intent.call(ReviewIntent::Start(ReviewMode::Dictation)),
                    "听写模式"
                }
                button {
                    class: "button",
                    onclick: move |_| on_intent.call(ReviewIntent::Start(ReviewMode::Quiz)),
                    "选择题模式"
                }
            }
        }

        for word in words {
            {word_card(word, on_intent)}
        }
    }
}

fn word_card(word: WordEntry, on_intent: Callback<ReviewIntent>) -> Element {
    let id = word.id();
    let (status, action, action_class) = if word.reviewed() {
        ("已复习", "重新复习", "button")
    } else {
        ("未复习", "开始复习", "button primary")
    };
    rsx! {
        section { class: "card word-card", key: "{id}",
            div { class: "word-row",
                span { class: "word-text", "{word.word()}" }
                span { class: "word-status", "{status}" }
            }
            button {
                class: action_class,
                onclick: move |_| on_intent.call(ReviewIntent::MarkReviewed(id)),
                "{action}"
            }
        }
    }
}

fn nav_buttons(vm: &ReviewVm, on_intent: Callback<ReviewIntent>) -> Element {
    let can_retreat = vm.can_retreat();
    rsx! {
        div { class: "nav-buttons",
            button {
                class: "button",
                disabled: !can_retreat,
                onclick: move |_| on_intent.call(ReviewIntent::Retreat),
                "上一个"
            }
            button {
                class: "button primary",
                onclick: move |_| on_intent.call(ReviewIntent::Advance),
                "下一个"
            }
            button {
                class: "button quiet",
                onclick: move |_| on_intent.call(ReviewIntent::Exit),
                "退出"
            }
        }
    }
}

fn mode_header(vm: &ReviewVm) -> Element {
    let title = vm.mode_title().unwrap_or_default();
    let position = vm.position_label().unwrap_or_default();
    rsx! {
        div { class: "mode-header",
            h3 { "{title}" }
            span { class: "mode-position", "{position}" }
        }
    }
}

fn flashcard_panel(vm: &ReviewVm, on_intent: Callback<ReviewIntent>) -> Element {
    let Some(word) = vm.session().current_word().cloned() else {
        return rsx! {};
    };
    let revealed = vm.session().revealed();
    rsx! {
        section { class: "card mode-card",
            {mode_header(vm)}
            div {
                class: "flashcard",
                onclick: move |_| on_intent.call(ReviewIntent::ToggleReveal),
                p { class: "flashcard-word", "{word.word()}" }
                if revealed {
                    p { class: "flashcard-phonetic", "美: {word.phonetic().us}" }
                    p { class: "flashcard-phonetic", "英: {word.phonetic().uk}" }
                    p { class: "flashcard-hint", "点击卡片返回" }
                } else {
                    p { class: "flashcard-hint", "点击卡片查看答案" }
                }
            }
            {nav_buttons(vm, on_intent)}
        }
    }
}

fn dictation_panel(vm: &ReviewVm, on_intent: Callback<ReviewIntent>) -> Element {
    let Some(word) = vm.session().current_word().cloned() else {
        return rsx! {};
    };
    rsx! {
        section { class: "card mode-card",
            {mode_header(vm)}
            div { class: "dictation",
                p { class: "dictation-word", "{word.word()}" }
                p { class: "dictation-phonetic", "美: {word.phonetic().us}" }
                p { class: "dictation-phonetic", "英: {word.phonetic().uk}" }
                PlayButton { word: word.word().to_string() }
            }
            {nav_buttons(vm, on_intent)}
        }
    }
}

fn quiz_panel(vm: &ReviewVm, on_intent: Callback<ReviewIntent>) -> Element {
    let Some(word) = vm.session().current_word().cloned() else {
        return rsx! {};
    };
    let id = word.id();
    rsx! {
        section { class: "card mode-card",
            {mode_header(vm)}
            div { class: "quiz",
                p { class: "quiz-question", "选择 \"{word.word()}\" 的正确发音" }
                div { class: "quiz-options",
                    button {
                        class: "button",
                        onclick: move |_| on_intent.call(ReviewIntent::MarkReviewed(id)),
                        "美式: {word.phonetic().us}"
                    }
                    button {
                        class: "button",
                        onclick: move |_| on_intent.call(ReviewIntent::MarkReviewed(id)),
                        "英式: {word.phonetic().uk}"
                    }
                }
            }
            {nav_buttons(vm, on_intent)}
        }
    }
}

/// Pronunciation playback chrome. Actual audio output is out of scope; the
/// button only animates so the layout matches the mobile design.
#[component]
fn PlayButton(word: String) -> Element {
    let mut playing = use_signal(|| false);
    let label = if playing() { "播放中..." } else { "播放发音" };
    rsx! {
        button {
            class: "button primary",
            disabled: playing(),
            onclick: move |_| {
                playing.set(true);
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(800)).await;
                    playing.set(false);
                });
            },
            "{label}"
        }
    }
}
