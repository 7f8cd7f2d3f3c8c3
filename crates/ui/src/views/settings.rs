use dioxus::prelude::*;

use services::AppSettingsServiceError;
use vocab_core::model::{AccentPreference, AppSettingsDraft, AppSettingsError};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Error,
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let app_settings_for_resource = ctx.app_settings();
    let app_settings_for_save = ctx.app_settings();

    let mut api_key = use_signal(String::new);
    let mut api_base_url = use_signal(String::new);
    let mut api_model = use_signal(String::new);
    let mut accent = use_signal(|| "us".to_string());
    let mut daily_goal = use_signal(|| "10".to_string());
    let mut night_mode = use_signal(|| false);
    let mut auto_play = use_signal(|| true);
    let mut notifications = use_signal(|| true);

    let mut loaded = use_signal(|| false);
    let mut save_state = use_signal(|| SaveState::Idle);
    let mut form_error = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let app_settings = app_settings_for_resource.clone();
        async move { app_settings.load().await.map_err(|_| ViewError::Unknown) }
    });
    let state = view_state_from_resource(resource);

    // Populate the form from storage once; afterwards the form is authoritative.
    use_effect(move || {
        let settings = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .cloned();
        if let Some(settings) = settings {
            if !loaded() {
                api_key.set(settings.api_key().unwrap_or_default().to_string());
                api_base_url.set(settings.api_base_url().unwrap_or_default().to_string());
                api_model.set(settings.api_model().unwrap_or_default().to_string());
                accent.set(settings.accent().as_str().to_string());
                daily_goal.set(settings.daily_goal().to_string());
                night_mode.set(settings.night_mode());
                auto_play.set(settings.auto_play_audio());
                notifications.set(settings.notifications());
                loaded.set(true);
            }
        }
    });

    let on_save = use_callback(move |()| {
        let Ok(goal) = daily_goal().trim().parse::<u16>() else {
            form_error.set(Some("每日目标需要是正整数".to_string()));
            return;
        };
        let draft = AppSettingsDraft {
            api_key: none_if_blank(&api_key()),
            api_base_url: none_if_blank(&api_base_url()),
            api_model: none_if_blank(&api_model()),
            accent: AccentPreference::parse(&accent()).unwrap_or_default(),
            daily_goal: goal,
            night_mode: night_mode(),
            auto_play_audio: auto_play(),
            notifications: notifications(),
        };

        form_error.set(None);
        save_state.set(SaveState::Saving);
        let app_settings = app_settings_for_save.clone();
        spawn(async move {
            match app_settings.save(draft).await {
                Ok(_) => save_state.set(SaveState::Saved),
                Err(AppSettingsServiceError::Settings(AppSettingsError::InvalidBaseUrl)) => {
                    form_error.set(Some("API地址无效".to_string()));
                    save_state.set(SaveState::Idle);
                }
                Err(_) => save_state.set(SaveState::Error),
            }
        });
    });

    let status = match save_state() {
        SaveState::Saving => Some("保存中..."),
        SaveState::Saved => Some("已保存"),
        SaveState::Error => Some("保存失败，请重试"),
        SaveState::Idle => None,
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "设置" }
            }

            if state.is_error() {
                section { class: "card error", p { {ViewError::message()} } }
            }

            section { class: "card",
                h3 { "学习偏好" }
                label { class: "field",
                    span { "每日目标（单词数）" }
                    input {
                        value: "{daily_goal}",
                        oninput: move |evt| daily_goal.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "发音偏好" }
                    select {
                        value: "{accent}",
                        onchange: move |evt| accent.set(evt.value()),
                        option { value: "us", "美式发音" }
                        option { value: "uk", "英式发音" }
                    }
                }
                label { class: "field toggle",
                    input {
                        r#type: "checkbox",
                        checked: auto_play(),
                        onchange: move |evt| auto_play.set(evt.checked()),
                    }
                    span { "自动播放发音" }
                }
                label { class: "field toggle",
                    input {
                        r#type: "checkbox",
                        checked: notifications(),
                        onchange: move |evt| notifications.set(evt.checked()),
                    }
                    span { "学习提醒" }
                }
                label { class: "field toggle",
                    input {
                        r#type: "checkbox",
                        checked: night_mode(),
                        onchange: move |evt| night_mode.set(evt.checked()),
                    }
                    span { "夜间模式" }
                }
            }

            section { class: "card",
                h3 { "AI服务" }
                p { class: "muted", "配置API密钥后，练习和问答会改用在线模型。" }
                label { class: "field",
                    span { "API密钥" }
                    input {
                        r#type: "password",
                        value: "{api_key}",
                        oninput: move |evt| api_key.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "API地址" }
                    input {
                        value: "{api_base_url}",
                        placeholder: "https://open.bigmodel.cn/api/paas/v4",
                        oninput: move |evt| api_base_url.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "模型" }
                    input {
                        value: "{api_model}",
                        placeholder: "glm-4.7-flash",
                        oninput: move |evt| api_model.set(evt.value()),
                    }
                }
            }

            section { class: "card",
                if let Some(message) = form_error() {
                    p { class: "feedback error-text", "{message}" }
                }
                button {
                    class: "button primary",
                    disabled: save_state() == SaveState::Saving,
                    onclick: move |_| on_save.call(()),
                    "保存设置"
                }
                if let Some(status) = status {
                    span { class: "muted save-status", "{status}" }
                }
            }
        }
    }
}
