use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    total: usize,
    reviewed: usize,
    due: usize,
    daily_goal: u16,
}

impl HomeData {
    fn mastery_label(&self) -> String {
        if self.total == 0 {
            "0%".to_string()
        } else {
            format!("{}%", self.reviewed * 100 / self.total)
        }
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let review = ctx.review();
    let app_settings = ctx.app_settings();

    let resource = use_resource(move || {
        let review = review.clone();
        let app_settings = app_settings.clone();
        async move {
            let session = review
                .start_session()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let settings = app_settings.load().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(HomeData {
                total: session.len(),
                reviewed: session.reviewed_count(),
                due: session.len() - session.reviewed_count(),
                daily_goal: settings.daily_goal(),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "无痛英语" }
                p { class: "subtitle", "轻松学单词，无需注册" }
            }

            section { class: "card",
                h3 { "开始学习" }
                p { "选择一个模块开始你的英语学习之旅" }
                div { class: "quick-nav",
                    Link { class: "button primary", to: Route::Learn {}, "开始学习" }
                    Link { class: "button", to: Route::Review {}, "复习" }
                    Link { class: "button", to: Route::Test {}, "测试" }
                    Link { class: "button", to: Route::Resource {}, "资源库" }
                }
            }

            match state {
                ViewState::Ready(data) => {
                    let goal_line =
                        format!("学习{}个单词，复习{}个单词", data.daily_goal, data.due);
                    let mastery = data.mastery_label();
                    rsx! {
                        section { class: "card",
                            h3 { "今日目标" }
                            p { "{goal_line}" }
                        }
                        section { class: "card",
                            h3 { "学习统计" }
                            p { "总学习单词: {data.total}" }
                            p { "已复习: {data.reviewed}" }
                            p { "掌握率: {mastery}" }
                        }
                    }
                }
                ViewState::Loading | ViewState::Idle => rsx! {
                    section { class: "card", p { "加载中..." } }
                },
                ViewState::Error(_) => rsx! {
                    section { class: "card error", p { {ViewError::message()} } }
                },
            }
        }
    }
}
