use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ChatView, HomeView, LearnView, PracticeView, ResourceView, ReviewView, SettingsView, TestView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/learn", LearnView)] Learn {},
        #[route("/review", ReviewView)] Review {},
        #[route("/test", TestView)] Test {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/resource", ResourceView)] Resource {},
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "无痛英语" }
            ul {
                li { Link { to: Route::Home {}, "首页" } }
                li { Link { to: Route::Learn {}, "单词学习" } }
                li { Link { to: Route::Review {}, "复习" } }
                li { Link { to: Route::Test {}, "测试" } }
                li { Link { to: Route::Practice {}, "专项练习" } }
                li { Link { to: Route::Chat {}, "AI助手" } }
                li { Link { to: Route::Resource {}, "资源库" } }
                li { Link { to: Route::Settings {}, "设置" } }
            }
        }
    }
}
