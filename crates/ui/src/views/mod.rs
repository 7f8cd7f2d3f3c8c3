mod chat;
mod home;
mod learn;
mod practice;
mod resource;
mod review;
mod settings;
mod state;

pub use chat::ChatView;
pub use home::HomeView;
pub use learn::LearnView;
pub use practice::PracticeView;
pub use resource::ResourceView;
pub use review::ReviewView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use test::TestView;
