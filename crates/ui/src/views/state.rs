use dioxus::prelude::*;

/// Errors shown to the user are deliberately unspecific; the typed detail
/// stays in the service layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "出错了，请稍后重试。"
    }
}

/// Lifecycle of the async load backing a page.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
