use crate::app::state::PageState;
use yew::prelude::*;

/// Callbacks wired into the page widgets.
pub struct Handlers {
    pub toggle_secret: Callback<()>,
    pub record_miss: Callback<()>,
    pub nickname_change: Callback<String>,
    pub toggle_cuckoo: Callback<()>,
}

#[must_use]
pub fn build_handlers(state: &PageState) -> Handlers {
    Handlers {
        toggle_secret: build_toggle_secret(state),
        record_miss: build_record_miss(state),
        nickname_change: build_nickname_change(state),
        toggle_cuckoo: build_toggle_cuckoo(state),
    }
}

pub fn build_toggle_secret(state: &PageState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let mut next = (*session).clone();
        next.toggle_secret();
        session.set(next);
    })
}

pub fn build_record_miss(state: &PageState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let mut next = (*session).clone();
        next.record_miss();
        session.set(next);
    })
}

pub fn build_nickname_change(state: &PageState) -> Callback<String> {
    let session = state.session.clone();
    Callback::from(move |value: String| {
        let mut next = (*session).clone();
        next.set_nickname(&value);
        session.set(next);
    })
}

pub fn build_toggle_cuckoo(state: &PageState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let mut next = (*session).clone();
        next.toggle_cuckoo();
        session.set(next);
    })
}
