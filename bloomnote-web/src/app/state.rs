use crate::storage::BrowserStorage;
use bloomnote_core::PageSession;
use yew::prelude::*;

/// The single piece of app state: the page session, cloned and replaced on
/// every mutation so Yew re-renders.
#[derive(Clone)]
pub struct PageState {
    pub session: UseStateHandle<PageSession<BrowserStorage>>,
}

fn load_entropy() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

#[hook]
pub fn use_page_state() -> PageState {
    // The session is built in the state initializer so the bloom pick and
    // hydration happen exactly once per page load.
    PageState {
        session: use_state(|| PageSession::new(BrowserStorage, load_entropy())),
    }
}
