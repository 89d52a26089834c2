use web_sys::Storage;

/// Best-effort handle to `localStorage`; `None` when storage is unavailable.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Set the document title, ignoring a missing document.
pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        doc.set_title(title);
    }
}
