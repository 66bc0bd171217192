//! Body scroll lock backed by the webview document.

use std::rc::Rc;

use dioxus::document::{self, Document};
use multiverse_core::ScrollLock;

const LOCK_JS: &str = "document.body.style.overflow = 'hidden';";
const UNLOCK_JS: &str = "document.body.style.overflow = 'auto';";

/// Toggles `overflow` on `<body>`.
///
/// Holds the document handle captured at creation so unlocking still works
/// while the owning component is being torn down.
#[derive(Clone)]
pub struct BodyScrollLock {
    document: Rc<dyn Document>,
}

impl BodyScrollLock {
    /// Must be called from inside a component.
    pub fn new() -> Self {
        Self {
            document: document::document(),
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        let _ = self.document.eval(LOCK_JS.to_string());
    }

    fn unlock(&self) {
        let _ = self.document.eval(UNLOCK_JS.to_string());
    }
}
