//! Document-level styling hooks.
//!
//! The overlay always renders in the dark palette. In browser development
//! mode the root also gets a backdrop class so the transparent overlay is
//! readable outside the game. Requires a browser environment; other builds
//! no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class enabling the dark palette on `<html>`.
pub const DARK_CLASS: &str = "dark";
/// Class adding a placeholder backdrop on `<body>` outside the game.
pub const BACKDROP_CLASS: &str = "dev-backdrop";

/// Classes to add for the given environment.
#[must_use]
pub fn document_classes(browser: bool) -> Vec<&'static str> {
    if browser { vec![DARK_CLASS, BACKDROP_CLASS] } else { vec![DARK_CLASS] }
}

/// Apply the dark palette and, in a browser, the development backdrop.
pub fn apply(browser: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for class in document_classes(browser) {
            let target: Option<web_sys::Element> =
                if class == BACKDROP_CLASS { doc.body().map(Into::into) } else { doc.document_element() };
            if let Some(el) = target {
                let _ = el.class_list().add_1(class);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = browser;
    }
}
