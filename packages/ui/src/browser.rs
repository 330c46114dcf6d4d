//! Thin wrappers over the browser APIs the views touch directly.
//!
//! Every function has a native fallback so the crate builds and runs off
//! the web; the fallbacks only log.

use dioxus::prelude::*;

/// Vertical alignment for [`reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Center,
    End,
}

/// Page origin (`https://host:port`), when running in a browser.
pub fn origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Query string of the current URL, including the leading `?`.
pub fn current_query() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Replace the current history entry with the bare path, dropping the query.
pub fn strip_query() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

/// Full page navigation.
pub fn navigate_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("navigate to {url}");
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {message}");
    }
}

/// Smooth-scroll the element with `element_id` into view once layout settles.
pub fn reveal(element_id: &'static str, block: ScrollBlock, delay_ms: u32) {
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            scroll_into_view(element_id, block);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::trace!("reveal {element_id} ({block:?}) after {delay_ms}ms");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn scroll_into_view(element_id: &str, block: ScrollBlock) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match block {
        ScrollBlock::Center => ScrollLogicalPosition::Center,
        ScrollBlock::End => ScrollLogicalPosition::End,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
