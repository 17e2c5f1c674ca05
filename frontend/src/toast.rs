//! Transient and blocking user feedback.
//!
//! Toasts are injected `div`s that remove themselves after [`TOAST_MS`].
//! Write-operation failures instead go through [`show_alert`], which blocks
//! until the user dismisses it.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays visible.
pub const TOAST_MS: u32 = 2000;

/// Accent of the transient banner.
#[derive(Clone, Copy)]
pub enum ToastKind {
    Success,
    Danger,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(21, 87, 36, 0.9)",
            ToastKind::Danger => "rgba(114, 28, 36, 0.9)",
        }
    }
}

/// Shows a transient banner at the bottom of the viewport and schedules its
/// removal. The removal is a no-op if the node is already detached, so
/// overlapping toasts never throw.
pub fn show_toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Blocking error dialog for failed write operations.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
