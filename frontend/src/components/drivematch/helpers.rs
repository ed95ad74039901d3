//! DOM helpers for user feedback that lives outside the component tree.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Error => "rgba(183, 28, 28, 0.9)",
        }
    }
}

/// Shows a short-lived notification at the bottom of the page.
///
/// The toast is appended to `<body>` and removes itself after
/// `TOAST_MILLIS`. The text is set with `textContent`, so error messages
/// coming back from the service are never interpreted as markup.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
