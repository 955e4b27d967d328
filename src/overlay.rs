use crate::constants::{TOAST_DURATION_MS, TOAST_ID};
use crate::timer::PendingTimeout;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type HideCallback = Closure<dyn FnMut()>;

thread_local! {
    // A newer toast clears the older hide timer and drops its callback.
    static HIDE_TIMER: RefCell<PendingTimeout<HideCallback>> =
        const { RefCell::new(PendingTimeout::new()) };
}

fn set_toast_hidden(el: &web::Element, hidden: bool) {
    _ = el.class_list().toggle_with_force("hidden", hidden);
}

/// Show "`label` selected" and hide it again after a short delay.
pub fn show_selection(document: &web::Document, label: &str) {
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        log::warn!("[toast] missing #{TOAST_ID}");
        return;
    };
    el.set_text_content(Some(&format!("{label} selected")));
    set_toast_hidden(&el, false);

    let Some(window) = web::window() else {
        return;
    };
    // the slot keeps the last fired callback until the next toast; never
    // drop a callback from inside its own invocation
    let previous = HIDE_TIMER.with(|t| t.borrow_mut().take());
    if let Some((handle, callback)) = previous {
        window.clear_timeout_with_handle(handle);
        drop(callback);
    }

    let toast = el.clone();
    let callback: HideCallback = Closure::new(move || set_toast_hidden(&toast, true));
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        TOAST_DURATION_MS,
    ) {
        Ok(handle) => {
            HIDE_TIMER.with(|t| t.borrow_mut().arm(handle, callback));
        }
        Err(e) => log::warn!("[toast] set_timeout failed: {:?}", e),
    }
}
