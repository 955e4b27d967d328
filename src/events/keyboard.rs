use crate::dom;
use crate::keymap::{action_for_key, KeyAction};
use sphere_core::{LabelSource, NumberedLabels, RandomNames, TagSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    sphere: &Rc<RefCell<TagSphere>>,
    names: &Rc<RefCell<RandomNames>>,
    canvas: &web::HtmlCanvasElement,
) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::Nudge { dx, dy } => {
            let dpr = dom::device_pixel_ratio();
            sphere.borrow_mut().on_drag(dx * dpr, dy * dpr);
            ev.prevent_default();
        }
        KeyAction::ResetOrientation => {
            sphere.borrow_mut().reset_orientation();
            log::info!("[keys] orientation reset");
        }
        KeyAction::ShuffleNames => {
            let labels = names.borrow_mut().labels();
            sphere.borrow_mut().set_labels(&labels);
            log::info!("[keys] shuffled {} names", labels.len());
        }
        KeyAction::NumberedTags => {
            let count = sphere.borrow().labels().len();
            let labels = NumberedLabels::new(count).labels();
            sphere.borrow_mut().set_labels(&labels);
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = dom::window_document() {
                doc.exit_fullscreen();
            }
        }
    }
}

pub fn wire_global_keydown(
    sphere: Rc<RefCell<TagSphere>>,
    names: Rc<RefCell<RandomNames>>,
    canvas: web::HtmlCanvasElement,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &sphere, &names, &canvas);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
