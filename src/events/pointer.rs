use crate::gesture::GestureTracker;
use crate::input;
use sphere_core::{SphereInput, TagSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sphere: Rc<RefCell<TagSphere>>,
    pub gesture: Rc<RefCell<GestureTracker>>,
}

impl InputWiring {
    fn dispatch(&self, ev: SphereInput) {
        let center = input::canvas_center(&self.canvas);
        self.sphere.borrow_mut().handle(ev, center);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        w2.gesture.borrow_mut().pointer_down(ev.pointer_id(), pos);
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        let classified = w2.gesture.borrow_mut().pointer_move(ev.pointer_id(), pos);
        if let Some(input) = classified {
            w2.dispatch(input);
            ev.prevent_default();
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerup", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        let mut gesture = w2.gesture.borrow_mut();
        if gesture.is_dragging() {
            log::debug!("[pointer] drag end");
        }
        let classified = gesture.pointer_up(ev.pointer_id(), pos);
        drop(gesture);
        if let Some(input) = classified {
            w2.dispatch(input);
        }
        _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointercancel(w: &InputWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointercancel", move |ev: web::PointerEvent| {
        w2.gesture.borrow_mut().pointer_cancel(ev.pointer_id());
        log::debug!("[pointer] cancel {}", ev.pointer_id());
    });
}
