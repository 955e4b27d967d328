use crate::constants::{BACKGROUND_COLOR, BASE_TEXT_SIZE_PX, FONT_FAMILY, TEXT_COLOR};
use crate::dom;
use crate::input;
use sphere_core::{DrawInstruction, TagSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sphere: Rc<RefCell<TagSphere>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub drawn_revision: Option<u64>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let resized = dom::sync_canvas_backing_size(&self.canvas);
        let sphere = self.sphere.borrow();
        let revision = sphere.revision();
        if !resized && self.drawn_revision == Some(revision) {
            return;
        }
        let center = input::canvas_center(&self.canvas);
        let instructions = sphere.frame(center);
        drop(sphere);

        self.paint(&instructions);
        self.drawn_revision = Some(revision);
    }

    fn paint(&self, instructions: &[DrawInstruction]) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, w, h);

        let base = BASE_TEXT_SIZE_PX * dom::device_pixel_ratio();
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_align("center");
        for ins in instructions {
            let size = ins.font_size(base);
            if size <= 0.0 {
                continue;
            }
            ctx.set_global_alpha(ins.opacity);
            ctx.set_font(&format!("{size:.1}px {FONT_FAMILY}"));
            _ = ctx.fill_text(&ins.text, ins.position.x, ins.position.y);
        }
        ctx.set_global_alpha(1.0);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let first = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), first.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
