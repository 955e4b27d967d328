#![cfg(target_arch = "wasm32")]
use sphere_core::{
    LabelSource, NumberedLabels, RandomNames, SphereConfig, TagSphere, DEFAULT_LABEL_COUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod gesture;
mod input;
mod keymap;
mod overlay;
mod timer;

use constants::{
    AUTO_RADIUS_FRACTION, CANVAS_ID, DEFAULT_NAME_SEED, PERSPECTIVE_HEADROOM, TAP_SLOP_PX,
};

/// Sphere settings read from the canvas' `data-*` attributes.
struct PageConfig {
    sphere: SphereConfig,
    labels: Vec<String>,
    names: RandomNames,
}

fn read_page_config(canvas: &web::HtmlCanvasElement) -> PageConfig {
    let el: &web::Element = canvas;
    let dpr = dom::device_pixel_ratio();

    // data-* lengths are CSS pixels; converted to backing-store pixels below
    let shorter_side = canvas.width().min(canvas.height()) as f64 / dpr;
    let radius = dom::parse_data_attr::<f64>(el, "radius")
        .unwrap_or(shorter_side * AUTO_RADIUS_FRACTION);

    let mut sphere = SphereConfig::default().with_radius(radius);
    if let Some(k) = dom::parse_data_attr::<f64>(el, "sensitivity") {
        sphere = sphere.with_sensitivity(k);
    }
    if let Some(t) = dom::parse_data_attr::<f64>(el, "touch-radius") {
        sphere = sphere.with_touch_radius(t);
    }
    let sphere = sphere
        .scaled_to_pixel_ratio(dpr)
        .with_perspective_headroom(PERSPECTIVE_HEADROOM);

    let count = dom::parse_data_attr::<usize>(el, "label-count").unwrap_or(DEFAULT_LABEL_COUNT);
    let seed = dom::parse_data_attr::<u64>(el, "seed").unwrap_or(DEFAULT_NAME_SEED);
    let names = RandomNames::new(count, seed);

    let labels = match dom::data_attr(el, "labels") {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => NumberedLabels::new(count).labels(),
    };

    PageConfig {
        sphere,
        labels,
        names,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tag-sphere-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let PageConfig {
        sphere: config,
        labels,
        names,
    } = read_page_config(&canvas);

    let mut sphere = TagSphere::new(&labels, config)?;
    let toast_doc = document.clone();
    sphere.on_select(move |label| overlay::show_selection(&toast_doc, label));
    let sphere = Rc::new(RefCell::new(sphere));

    let gesture = Rc::new(RefCell::new(gesture::GestureTracker::new(
        TAP_SLOP_PX * dom::device_pixel_ratio(),
    )));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sphere: sphere.clone(),
        gesture,
    });
    events::wire_global_keydown(sphere.clone(), Rc::new(RefCell::new(names)), canvas.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sphere,
        canvas,
        ctx,
        drawn_revision: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
