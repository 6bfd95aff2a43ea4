#![cfg(target_arch = "wasm32")]

//! Browser frontend: boots the splash, fetches the city model, renders the
//! fly-through on a hidden WebGPU canvas and mirrors every frame as ASCII
//! text, while the tuner UI drives ambient audio playback.

mod boot;
mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod model;
mod radio;
mod render;
mod sampler;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use city_core::{Camera, CameraRig, ChannelTable, FlightScheduler, Tuner, TunerConfig};

use crate::constants::{
    ID_ASCII_DISPLAY, ID_FREQUENCY_TEXT, ID_HIDDEN_CANVAS, ID_LOADING, ID_RAIN_ICON, ID_TIME_HOUR,
    MODEL_URL,
};
use crate::frame::FrameContext;
use crate::radio::Radio;
use crate::render::GpuState;
use crate::sampler::AsciiSampler;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ascii-city starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    boot::run(&document);

    let canvas = document
        .get_element_by_id(ID_HIDDEN_CANVAS)
        .ok_or_else(|| anyhow::anyhow!("missing #{ID_HIDDEN_CANVAS}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // Tuner state and the opening channel. Autoplay policy may hold the
    // first track back until a gesture; the switch itself still commits.
    let mut rng = StdRng::from_entropy();
    let mut tuner_state = Tuner::new(ChannelTable::new(&mut rng), TunerConfig::default());
    let first_channel = tuner_state.retune(0).cloned();
    let tuner = Rc::new(RefCell::new(tuner_state));

    let radio = Rc::new(RefCell::new(Radio::new(
        dom::html_element_by_id(&document, ID_TIME_HOUR),
        dom::html_element_by_id(&document, ID_RAIN_ICON),
    )));
    if let Some(channel) = first_channel {
        radio.borrow_mut().switch_to(&channel);
    }

    // Leak a canvas clone to satisfy the 'static lifetime of the surface.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = GpuState::new(leaked_canvas).await?;

    let (vw, vh) = dom::viewport_size(&window);
    let sampler = AsciiSampler::new(&document, vw, vh)?;
    let camera = Camera::new(canvas.width().max(1) as f32 / canvas.height().max(1) as f32);

    let ctx = Rc::new(RefCell::new(FrameContext {
        gpu: Some(gpu),
        scheduler: None,
        rig: CameraRig::default(),
        camera,
        sampler,
        tuner: tuner.clone(),
        canvas: canvas.clone(),
        display_el: dom::element_by_id(&document, ID_ASCII_DISPLAY),
        frequency_el: dom::element_by_id(&document, ID_FREQUENCY_TEXT),
    }));

    events::wire(&window, &document, ctx.clone(), tuner.clone(), radio.clone());

    let loading = dom::html_element_by_id(&document, ID_LOADING);
    let ctx_for_load = ctx.clone();
    let loading_for_load = loading.clone();
    loader::load_model(MODEL_URL, loading, move |bytes| {
        let parsed = match model::parse_glb(&bytes) {
            Ok(m) => m,
            Err(e) => {
                log::error!("model parse failed: {e}");
                if let Some(el) = &loading_for_load {
                    el.set_text_content(Some(&format!("Model parse failed: {e}")));
                    let _ = el.style().set_property("color", "red");
                }
                return;
            }
        };

        let mut ctx = ctx_for_load.borrow_mut();
        if let Some(gpu) = ctx.gpu.as_mut() {
            gpu.set_points(&parsed.points, parsed.bounds.size.y);
        }
        match FlightScheduler::new(&parsed.bounds) {
            Ok(scheduler) => {
                // First frames fly in from a pulled-back framing shot toward
                // the opening path.
                let fovy = ctx.camera.fovy_radians;
                ctx.rig = CameraRig {
                    position: Vec3::new(
                        0.0,
                        parsed.bounds.size.y * 0.5,
                        parsed.bounds.fit_distance(fovy),
                    ),
                    look_at: scheduler.start_pose().look_at,
                };
                ctx.scheduler = Some(scheduler);
                if let Some(el) = &loading_for_load {
                    dom::set_display(el, "none");
                }
            }
            Err(e) => {
                log::error!("flight init failed: {e}");
                if let Some(el) = &loading_for_load {
                    el.set_text_content(Some(&format!("Model unusable: {e}")));
                    let _ = el.style().set_property("color", "red");
                }
            }
        }
    });

    frame::start_loop(ctx);
    Ok(())
}
