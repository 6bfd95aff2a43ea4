//! Per-frame pipeline: advance the flight, render the point cloud, sample
//! the frame into text, step the tuner readout. One requestAnimationFrame
//! callback drives all of it.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use city_core::{Camera, CameraRig, FlightScheduler, Tuner};

use crate::dom;
use crate::render::GpuState;
use crate::sampler::AsciiSampler;

pub struct FrameContext {
    pub gpu: Option<GpuState<'static>>,
    pub scheduler: Option<FlightScheduler>,
    pub rig: CameraRig,
    pub camera: Camera,
    pub sampler: AsciiSampler,
    pub tuner: Rc<RefCell<Tuner>>,
    pub canvas: web::HtmlCanvasElement,
    pub display_el: Option<web::Element>,
    pub frequency_el: Option<web::Element>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if let (Some(gpu), Some(scheduler)) = (self.gpu.as_mut(), self.scheduler.as_mut()) {
            scheduler.tick(&mut self.rig);
            self.camera.eye = self.rig.position;
            self.camera.target = self.rig.look_at;

            match gpu.render(&self.camera) {
                Ok(()) => {
                    if let Some(display) = &self.display_el {
                        match self.sampler.sample(&self.canvas) {
                            Ok(text) => dom::set_text(display, &text),
                            Err(e) => dom::set_text(display, &format!("render error: {e}")),
                        }
                    }
                }
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
                }
                Err(e) => log::error!("render error: {e}"),
            }
        }

        // The readout only eases while no drag holds it; a drag writes the
        // display frequency directly.
        let frequency = {
            let mut tuner = self.tuner.borrow_mut();
            if tuner.is_dragging() {
                tuner.display_frequency()
            } else {
                tuner.step_display()
            }
        };
        if let Some(el) = &self.frequency_el {
            dom::set_text(el, &format!("{frequency:.1}"));
        }
    }

    /// Propagate a viewport change through the canvas, the GPU surface, the
    /// projection and the character grid.
    pub fn handle_resize(&mut self, window: &web::Window) {
        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(w, h);
        }
        self.camera.aspect = w.max(1) as f32 / h.max(1) as f32;
        let (vw, vh) = dom::viewport_size(window);
        self.sampler.resize(vw, vh);
    }
}

/// Kick off the render loop; each frame reschedules the next.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let callback_clone = callback.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = callback_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = callback.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
