//! Input wiring: vertical drag-to-tune on mouse and touch, plus window
//! resize. A gesture starts on the frequency readout; move and release are
//! tracked document-wide so a drag survives leaving the element. Handlers
//! live for the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use city_core::Tuner;

use crate::constants::ID_FREQUENCY_TEXT;
use crate::dom;
use crate::frame::FrameContext;
use crate::radio::Radio;

fn drag_move(tuner: &Rc<RefCell<Tuner>>, radio: &Rc<RefCell<Radio>>, y: f32) {
    let snapped = {
        let mut tuner = tuner.borrow_mut();
        tuner.drag_to(y).and_then(|idx| tuner.table().get(idx).cloned())
    };
    // Switching tracks the snap immediately, mid-gesture.
    if let Some(channel) = snapped {
        radio.borrow_mut().switch_to(&channel);
    }
}

fn set_drag_cursor(document: &web::Document, active: bool) {
    if let Some(body) = document.body() {
        let _ = if active {
            body.class_list().add_1("dragging")
        } else {
            body.class_list().remove_1("dragging")
        };
    }
}

pub fn wire(
    window: &web::Window,
    document: &web::Document,
    ctx: Rc<RefCell<FrameContext>>,
    tuner: Rc<RefCell<Tuner>>,
    radio: Rc<RefCell<Radio>>,
) {
    let readout = dom::element_by_id(document, ID_FREQUENCY_TEXT);
    if readout.is_none() {
        log::warn!("missing #{ID_FREQUENCY_TEXT}, tuning gestures disabled");
    }

    if let Some(readout) = &readout {
        let tuner = tuner.clone();
        let document = document.clone();
        let on_down = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            tuner.borrow_mut().begin_drag(ev.client_y() as f32);
            set_drag_cursor(&document, true);
        }) as Box<dyn FnMut(_)>);
        let _ = readout
            .add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref());
        on_down.forget();
    }
    {
        let tuner = tuner.clone();
        let radio = radio.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            drag_move(&tuner, &radio, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }
    {
        let tuner = tuner.clone();
        let document = document.clone();
        let on_up = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            tuner.borrow_mut().end_drag();
            set_drag_cursor(&document, false);
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref());
        on_up.forget();
    }

    if let Some(readout) = &readout {
        let tuner = tuner.clone();
        let on_start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                ev.prevent_default();
                tuner.borrow_mut().begin_drag(touch.client_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = readout
            .add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
        on_start.forget();
    }
    {
        let tuner = tuner.clone();
        let radio = radio.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if !tuner.borrow().is_dragging() {
                return;
            }
            if let Some(touch) = ev.touches().get(0) {
                // Keep the page from scrolling under the gesture.
                ev.prevent_default();
                drag_move(&tuner, &radio, touch.client_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("touchmove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }
    {
        let tuner = tuner.clone();
        let on_end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            tuner.borrow_mut().end_drag();
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());
        on_end.forget();
    }

    {
        let ctx = ctx.clone();
        let window_for_resize = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            ctx.borrow_mut().handle_resize(&window_for_resize);
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }
}
