//! Typewriter boot splash shown while the rest of the app spins up.

use city_core::boot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ID_BOOT_SCREEN, ID_BOOT_TEXT};
use crate::dom;

pub fn run(document: &web::Document) {
    let Some(screen) = dom::element_by_id(document, ID_BOOT_SCREEN) else {
        return;
    };
    let Some(text_el) = dom::element_by_id(document, ID_BOOT_TEXT) else {
        return;
    };

    let chars: Vec<char> = boot::BOOT_TEXT.chars().collect();
    let shown = Rc::new(RefCell::new(String::with_capacity(boot::BOOT_TEXT.len())));
    let index = Rc::new(RefCell::new(0usize));

    // Self-rescheduling timeout closure, one character per fire.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let text_for_tick = text_el.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let i = *index.borrow();
        if i >= chars.len() {
            let done = format!(
                "{}<span class=\"boot-cursor\">\u{2588}</span>",
                shown.borrow()
            );
            text_for_tick.set_inner_html(&done);
            return;
        }
        shown.borrow_mut().push(chars[i]);
        *index.borrow_mut() = i + 1;
        text_for_tick.set_text_content(Some(&shown.borrow()));

        if js_sys::Math::random() < boot::GLITCH_PROBABILITY {
            let _ = text_for_tick.class_list().add_1("boot-glitch");
            let glitched = text_for_tick.clone();
            dom::set_timeout(boot::GLITCH_DURATION_MS, move || {
                let _ = glitched.class_list().remove_1("boot-glitch");
            });
        }

        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    boot::type_delay_ms(i + 1),
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                boot::type_delay_ms(0),
            );
        }
    }

    // The splash dismisses itself regardless of typing progress.
    dom::set_timeout(boot::BOOT_DISMISS_MS, move || {
        let _ = screen.class_list().add_1("hidden");
        log::info!("boot sequence complete");
    });
}
