//! Audio playback and the channel HUD (hour flip card, rain icon).
//!
//! Channel switching is stop-then-start: the outgoing element is paused and
//! rewound, a fresh looped element plays the incoming track. Autoplay policy
//! can reject the first play; the failure is logged and the next user
//! gesture's switch succeeds.

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use city_core::{Channel, PLAYBACK_VOLUME};

use crate::constants::{HOUR_FLIP_DONE_MS, HOUR_FLIP_SWAP_MS};
use crate::dom;

pub struct Radio {
    audio: Option<web::HtmlAudioElement>,
    hour_el: Option<web::HtmlElement>,
    rain_el: Option<web::HtmlElement>,
}

impl Radio {
    pub fn new(hour_el: Option<web::HtmlElement>, rain_el: Option<web::HtmlElement>) -> Self {
        Self {
            audio: None,
            hour_el,
            rain_el,
        }
    }

    /// Start playing `channel` and update the HUD to match.
    pub fn switch_to(&mut self, channel: &Channel) {
        self.stop();
        match web::HtmlAudioElement::new_with_src(channel.audio_file) {
            Ok(audio) => {
                audio.set_loop(true);
                audio.set_volume(PLAYBACK_VOLUME);
                match audio.play() {
                    Ok(promise) => {
                        let file = channel.audio_file;
                        spawn_local(async move {
                            if let Err(e) = JsFuture::from(promise).await {
                                log::warn!("playback blocked for {file}: {:?}", e);
                            }
                        });
                    }
                    Err(e) => log::warn!("playback failed to start: {:?}", e),
                }
                self.audio = Some(audio);
            }
            Err(e) => log::error!("audio element creation failed: {:?}", e),
        }

        self.flip_hour(channel.hour_label());
        if let Some(rain) = &self.rain_el {
            dom::set_display(rain, if channel.rain { "block" } else { "none" });
        }
    }

    pub fn stop(&mut self) {
        if let Some(audio) = self.audio.take() {
            let _ = audio.pause();
            audio.set_current_time(0.0);
        }
    }

    /// Flip-card animation on the hour readout: the text swaps mid-flip.
    fn flip_hour(&self, label: String) {
        let Some(el) = self.hour_el.clone() else {
            return;
        };
        let _ = el.class_list().add_1("flip");

        let swap_el = el.clone();
        dom::set_timeout(HOUR_FLIP_SWAP_MS, move || {
            swap_el.set_text_content(Some(&label));
        });
        dom::set_timeout(HOUR_FLIP_DONE_MS, move || {
            let _ = el.class_list().remove_1("flip");
        });
    }
}
