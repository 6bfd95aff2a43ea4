//! The radio tuner: 24 fixed channels, drag-to-tune frequency mapping and
//! the inertial frequency readout.
//!
//! Playback itself lives in the web frontend; everything here is pure state
//! so the snap and smoothing contracts can be tested on the host.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{
    BASE_FREQUENCY_MHZ, CHANNEL_COUNT, CHANNEL_SPACING_MHZ, DISPLAY_EPSILON_MHZ,
    DISPLAY_SMOOTHING, DRAG_SENSITIVITY_MHZ_PER_PX, SNAP_THRESHOLD_MHZ,
};

/// One ambient track per channel, in band order.
pub const AUDIO_FILES: [&str; CHANNEL_COUNT] = [
    "./220624_0005.wav",
    "./220624_0006.wav",
    "./220624_0007.wav",
    "./220624_0011.wav",
    "./220624_0012.wav",
    "./220626_0013.wav",
    "./220626_0014.wav",
    "./220626_0015.wav",
    "./220626_0016.wav",
    "./220626_0017.wav",
    "./220626_0018.wav",
    "./220626_0019.wav",
    "./220626_0020.wav",
    "./220626_0021.wav",
    "./220626_0022.wav",
    "./220626_0023.wav",
    "./220626_0024.wav",
    "./220626_0025.wav",
    "./220626_0026.wav",
    "./220626_0027.wav",
    "./220626_0028.wav",
    "./220626_0029.wav",
    "./220626_0030.wav",
    "./220626_0031.wav",
];

/// Channels carrying rain recordings; their hour labels are pinned.
pub const RAIN_CHANNELS: [usize; 3] = [5, 6, 7];
const RAIN_HOURS: [u8; 3] = [17, 18, 19];

#[derive(Clone, Debug)]
pub struct Channel {
    pub audio_file: &'static str,
    pub frequency_mhz: f32,
    pub hour: u8,
    pub rain: bool,
}

impl Channel {
    /// Zero-padded hour digits shown on the flip card.
    pub fn hour_label(&self) -> String {
        format!("{:02}", self.hour)
    }
}

/// Fixed ordered list of the 24 channels. Hour labels are a permutation of
/// 0-23: the three rain channels are pinned to 17/18/19, the rest drawn from
/// an unbiased shuffle of the remaining 21 hours.
pub struct ChannelTable {
    channels: Vec<Channel>,
}

impl ChannelTable {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hours = assign_hours(rng);
        let channels = AUDIO_FILES
            .iter()
            .enumerate()
            .map(|(i, file)| Channel {
                audio_file: file,
                frequency_mhz: BASE_FREQUENCY_MHZ + i as f32 * CHANNEL_SPACING_MHZ,
                hour: hours[i],
                rain: RAIN_CHANNELS.contains(&i),
            })
            .collect();
        Self { channels }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn min_frequency(&self) -> f32 {
        self.channels[0].frequency_mhz
    }

    pub fn max_frequency(&self) -> f32 {
        self.channels[self.channels.len() - 1].frequency_mhz
    }

    /// Nearest channel by absolute frequency difference.
    pub fn nearest(&self, frequency_mhz: f32) -> (usize, f32) {
        let mut best = (0usize, (frequency_mhz - self.channels[0].frequency_mhz).abs());
        for (i, ch) in self.channels.iter().enumerate() {
            let diff = (frequency_mhz - ch.frequency_mhz).abs();
            if diff < best.1 {
                best = (i, diff);
            }
        }
        best
    }
}

fn assign_hours<R: Rng + ?Sized>(rng: &mut R) -> [u8; CHANNEL_COUNT] {
    let mut pool: Vec<u8> = (0..CHANNEL_COUNT as u8)
        .filter(|h| !RAIN_HOURS.contains(h))
        .collect();
    pool.shuffle(rng);

    let mut hours = [0u8; CHANNEL_COUNT];
    let mut drawn = pool.into_iter();
    for (i, slot) in hours.iter_mut().enumerate() {
        *slot = match RAIN_CHANNELS.iter().position(|&c| c == i) {
            Some(pinned) => RAIN_HOURS[pinned],
            // The pool holds exactly 21 hours for the 21 unpinned slots.
            None => drawn.next().unwrap_or(0),
        };
    }
    hours
}

/// Drag and readout tuning. Defaults preserve the original hand-tuned
/// values; treat them as parameters, not law.
#[derive(Clone, Copy, Debug)]
pub struct TunerConfig {
    pub drag_sensitivity: f32,
    pub snap_threshold_mhz: f32,
    pub display_smoothing: f32,
    pub display_epsilon_mhz: f32,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY_MHZ_PER_PX,
            snap_threshold_mhz: SNAP_THRESHOLD_MHZ,
            display_smoothing: DISPLAY_SMOOTHING,
            display_epsilon_mhz: DISPLAY_EPSILON_MHZ,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct DragAnchor {
    start_y: f32,
    start_frequency: f32,
}

/// Mutable tuner state: the tuned channel, the smoothed display frequency and
/// the active drag gesture, if any.
pub struct Tuner {
    table: ChannelTable,
    config: TunerConfig,
    current_channel: usize,
    target_channel: usize,
    display_frequency: f32,
    drag: Option<DragAnchor>,
}

impl Tuner {
    pub fn new(table: ChannelTable, config: TunerConfig) -> Self {
        let display_frequency = table.min_frequency();
        Self {
            table,
            config,
            current_channel: 0,
            target_channel: 0,
            display_frequency,
            drag: None,
        }
    }

    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    pub fn current_channel(&self) -> usize {
        self.current_channel
    }

    pub fn channel(&self) -> &Channel {
        &self.table.channels[self.current_channel]
    }

    pub fn display_frequency(&self) -> f32 {
        self.display_frequency
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Direct channel select (startup tunes channel 0 this way).
    pub fn retune(&mut self, index: usize) -> Option<&Channel> {
        let ch = self.table.get(index)?;
        self.current_channel = index;
        self.target_channel = index;
        Some(ch)
    }

    /// Anchor a drag at the given vertical coordinate.
    pub fn begin_drag(&mut self, y: f32) {
        self.drag = Some(DragAnchor {
            start_y: y,
            start_frequency: self.display_frequency,
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Track a pointer move during a drag. Moving up raises the frequency.
    /// Returns the newly snapped channel when the gesture locks onto one;
    /// switching is immediate, not deferred to release.
    pub fn drag_to(&mut self, y: f32) -> Option<usize> {
        let anchor = self.drag?;
        let delta = anchor.start_y - y;
        let frequency = (anchor.start_frequency + delta * self.config.drag_sensitivity)
            .clamp(self.table.min_frequency(), self.table.max_frequency());
        self.display_frequency = frequency;

        let (nearest, diff) = self.table.nearest(frequency);
        if diff < self.config.snap_threshold_mhz && nearest != self.target_channel {
            self.target_channel = nearest;
            self.current_channel = nearest;
            return Some(nearest);
        }
        None
    }

    /// One smoothing step of the frequency readout toward the target channel.
    /// Decoupled from playback switching; idempotent once converged.
    pub fn step_display(&mut self) -> f32 {
        let target = self.table.channels[self.target_channel].frequency_mhz;
        let diff = target - self.display_frequency;
        if diff.abs() > self.config.display_epsilon_mhz {
            self.display_frequency += diff * self.config.display_smoothing;
        } else {
            self.display_frequency = target;
        }
        self.display_frequency
    }
}
