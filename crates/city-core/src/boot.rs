//! Boot splash content and typewriter pacing.

pub const BOOT_TEXT: &str = "\
+---------------------------------------------------------------+
|                                                               |
|            A S C I I   C I T Y   # 2 0 2 5 0 0 1 0 2          |
|                                                               |
|                  WASHINGTON SQUARE  .  NEW YORK               |
|                                                               |
+---------------------------------------------------------------+

[SYSTEM] Initializing core modules...
[SYSTEM] Loading ASCII renderer...
[SYSTEM] Connecting to 3D visualization engine...
[SYSTEM] Establishing audio channels...
[SYSTEM] Calibrating frequency tuner...
[SYSTEM] Mapping spatial coordinates...
[SYSTEM] Activating drone flight paths...
[SYSTEM] Loading city block model...
[SYSTEM] Compiling shader programs...
[SYSTEM] Allocating memory buffers...
[SYSTEM] Initializing camera systems...
[SYSTEM] Configuring lighting parameters...
[SYSTEM] Building scene graph...
[SYSTEM] Calculating bounding volumes...
[SYSTEM] Loading audio samples...
[SYSTEM] Registering event handlers...
[SYSTEM] Starting render loop...
[SYSTEM] Activating ASCII conversion...
[SYSTEM] Synchronizing frame buffers...
[SYSTEM] Verifying system integrity...
[SYSTEM] All systems operational.
[SYSTEM] Ready for launch.

>>> BOOT SEQUENCE COMPLETE <<<
>>> ENTERING MAIN LOOP <<<
>>> SYSTEM ONLINE <<<
";

// Typing speed tiers: the banner flies past, the system log lingers, the
// closing markers land quickly.
const FAST_UNTIL: usize = 300;
const SLOW_UNTIL: usize = 800;

/// Delay in milliseconds before typing the character at `char_index`.
#[inline]
pub fn type_delay_ms(char_index: usize) -> i32 {
    if char_index < FAST_UNTIL {
        1
    } else if char_index < SLOW_UNTIL {
        8
    } else {
        3
    }
}

/// Chance per character of a one-off glitch flash.
pub const GLITCH_PROBABILITY: f64 = 0.05;
pub const GLITCH_DURATION_MS: i32 = 100;

/// The splash dismisses itself this long after it starts.
pub const BOOT_DISMISS_MS: i32 = 5_000;
