use city_core::boot::{type_delay_ms, BOOT_DISMISS_MS, BOOT_TEXT, GLITCH_PROBABILITY};

#[test]
fn typing_speed_tiers() {
    assert_eq!(type_delay_ms(0), 1);
    assert_eq!(type_delay_ms(299), 1);
    assert_eq!(type_delay_ms(300), 8);
    assert_eq!(type_delay_ms(799), 8);
    assert_eq!(type_delay_ms(800), 3);
    assert_eq!(type_delay_ms(100_000), 3);
}

#[test]
fn boot_text_ends_with_the_online_marker() {
    assert!(BOOT_TEXT.trim_end().ends_with(">>> SYSTEM ONLINE <<<"));
}

#[test]
fn splash_outlives_the_fast_tier() {
    // The splash must stay up long enough for the banner to finish typing.
    assert!(BOOT_DISMISS_MS >= 1_000);
    assert!((0.0..1.0).contains(&GLITCH_PROBABILITY));
}
