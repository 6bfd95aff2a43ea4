use city_core::{ChannelTable, Tuner, TunerConfig, CHANNEL_COUNT, RAIN_CHANNELS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn table(seed: u64) -> ChannelTable {
    ChannelTable::new(&mut StdRng::seed_from_u64(seed))
}

fn tuner(seed: u64) -> Tuner {
    Tuner::new(table(seed), TunerConfig::default())
}

#[test]
fn frequencies_form_the_fm_band() {
    let t = table(1);
    for i in 0..CHANNEL_COUNT {
        let f = t.get(i).unwrap().frequency_mhz;
        assert!((f - (88.0 + i as f32)).abs() < 1e-5);
    }
    assert_eq!(t.min_frequency(), 88.0);
    assert_eq!(t.max_frequency(), 111.0);
}

#[test]
fn hours_are_a_permutation_with_rain_channels_pinned() {
    for seed in 0..20 {
        let t = table(seed);
        let mut hours: Vec<u8> = (0..CHANNEL_COUNT).map(|i| t.get(i).unwrap().hour).collect();
        assert_eq!(t.get(5).unwrap().hour, 17);
        assert_eq!(t.get(6).unwrap().hour, 18);
        assert_eq!(t.get(7).unwrap().hour, 19);
        hours.sort_unstable();
        let expected: Vec<u8> = (0..CHANNEL_COUNT as u8).collect();
        assert_eq!(hours, expected, "seed {} broke the permutation", seed);
    }
}

#[test]
fn hour_assignment_is_deterministic_per_seed() {
    let a = table(42);
    let b = table(42);
    for i in 0..CHANNEL_COUNT {
        assert_eq!(a.get(i).unwrap().hour, b.get(i).unwrap().hour);
    }
}

#[test]
fn hour_label_is_just_the_padded_digits() {
    let t = table(11);
    assert_eq!(t.get(5).unwrap().hour_label(), "17");
    for i in 0..CHANNEL_COUNT {
        let ch = t.get(i).unwrap();
        let label = ch.hour_label();
        assert_eq!(label.len(), 2, "hour {} rendered as {:?}", ch.hour, label);
        assert!(label.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(label.parse::<u8>().ok(), Some(ch.hour));
    }
}

#[test]
fn rain_flag_matches_the_fixed_membership() {
    let t = table(7);
    for i in 0..CHANNEL_COUNT {
        assert_eq!(t.get(i).unwrap().rain, RAIN_CHANNELS.contains(&i));
    }
}

#[test]
fn exact_frequencies_resolve_with_zero_error() {
    let t = table(3);
    for k in 0..CHANNEL_COUNT {
        let (idx, diff) = t.nearest(88.0 + k as f32);
        assert_eq!(idx, k);
        assert_eq!(diff, 0.0);
    }
}

#[test]
fn drag_to_95_mhz_switches_to_the_third_rain_channel() {
    let mut tuner = tuner(0);
    assert_eq!(tuner.current_channel(), 0);

    // 14 px upward at 0.5 MHz/px: 88.0 -> 95.0.
    tuner.begin_drag(100.0);
    let switched = tuner.drag_to(86.0);

    assert_eq!(switched, Some(7));
    assert_eq!(tuner.current_channel(), 7);
    assert!(tuner.channel().rain);
    assert_eq!(tuner.channel().hour, 19);
    assert!((tuner.display_frequency() - 95.0).abs() < 1e-4);
}

#[test]
fn midpoint_between_channels_does_not_snap() {
    let mut tuner = tuner(0);
    // 89.5 sits exactly between channels 1 and 2; outside the strict
    // snap threshold, so the gesture keeps the current target.
    tuner.begin_drag(0.0);
    let switched = tuner.drag_to(-3.0);
    assert_eq!(switched, None);
    assert_eq!(tuner.current_channel(), 0);
    assert!((tuner.display_frequency() - 89.5).abs() < 1e-4);
}

#[test]
fn drag_is_clamped_to_the_band_edges() {
    let mut tuner = tuner(0);
    tuner.begin_drag(0.0);
    tuner.drag_to(10_000.0);
    assert_eq!(tuner.display_frequency(), 88.0);
    tuner.drag_to(-10_000.0);
    assert_eq!(tuner.display_frequency(), 111.0);
    assert_eq!(tuner.current_channel(), 23);
}

#[test]
fn moves_without_an_anchor_are_ignored() {
    let mut tuner = tuner(0);
    assert_eq!(tuner.drag_to(-50.0), None);
    assert_eq!(tuner.display_frequency(), 88.0);
    tuner.begin_drag(0.0);
    tuner.end_drag();
    assert_eq!(tuner.drag_to(-50.0), None);
}

#[test]
fn repeat_snap_to_same_channel_reports_nothing() {
    let mut tuner = tuner(0);
    tuner.begin_drag(0.0);
    assert_eq!(tuner.drag_to(-4.0), Some(2)); // 90.0
    assert_eq!(tuner.drag_to(-4.2), None); // 90.1, still channel 2
}

#[test]
fn display_converges_then_holds_exactly() {
    let mut tuner = tuner(0);
    tuner.retune(5);
    let target = 93.0;

    let mut steps = 0;
    while (tuner.display_frequency() - target).abs() > 0.01 {
        tuner.step_display();
        steps += 1;
        assert!(steps < 200, "display smoothing never converged");
    }
    tuner.step_display();
    assert_eq!(tuner.display_frequency(), target);
    // Idempotent once converged.
    tuner.step_display();
    assert_eq!(tuner.display_frequency(), target);
}

#[test]
fn retune_rejects_out_of_range_channels() {
    let mut tuner = tuner(0);
    assert!(tuner.retune(CHANNEL_COUNT).is_none());
    assert_eq!(tuner.current_channel(), 0);
}
