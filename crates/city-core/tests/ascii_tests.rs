use city_core::{frame_to_text, luminance, ramp_char, AsciiError, AsciiGrid, LUMA_RAMP};

fn solid_frame(grid: AsciiGrid, value: u8) -> Vec<u8> {
    let mut px = vec![value; grid.cell_count() * 4];
    // Alpha channel is ignored by the converter; make it opaque anyway.
    for a in px.iter_mut().skip(3).step_by(4) {
        *a = 255;
    }
    px
}

#[test]
fn grid_tracks_viewport_proportions() {
    let grid = AsciiGrid::from_viewport(1920, 1080);
    assert_eq!(grid.width, 640);
    assert_eq!(grid.height, 180);
}

#[test]
fn grid_never_collapses_to_zero() {
    let grid = AsciiGrid::from_viewport(0, 0);
    assert_eq!(grid, AsciiGrid { width: 1, height: 1 });
    let grid = AsciiGrid::from_viewport(2, 5);
    assert_eq!(grid, AsciiGrid { width: 1, height: 1 });
}

#[test]
fn black_frame_is_all_darkest_char() {
    let grid = AsciiGrid::from_viewport(120, 60);
    let text = frame_to_text(&solid_frame(grid, 0), grid).unwrap();
    let dark = LUMA_RAMP[0] as char;
    assert!(text.chars().all(|c| c == dark || c == '\n'));
}

#[test]
fn white_frame_is_all_brightest_char() {
    let grid = AsciiGrid::from_viewport(120, 60);
    let text = frame_to_text(&solid_frame(grid, 255), grid).unwrap();
    let bright = LUMA_RAMP[LUMA_RAMP.len() - 1] as char;
    assert!(text.chars().all(|c| c == bright || c == '\n'));
}

#[test]
fn output_is_row_major_with_line_breaks() {
    let grid = AsciiGrid { width: 7, height: 3 };
    let text = frame_to_text(&vec![0u8; grid.cell_count() * 4], grid).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 7));
    assert!(text.ends_with('\n'));
}

#[test]
fn buffer_size_mismatch_is_an_error_not_a_panic() {
    let grid = AsciiGrid { width: 4, height: 4 };
    let err = frame_to_text(&[0u8; 10], grid).unwrap_err();
    assert_eq!(
        err,
        AsciiError::BufferSize {
            expected: 64,
            actual: 10
        }
    );
}

#[test]
fn luminance_uses_rec601_weights() {
    assert_eq!(luminance(0, 0, 0), 0.0);
    assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-6);
    // Green dominates perceived brightness.
    assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
    assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
}

#[test]
fn ramp_covers_both_ends_and_clamps() {
    assert_eq!(ramp_char(0.0), ' ');
    assert_eq!(ramp_char(1.0), '@');
    // Out-of-range inputs must not index past the ramp.
    assert_eq!(ramp_char(2.0), '@');
    assert_eq!(ramp_char(0.5), LUMA_RAMP[4] as char);
}
