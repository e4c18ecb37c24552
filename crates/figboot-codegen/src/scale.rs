//! Bootstrap spacing scale.
//!
//! Maps raw pixel distances onto the discrete indices used by spacing
//! utilities (`p-2`, `gap-3`, ...).

/// Scale index → pixel value, ordered by index.
pub const SPACING_SCALE: [(u8, f64); 6] = [
    (0, 0.0),
    (1, 4.0),
    (2, 8.0),
    (3, 12.0),
    (4, 16.0),
    (5, 24.0),
];

/// Index of the scale entry closest to `px` (rounded to the nearest integer).
///
/// Ties go to the lower index. Missing or zero input maps to index 0.
pub fn nearest_scale(px: Option<f64>) -> u8 {
    let Some(px) = px else {
        return 0;
    };
    let target = px.round();
    if target == 0.0 {
        return 0;
    }

    let (mut best, first_value) = SPACING_SCALE[0];
    let mut best_diff = (target - first_value).abs();
    for &(index, value) in &SPACING_SCALE[1..] {
        let diff = (target - value).abs();
        if diff < best_diff {
            best = index;
            best_diff = diff;
        }
    }

    log::trace!("{px}px -> scale {best}");
    best
}
