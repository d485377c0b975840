//! Small rolling-statistics helpers shared by the detectors.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation. Returns 0.0 for fewer than two points.
pub fn std_dev(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let m = mean(xs);
    let var = xs.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    var.sqrt()
}

/// Mid-rank fraction of `x` within `xs`: ties contribute half their count.
///
/// Returns 0.5 for an empty slice so downstream two-sided p-values stay
/// neutral.
pub fn midrank_fraction(xs: &[f64], x: f64) -> f64 {
    if xs.is_empty() {
        return 0.5;
    }
    let mut less = 0usize;
    let mut equal = 0usize;
    for &v in xs {
        if v < x {
            less += 1;
        } else if v == x {
            equal += 1;
        }
    }
    (less as f64 + 0.5 * equal as f64) / xs.len() as f64
}

/// Two-sided p-value from a rank fraction: `2 * min(f, 1 - f)`, clamped to
/// `[0, 1]`.
pub fn two_sided_p(fraction: f64) -> f64 {
    (2.0 * fraction.min(1.0 - fraction)).clamp(0.0, 1.0)
}

/// Moving average over a centered window of exactly `width` elements,
/// shrinking at the edges. Even widths take the extra element from the
/// right. Width 0 or 1 returns the input unchanged.
pub fn moving_average(xs: &[f64], width: usize) -> Vec<f64> {
    if width <= 1 || xs.is_empty() {
        return xs.to_vec();
    }
    let left = (width - 1) / 2;
    (0..xs.len())
        .map(|i| {
            let lo = i.saturating_sub(left);
            let hi = (i + width - left).min(xs.len());
            mean(&xs[lo..hi])
        })
        .collect()
}
