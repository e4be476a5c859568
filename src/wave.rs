use crate::color::Color;

/// Build the gradient for the shimmer wave: a symmetric ramp that rises from
/// the base color up to the peak lightness and back down, so the wave reads
/// as a smooth pulse when it sweeps across the text.
pub fn wave_colors(base: Color, wave_width: usize, peak_light: u8) -> Vec<Color> {
    let steps = wave_width.max(2);
    let mid = steps / 2;

    (0..steps)
        .map(|i| {
            // 0.0 at the edges, 1.0 at the midpoint. With steps >= 2 the
            // midpoint is at least 1, so neither divisor can be zero.
            let ratio = if i <= mid {
                i as f64 / mid as f64
            } else {
                (steps - 1 - i) as f64 / (steps - 1 - mid) as f64
            };
            let pct = (ratio * f64::from(peak_light)).floor() as u8;
            base.lightened(pct)
        })
        .collect()
}
