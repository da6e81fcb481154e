//! Geometry for the spinning wheel.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelSegment {
    pub label: String,
    /// Index into the wheel palette.
    pub color: usize,
    pub start_deg: f64,
    pub end_deg: f64,
    /// SVG path data for the wedge, centred on the origin.
    pub path: String,
    /// Angle of the wedge's centre line, clockwise from the pointer.
    pub mid_deg: f64,
}

/// Cut a wheel of `radius` into one wedge per label.
///
/// Wedges run clockwise starting under the pointer at twelve o'clock.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segments(labels: &[&str], radius: f64, palette_len: usize) -> Vec<WheelSegment> {
    if labels.is_empty() {
        return Vec::new();
    }
    let sweep = 360.0 / labels.len() as f64;
    let palette_len = palette_len.max(1);
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let start_deg = index as f64 * sweep;
            let end_deg = start_deg + sweep;
            WheelSegment {
                label: (*label).to_string(),
                color: palette_color(index, labels.len(), palette_len),
                start_deg,
                end_deg,
                path: wedge_path(radius, start_deg, end_deg),
                mid_deg: start_deg + sweep / 2.0,
            }
        })
        .collect()
}

/// Pick a palette entry so neighbours differ, including the wrap-around pair.
fn palette_color(index: usize, count: usize, palette_len: usize) -> usize {
    let color = index % palette_len;
    let last = count - 1;
    if palette_len > 1 && index == last && last != 0 && color == 0 {
        1 % palette_len
    } else {
        color
    }
}

fn point(radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (radius * rad.sin(), -radius * rad.cos())
}

fn wedge_path(radius: f64, start_deg: f64, end_deg: f64) -> String {
    let sweep = end_deg - start_deg;
    if sweep >= 360.0 {
        return format!(
            "M 0 {top} A {radius} {radius} 0 1 1 0 {bottom} A {radius} {radius} 0 1 1 0 {top} Z",
            top = -radius,
            bottom = radius,
        );
    }
    let (x1, y1) = point(radius, start_deg);
    let (x2, y2) = point(radius, end_deg);
    let large_arc = u8::from(sweep > 180.0);
    format!("M 0 0 L {x1:.3} {y1:.3} A {radius} {radius} 0 {large_arc} 1 {x2:.3} {y2:.3} Z")
}

/// Clockwise rotation that brings the centre of `slot` (1-based) under the
/// pointer after `turns` full revolutions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn landing_rotation(slot: usize, count: usize, turns: u8) -> f64 {
    if count == 0 {
        return f64::from(turns) * 360.0;
    }
    let sweep = 360.0 / count as f64;
    let index = slot.clamp(1, count) - 1;
    let mid = (index as f64 + 0.5) * sweep;
    f64::from(turns) * 360.0 + (360.0 - mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedges_cover_the_circle() {
        let wedges = segments(&["Japan", "France", "Italy"], 100.0, 3);
        assert_eq!(wedges.len(), 3);
        assert!((wedges[0].start_deg - 0.0).abs() < f64::EPSILON);
        assert!((wedges[2].end_deg - 360.0).abs() < 1e-9);
        assert_eq!(wedges[1].label, "France");
        assert!(wedges[0].path.starts_with("M 0 0 L"));
    }

    #[test]
    fn neighbouring_wedges_never_share_a_colour() {
        for count in 2..12 {
            let labels: Vec<&str> = std::iter::repeat_n("x", count).collect();
            let wedges = segments(&labels, 50.0, 3);
            for pair in wedges.windows(2) {
                assert_ne!(pair[0].color, pair[1].color);
            }
            assert_ne!(wedges[0].color, wedges[count - 1].color);
        }
    }

    #[test]
    fn landing_puts_winner_under_pointer() {
        let rotation = landing_rotation(2, 3, 5);
        let mid_after_spin = (180.0 + rotation) % 360.0;
        assert!(mid_after_spin.abs() < 1e-9 || (mid_after_spin - 360.0).abs() < 1e-9);
        assert!(rotation >= 5.0 * 360.0);
    }

    #[test]
    fn single_segment_is_a_full_disc() {
        let wedges = segments(&["Solo"], 10.0, 3);
        assert!(wedges[0].path.contains(" A 10 10 0 1 1 0 10 "));
    }
}
