//! Segment coloring: length to hue sweep to RGB.
//!
//! Longer segments mean the particle was moving faster, so the sweep doubles
//! as a speed readout. The length is normalized against a calibration
//! constant (the expected maximum for the tuned step size), mapped through an
//! affine hue transform, then converted with the standard six-sector HSV
//! conversion at full saturation and value.

/// 8-bit RGBA color, alpha always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Affine mapping from a length ratio to a hue, plus the length
/// normalization constant the ratio is computed against.
///
/// `max_length` is tied to the integration step size: if the step or the
/// coefficients change a lot, lengths drift outside the expected range and
/// colors bunch up at one end of the sweep. Ratios outside [0, 1] are not an
/// error; the resulting hue wraps around the color wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSweep {
    /// Hue degrees covered by ratio 0..=1.
    pub range: f64,
    /// Hue at ratio 0.
    pub offset: f64,
    /// Expected maximum segment length for the current step size.
    pub max_length: f64,
}

impl HueSweep {
    /// Full 0-360° rainbow sweep.
    pub const FULL: Self = Self {
        range: 360.0,
        offset: 0.0,
        max_length: 1.68,
    };

    /// Restricted purple-leaning sweep (250°-330°).
    pub const PURPLE: Self = Self {
        range: 80.0,
        offset: 250.0,
        max_length: 0.56,
    };

    /// Color for a segment of the given length.
    pub fn color(&self, length: f64) -> Rgba {
        let ratio = length / self.max_length;
        let hue = ratio * self.range + self.offset;
        hsv_to_rgb(hue, 1.0, 1.0)
    }
}

impl Default for HueSweep {
    fn default() -> Self {
        Self::FULL
    }
}

/// Six-sector HSV to RGB. Hue in degrees (any value, wrapped into
/// [0, 360)), saturation and value in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgba {
    let h = h.rem_euclid(360.0);
    let sector = (h / 60.0) as u32 % 6;
    let f = h / 60.0 - (h / 60.0).floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
        a: 255,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 255 }
    }

    #[test]
    fn test_sector_boundaries() {
        // At s = v = 1 and f = 0 every boundary hue hits the channel
        // extremes exactly.
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), rgb(255, 255, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), rgb(0, 255, 255));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), rgb(255, 0, 255));
    }

    #[test]
    fn test_full_sweep_endpoints() {
        let sweep = HueSweep::FULL;
        // ratio 0 -> hue 0, ratio 1 -> hue 360 which wraps back to red
        assert_eq!(sweep.color(0.0), rgb(255, 0, 0));
        assert_eq!(sweep.color(sweep.max_length), rgb(255, 0, 0));
        // ratio 0.5 -> hue 180
        assert_eq!(sweep.color(sweep.max_length * 0.5), rgb(0, 255, 255));
    }

    #[test]
    fn test_purple_sweep_endpoints() {
        let sweep = HueSweep::PURPLE;
        assert_eq!(sweep.color(0.0), hsv_to_rgb(250.0, 1.0, 1.0));
        assert_eq!(sweep.color(sweep.max_length), hsv_to_rgb(330.0, 1.0, 1.0));
    }

    #[test]
    fn test_out_of_range_ratio_wraps() {
        let sweep = HueSweep::FULL;
        // ratio 1.5 -> hue 540 -> wraps to 180
        assert_eq!(sweep.color(sweep.max_length * 1.5), rgb(0, 255, 255));
        // negative length ratios wrap the other way
        assert_eq!(sweep.color(-sweep.max_length * 0.5), rgb(0, 255, 255));
    }

    #[test]
    fn test_alpha_always_opaque() {
        for i in 0..32 {
            let c = HueSweep::FULL.color(i as f64 * 0.1);
            assert_eq!(c.a, 255);
        }
    }
}
