use egui::Color32;
use rand::Rng;

/// Saturation used for every generated color. High on purpose.
pub const VIBRANT_SATURATION: f32 = 0.9;

/// Lightness range used for every generated color (mid-range, avoids
/// near-black and near-white marks).
pub const VIBRANT_LIGHTNESS: std::ops::RangeInclusive<f32> = 0.3..=0.7;

/// Convert an HSL color to RGB.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` in `[0, 1]`. Channels are
/// integer-truncated, not rounded; rendering output depends on this.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Sample a fresh vibrant color: integer hue anywhere on the wheel, fixed
/// high saturation, mid-range lightness.
pub fn vibrant_color<R: Rng>(rng: &mut R) -> Color32 {
    let hue = rng.gen_range(0..360) as f32;
    let lightness = rng.gen_range(VIBRANT_LIGHTNESS);
    let (r, g, b) = hsl_to_rgb(hue, VIBRANT_SATURATION, lightness);
    Color32::from_rgb(r, g, b)
}

/// Format a color as `#rrggbb`, lowercase, zero-padded.
pub fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn primary_fixed_points() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
    }

    #[test]
    fn grey_axis() {
        // Zero saturation collapses to lightness alone.
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(180.0, 0.0, 1.0), (255, 255, 255));
        let (r, g, b) = hsl_to_rgb(300.0, 0.0, 0.5);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn channels_truncate_not_round() {
        // l = 0.5, s = 0.9 gives c = 0.9, m = 0.05. At h = 0 the red channel
        // is (0.9 + 0.05) * 255 = 242.25, which must truncate to 242.
        let (r, _, _) = hsl_to_rgb(0.0, 0.9, 0.5);
        assert_eq!(r, 242);
    }

    #[test]
    fn channels_in_range_over_sweep() {
        // u8 output cannot overflow, but the conversion itself must not
        // saturate: every component stays within [0, 255] before the cast.
        for h in (0..360).step_by(5) {
            for s in 0..=10 {
                for l in 0..=10 {
                    let h = h as f32;
                    let s = s as f32 / 10.0;
                    let l = l as f32 / 10.0;
                    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
                    let m = l - c / 2.0;
                    assert!((c + m) * 255.0 <= 255.5, "h={h} s={s} l={l}");
                    assert!(m >= 0.0, "h={h} s={s} l={l}");
                    let _ = hsl_to_rgb(h, s, l);
                }
            }
        }
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(hex(Color32::from_rgb(255, 0, 10)), "#ff000a");
        assert_eq!(hex(Color32::from_rgb(0, 0, 0)), "#000000");
        assert_eq!(hex(Color32::from_rgb(171, 205, 239)), "#abcdef");
    }

    #[test]
    fn vibrant_color_is_deterministic_per_seed() {
        let mut a = Pcg64::seed_from_u64(7);
        let mut b = Pcg64::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(vibrant_color(&mut a), vibrant_color(&mut b));
        }
    }

    #[test]
    fn vibrant_color_is_fully_opaque() {
        let mut rng = Pcg64::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(vibrant_color(&mut rng).a(), 255);
        }
    }
}
