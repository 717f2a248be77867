//! Small numeric helpers shared by every scroll-driven scene.

/// Clamp to `[0, 1]`. `NaN` is treated as the start of the range.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Map `p` linearly from the band `[a, b]` onto `[0, 1]`, clamped at both ends.
///
/// A degenerate band (`b <= a`) behaves as a step at `a`.
pub fn seg(p: f64, a: f64, b: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    if b <= a {
        return if p >= a { 1.0 } else { 0.0 };
    }
    clamp01((p - a) / (b - a))
}

/// Smoothstep easing, `t²(3 − 2t)`.
pub fn ease(t: f64) -> f64 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp01(t)
}

/// Number of characters of `text` visible at local progress `local`.
pub fn reveal_len(text: &str, local: f64) -> usize {
    let total = text.chars().count();
    let shown = (total as f64 * ease(local)).round() as usize;
    shown.min(total)
}

/// Prefix of `text` holding [`reveal_len`] characters.
pub fn reveal(text: &str, local: f64) -> &str {
    let n = reveal_len(text, local);
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn clamp01_handles_out_of_range_and_nan() {
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(7.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
    }

    #[test]
    fn seg_is_flat_outside_the_band() {
        for p in [-1.0, 0.0, 0.1, 0.2] {
            assert_eq!(seg(p, 0.2, 0.5), 0.0, "p = {p}");
        }
        for p in [0.5, 0.6, 1.0, 4.0] {
            assert_eq!(seg(p, 0.2, 0.5), 1.0, "p = {p}");
        }
    }

    #[test]
    fn seg_is_monotone_inside_the_band() {
        let mut last = 0.0;
        for p in samples() {
            let v = seg(p, 0.2, 0.5);
            assert!(v >= last, "seg decreased at p = {p}");
            last = v;
        }
        assert!((seg(0.35, 0.2, 0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn seg_with_degenerate_band_is_a_step() {
        assert_eq!(seg(0.29, 0.3, 0.3), 0.0);
        assert_eq!(seg(0.3, 0.3, 0.3), 1.0);
        assert_eq!(seg(0.5, 0.6, 0.4), 0.0);
    }

    #[test]
    fn ease_fixed_points_and_monotonicity() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert!((ease(0.5) - 0.5).abs() < 1e-12);
        let mut last = 0.0;
        for t in samples() {
            let v = ease(t);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn reveal_len_grows_to_full_length() {
        let text = "Hi! We need a landing page by Friday.";
        let mut last = 0;
        for t in samples() {
            let n = reveal_len(text, t);
            assert!(n >= last);
            last = n;
        }
        assert_eq!(reveal_len(text, 1.0), text.chars().count());
        assert_eq!(reveal_len(text, 0.0), 0);
    }

    #[test]
    fn reveal_respects_char_boundaries() {
        let text = "Привет, нужен сайт";
        for t in samples() {
            let shown = reveal(text, t);
            assert!(text.starts_with(shown));
            assert_eq!(shown.chars().count(), reveal_len(text, t));
        }
        assert_eq!(reveal(text, 1.0), text);
    }

    #[test]
    fn lerp_clamps_its_parameter() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 2.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, -1.0), 10.0);
    }
}
