//! Decorative particle field behind the hero section.
//!
//! Particles are generated from a fixed seed so the server render and the
//! hydrated page lay them out identically.

use crate::theme::Theme;

/// Seconds for one drift cycle of a particle at speed 1.0.
const BASE_CYCLE_SECS: f64 = 2.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Near,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub depth: Depth,
    pub count: usize,
    /// Largest particle diameter in pixels.
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub seed: u64,
}

/// Close, bright and fast.
pub const NEAR_LAYER: Layer = Layer {
    depth: Depth::Near,
    count: 60,
    size: 3.0,
    speed: 0.4,
    opacity: 0.7,
    seed: 0x5eed_0001,
};

/// Far, dim and slow background dust.
pub const FAR_LAYER: Layer = Layer {
    depth: Depth::Far,
    count: 140,
    size: 1.5,
    speed: 0.2,
    opacity: 0.3,
    seed: 0x5eed_0002,
};

impl Layer {
    pub fn color(&self, theme: Theme) -> &'static str {
        match (theme, self.depth) {
            (Theme::Dark, Depth::Near) => "#38bdf8",
            (Theme::Dark, Depth::Far) => "#ffffff",
            (Theme::Light, Depth::Near) => "#7c3aed",
            (Theme::Light, Depth::Far) => "#64748b",
        }
    }

    pub fn cycle_secs(&self) -> f64 {
        BASE_CYCLE_SECS / self.speed
    }

    pub fn particles(&self) -> Vec<Particle> {
        let mut rng = SplitMix64(self.seed);
        let cycle = self.cycle_secs();
        (0..self.count)
            .map(|_| Particle {
                left_pct: rng.next_unit() * 100.0,
                top_pct: rng.next_unit() * 100.0,
                size_px: (self.size * (0.5 + rng.next_unit() * 0.5)).max(1.0),
                delay_secs: rng.next_unit() * cycle,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_secs: f64,
}

impl Particle {
    pub fn style(&self, layer: &Layer, theme: Theme) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;opacity:{};background-color:{};animation-duration:{:.2}s;animation-delay:-{:.2}s",
            self.left_pct,
            self.top_pct,
            self.size_px,
            self.size_px,
            layer.opacity,
            layer.color(theme),
            layer.cycle_secs(),
            self.delay_secs,
        )
    }
}

struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(NEAR_LAYER.particles(), NEAR_LAYER.particles());
        assert_ne!(NEAR_LAYER.particles()[0], FAR_LAYER.particles()[0]);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        for layer in [NEAR_LAYER, FAR_LAYER] {
            let particles = layer.particles();
            assert_eq!(particles.len(), layer.count);
            for p in particles {
                assert!((0.0..100.0).contains(&p.left_pct));
                assert!((0.0..100.0).contains(&p.top_pct));
                assert!(p.size_px >= 1.0 && p.size_px <= layer.size);
                assert!(p.delay_secs < layer.cycle_secs());
            }
        }
    }

    #[test]
    fn test_colors_follow_theme() {
        assert_eq!(NEAR_LAYER.color(Theme::Dark), "#38bdf8");
        assert_eq!(FAR_LAYER.color(Theme::Dark), "#ffffff");
        assert_eq!(NEAR_LAYER.color(Theme::Light), "#7c3aed");
        assert_eq!(FAR_LAYER.color(Theme::Light), "#64748b");
    }

    #[test]
    fn test_far_layer_drifts_slower() {
        assert!(FAR_LAYER.cycle_secs() > NEAR_LAYER.cycle_secs());
        let style = NEAR_LAYER.particles()[0].style(&NEAR_LAYER, Theme::Dark);
        assert!(style.contains("animation-duration:6.00s"));
        assert!(style.contains("background-color:#38bdf8"));
    }
}
