//! Decorative portal effects: rotating rings and drifting particles.
//!
//! Purely cosmetic. Positions are randomised once per mount so they stay put
//! across re-renders.

use dioxus::prelude::*;
use rand::Rng;

const RING_COUNT: usize = 5;

/// Randomised placement of one particle, as CSS values.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f32,
    pub top_pct: f32,
    pub opacity: f32,
    pub drift_x: f32,
    pub drift_y: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            opacity: rng.random_range(0.3..1.0),
            drift_x: rng.random_range(-100.0..100.0),
            drift_y: rng.random_range(-100.0..100.0),
            duration_s: rng.random_range(1.0..3.0),
            delay_s: rng.random_range(0.0..2.0),
        }
    }

    /// Inline style for a sparkle: position and timing only.
    pub fn sparkle_style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }

    /// Inline style consumed by the particle keyframes.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; opacity: {:.2}; --dx: {:.0}px; --dy: {:.0}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left_pct,
            self.top_pct,
            self.opacity,
            self.drift_x,
            self.drift_y,
            self.duration_s,
            self.delay_s
        )
    }
}

/// Inline style of the `index`-th concentric ring. Inner rings are smaller,
/// glow wider and spin slower.
pub fn ring_style(index: usize) -> String {
    format!(
        "--ring-scale: {:.2}; box-shadow: 0 0 {}px {}px rgba(74, 222, 128, 0.6); animation-duration: {}s, 2s",
        1.0 - index as f32 * 0.05,
        10 + index * 5,
        3 + index,
        8 + index
    )
}

/// Generate `count` particles.
pub fn scatter(count: usize) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..count).map(|_| Particle::random(&mut rng)).collect()
}

/// Full-size portal behind the overlay content.
#[component]
pub fn PortalRings(#[props(default = 20)] particles: usize) -> Element {
    let dots = use_hook(|| scatter(particles));

    rsx! {
        div { class: "portal",
            div { class: "portal-inner",
                for i in 0..RING_COUNT {
                    div {
                        key: "ring-{i}",
                        class: if i % 2 == 0 { "portal-ring spin-cw" } else { "portal-ring spin-ccw" },
                        style: "{ring_style(i)}",
                    }
                }
                for (i, dot) in dots.iter().enumerate() {
                    div {
                        key: "particle-{i}",
                        class: "portal-particle",
                        style: "{dot.style()}",
                    }
                }
            }
        }
    }
}

/// Small glowing sparkles over an image.
#[component]
pub fn Sparkles(#[props(default = 15)] count: usize) -> Element {
    let dots = use_hook(|| scatter(count));

    rsx! {
        div { class: "sparkles",
            for (i, dot) in dots.iter().enumerate() {
                div {
                    key: "sparkle-{i}",
                    class: "sparkle",
                    style: "{dot.sparkle_style()}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_in_bounds() {
        for p in scatter(200) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.3..1.0).contains(&p.opacity));
            assert!((1.0..3.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn rings_shrink_inward() {
        assert!(ring_style(0).starts_with("--ring-scale: 1.00;"));
        assert!(ring_style(4).starts_with("--ring-scale: 0.80;"));
        assert!(ring_style(4).contains("0 0 30px 7px"));
        assert!(ring_style(4).contains("animation-duration: 12s"));
    }

    #[test]
    fn style_contains_drift_vars() {
        let p = Particle {
            left_pct: 12.0,
            top_pct: 50.0,
            opacity: 0.5,
            drift_x: -40.0,
            drift_y: 30.0,
            duration_s: 1.5,
            delay_s: 0.0,
        };
        let style = p.style();
        assert!(style.contains("left: 12.0%"));
        assert!(style.contains("--dx: -40px"));
        assert!(style.contains("--dy: 30px"));
    }
}
