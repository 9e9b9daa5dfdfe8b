use yew::prelude::*;

use crate::components::icons::Heart;
use crate::rng::RandomSource;

pub const HEART_COUNT: usize = 20;

/// Per-heart animation parameters, drawn once at mount.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartSpec {
    /// Horizontal position, percent of viewport width.
    pub x: f64,
    /// Seconds.
    pub delay: f64,
    /// Seconds.
    pub duration: f64,
    /// Pixels.
    pub size: f64,
    pub opacity: f64,
}

impl HeartSpec {
    pub fn sample(rng: &mut impl RandomSource) -> Self {
        Self {
            x: rng.uniform(0.0, 100.0),
            delay: rng.uniform(0.0, 10.0),
            duration: rng.uniform(8.0, 14.0),
            size: rng.uniform(12.0, 36.0),
            opacity: rng.uniform(0.1, 0.4),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; --heart-opacity: {:.3}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.opacity, self.duration, self.delay
        )
    }
}

pub fn generate_hearts(count: usize, rng: &mut impl RandomSource) -> Vec<HeartSpec> {
    (0..count).map(|_| HeartSpec::sample(rng)).collect()
}

#[function_component(FloatingHearts)]
pub fn floating_hearts() -> Html {
    let hearts = use_state(|| generate_hearts(HEART_COUNT, &mut fastrand::Rng::new()));

    html! {
        <div class="floating-hearts" aria-hidden="true">
            <style>
                {r#"
                    .floating-hearts {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                        z-index: 0;
                    }
                    .floating-heart {
                        position: absolute;
                        bottom: -50px;
                        opacity: 0;
                        color: #ec4899;
                        animation-name: floatUp;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    .floating-heart .icon {
                        fill: rgba(236, 72, 153, 0.3);
                    }
                    @keyframes floatUp {
                        0% { transform: translateY(0) rotate(0deg); opacity: 0; }
                        33% { transform: translateY(-40vh) rotate(15deg); opacity: var(--heart-opacity); }
                        66% { transform: translateY(-80vh) rotate(-15deg); opacity: var(--heart-opacity); }
                        100% { transform: translateY(-120vh) rotate(0deg); opacity: 0; }
                    }
                "#}
            </style>
            { for hearts.iter().enumerate().map(|(i, heart)| html! {
                <div key={i} class="floating-heart" style={heart.style()}>
                    <Heart size={heart.size.round() as u32} stroke_width={1.5} />
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_twenty_hearts_within_ranges() {
        let mut rng = fastrand::Rng::with_seed(2026);
        let hearts = generate_hearts(HEART_COUNT, &mut rng);
        assert_eq!(hearts.len(), 20);
        for heart in &hearts {
            assert!((0.0..100.0).contains(&heart.x));
            assert!((0.0..10.0).contains(&heart.delay));
            assert!((8.0..14.0).contains(&heart.duration));
            assert!((12.0..36.0).contains(&heart.size));
            assert!((0.1..0.4).contains(&heart.opacity));
        }
    }

    #[test]
    fn hearts_are_not_synchronized() {
        let mut rng = fastrand::Rng::with_seed(14);
        let hearts = generate_hearts(HEART_COUNT, &mut rng);
        let first = &hearts[0];
        assert!(hearts.iter().skip(1).any(|h| h.delay != first.delay));
        assert!(hearts.iter().skip(1).any(|h| h.duration != first.duration));
    }

    #[test]
    fn style_carries_per_heart_timing() {
        let heart = HeartSpec {
            x: 12.5,
            delay: 3.0,
            duration: 9.25,
            size: 20.0,
            opacity: 0.25,
        };
        let style = heart.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("--heart-opacity: 0.250"));
        assert!(style.contains("animation-duration: 9.25s"));
        assert!(style.contains("animation-delay: 3.00s"));
    }
}
