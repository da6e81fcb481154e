//! Falling-paper overlay shown when a round resolves.
use crate::game::confetti::scatter;
use crate::game::config::ConfettiConfig;
use yew::prelude::*;

const KEYFRAMES: &str = "@keyframes confetti-fall{0%{transform:translate3d(0,0,0) rotate(var(--spin))}100%{transform:translate3d(var(--drift),110vh,0) rotate(calc(var(--spin) + 720deg));opacity:0.2}}";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub viewport: (u32, u32),
    pub config: ConfettiConfig,
}

#[function_component(Confetti)]
pub fn confetti(p: &Props) -> Html {
    let particles = scatter(p.seed, p.config.particles, p.viewport, p.config.colors.len());
    let color = |index: usize| p.config.colors.get(index).map_or("#ffd700", String::as_str);

    html! {
        <div class="confetti" aria-hidden="true">
            <style>{ KEYFRAMES }</style>
            { for particles.iter().map(|particle| {
                let style = format!(
                    "left:{:.1}px;top:-{:.1}px;width:{:.1}px;height:{:.1}px;background:{};--spin:{:.0}deg;--drift:{:.1}px;animation:confetti-fall {}ms linear {}ms forwards;",
                    particle.x,
                    particle.lift,
                    particle.width,
                    particle.height,
                    color(particle.color),
                    particle.rotation,
                    particle.drift,
                    particle.fall_ms,
                    particle.delay_ms,
                );
                html! { <span class="confetti__piece" {style}></span> }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AppConfig;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_configured_particle_count() {
        let mut config = AppConfig::default_config().confetti;
        config.particles = 12;
        let props = Props {
            seed: 42,
            viewport: (1024, 768),
            config,
        };
        let html = block_on(LocalServerRenderer::<Confetti>::with_props(props).render());
        assert_eq!(html.matches("confetti__piece").count(), 12);
        assert!(html.contains("confetti-fall"));
    }
}
