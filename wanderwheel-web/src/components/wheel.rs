//! SVG prize wheel that spins to the winning slot.
use crate::game::config::WheelConfig;
use crate::game::wheel::{landing_rotation, segments};
use yew::prelude::*;

const RADIUS: f64 = 150.0;
const LABEL_RADIUS: f64 = RADIUS * 0.62;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub labels: Vec<String>,
    /// 1-based winning slot.
    pub slot: usize,
    pub spinning: bool,
    pub config: WheelConfig,
    /// Fired once the spin transition finishes.
    pub on_stop: Callback<()>,
}

fn wheel_style(p: &Props) -> String {
    if !p.spinning {
        return String::from("transform: rotate(0deg);");
    }
    let rotation = landing_rotation(p.slot, p.labels.len(), p.config.spin_turns);
    format!(
        "transform: rotate({rotation:.3}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        p.config.spin_duration_ms
    )
}

#[function_component(Wheel)]
pub fn wheel(p: &Props) -> Html {
    let labels: Vec<&str> = p.labels.iter().map(String::as_str).collect();
    let wedges = segments(&labels, RADIUS, p.config.palette.len());
    let fill = |index: usize| {
        p.config
            .palette
            .get(index)
            .cloned()
            .unwrap_or_else(|| String::from("#cccccc"))
    };

    let ontransitionend = {
        let on_stop = p.on_stop.clone();
        let spinning = p.spinning;
        Callback::from(move |_: TransitionEvent| {
            if spinning {
                on_stop.emit(());
            }
        })
    };

    let view_box = format!("{0} {0} {1} {1}", -RADIUS - 4.0, 2.0 * RADIUS + 8.0);
    html! {
        <div class="wheel">
            <div class="wheel__pointer" aria-hidden="true"></div>
            <div class="wheel__disc" style={wheel_style(p)} {ontransitionend}>
                <svg viewBox={view_box} role="img" aria-label="Country wheel">
                    { for wedges.iter().map(|wedge| {
                        let (sin, cos) = wedge.mid_deg.to_radians().sin_cos();
                        let x = LABEL_RADIUS * sin;
                        let y = -LABEL_RADIUS * cos;
                        let transform = format!("rotate({:.3} {x:.3} {y:.3})", wedge.mid_deg - 90.0);
                        html! {
                            <g class="wheel__segment">
                                <path
                                    d={wedge.path.clone()}
                                    fill={fill(wedge.color)}
                                    stroke={p.config.border_color.clone()}
                                    stroke-width="2"
                                />
                                <text
                                    x={format!("{x:.3}")}
                                    y={format!("{y:.3}")}
                                    fill={p.config.text_color.clone()}
                                    text-anchor="middle"
                                    dominant-baseline="middle"
                                    {transform}
                                >
                                    { wedge.label.clone() }
                                </text>
                            </g>
                        }
                    }) }
                </svg>
            </div>
        </div>
    }
}
