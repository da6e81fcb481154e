use crate::game::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<(u64, Notice)>,
    pub on_dismiss: Callback<u64>,
}

/// Bottom-right stack of transient notices, newest on top. Clicking one dismisses it early.
#[function_component(NoticeTray)]
pub fn notice_tray(p: &Props) -> Html {
    html! {
        <div class="notice-tray" role="status" aria-live="polite">
            { for p.items.iter().map(|(id, notice)| {
                let id = *id;
                let onclick = {
                    let on_dismiss = p.on_dismiss.clone();
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={id} class={classes!("notice", notice.level.css_class())} {onclick}>
                        <strong class="notice__title">{ notice.title.clone() }</strong>
                        <p class="notice__message">{ notice.message.clone() }</p>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::notice::INSUFFICIENT_SELECTION_MESSAGE;
    use futures::executor::block_on;
    use std::time::Duration;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_each_notice() {
        let props = Props {
            items: vec![(1, Notice::insufficient_selection(Duration::from_secs(3)))],
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NoticeTray>::with_props(props).render());
        assert!(html.contains(INSUFFICIENT_SELECTION_MESSAGE));
        assert!(html.contains("notice--warning"));
    }
}
