mod handlers;
mod styles;

pub use handlers::AppHandlers;

use crate::app::state::{AppState, CatalogStatus};
use crate::components::button::Button;
use crate::components::confetti::Confetti;
use crate::components::country_select::CountrySelect;
use crate::components::itinerary::Itinerary;
use crate::components::notice_tray::NoticeTray;
use crate::components::result_card::ResultCard;
use crate::components::wheel::Wheel;
use crate::game::{Assets, CountryOption, Notice, PickerState};
use yew::prelude::*;

/// Everything the page needs to draw one frame.
pub struct PageView<'a> {
    pub status: CatalogStatus,
    pub candidates: Vec<CountryOption>,
    pub picker: &'a PickerState,
    pub notices: &'a [(u64, Notice)],
    pub celebration: Option<u64>,
    pub viewport: (u32, u32),
    pub assets: &'static Assets,
}

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let view = PageView {
        status: *state.catalog_status,
        candidates: state.candidates(),
        picker: &state.picker.picker,
        notices: &state.notices.items,
        celebration: *state.celebration,
        viewport: *state.viewport,
        assets: crate::game::assets(),
    };
    render_page(&view, &handlers)
}

pub fn render_page(view: &PageView<'_>, handlers: &AppHandlers) -> Html {
    let config = &view.assets.config;
    let round = &view.picker.round;
    let selected: Vec<CountryOption> = view.picker.selection.present().cloned().collect();
    let labels: Vec<String> = selected.iter().map(|c| c.label.clone()).collect();
    let on_pick = handlers.commit_pick.reform(|_: MouseEvent| ());

    html! {
        <main id="main" class="app" role="main">
            <style>{ styles::app_css() }</style>
            <NoticeTray items={view.notices.to_vec()} on_dismiss={handlers.dismiss_notice.clone()} />
            if let (Some(seed), Some(_)) = (view.celebration, round.result.as_ref()) {
                <Confetti {seed} viewport={view.viewport} config={config.confetti.clone()} />
            }
            <h1>{"Random Country Picker"}</h1>
            <div class="options-container">
                <CountrySelect
                    options={view.candidates.clone()}
                    {selected}
                    status={view.status}
                    locked={view.picker.selection_locked()}
                    on_add={handlers.add_country.clone()}
                    on_remove={handlers.remove_country.clone()}
                />
            </div>
            if let Some(slot) = round.winning_slot {
                <div class="stage">
                    <div class="card wheel-card">
                        <Wheel
                            {labels}
                            {slot}
                            spinning={round.spinning}
                            config={config.wheel.clone()}
                            on_stop={handlers.stop_spinning.clone()}
                        />
                    </div>
                    if let Some(country) = round.result.clone() {
                        <ResultCard {country} map={config.map.clone()} />
                    }
                </div>
            } else {
                <Button label="Pick Our Trip!" class={classes!("btn-primary")} onclick={on_pick} />
            }
            if let Some(country) = round.result.as_ref() {
                <Itinerary country={AttrValue::from(country.label.clone())} book={&view.assets.itineraries} />
            }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        AppConfig, Catalog, Coordinates, ItineraryBook, PickEvent, PickerTiming, SelectionSet,
    };
    use futures::executor::block_on;
    use once_cell::sync::Lazy;
    use std::time::Duration;
    use yew::LocalServerRenderer;

    static FIXTURE: Lazy<Assets> = Lazy::new(|| Assets {
        config: AppConfig::default_config(),
        itineraries: ItineraryBook::from_json(
            r#"{ "France": { "Day 1": { "Activity": "Paris", "Description": "Louvre." } } }"#,
        )
        .unwrap(),
    });

    #[derive(Properties, PartialEq, Clone)]
    struct HarnessProps {
        picker: PickerState,
        status: CatalogStatus,
        notices: Vec<(u64, Notice)>,
        celebration: Option<u64>,
    }

    #[function_component(Harness)]
    fn harness(p: &HarnessProps) -> Html {
        let view = PageView {
            status: p.status,
            candidates: Vec::new(),
            picker: &p.picker,
            notices: &p.notices,
            celebration: p.celebration,
            viewport: (800, 600),
            assets: &FIXTURE,
        };
        render_page(&view, &AppHandlers::noop())
    }

    fn picker_with(events: Vec<PickEvent>) -> PickerState {
        let catalog = Catalog::from_entries([
            ("Japan", Coordinates::new(36.0, 138.0).unwrap()),
            ("France", Coordinates::new(46.0, 2.0).unwrap()),
            ("Italy", Coordinates::new(42.8, 12.8).unwrap()),
        ]);
        let selection = SelectionSet::from_options(
            ["Japan", "France", "Italy"]
                .iter()
                .filter_map(|label| catalog.find(label).cloned()),
        );
        let mut state = PickerState::new(PickerTiming::default());
        for event in std::iter::once(PickEvent::ReplaceSelection(selection)).chain(events) {
            state = state.apply(event).unwrap().state;
        }
        state
    }

    fn render(props: HarnessProps) -> String {
        block_on(LocalServerRenderer::<Harness>::with_props(props).render())
    }

    #[test]
    fn idle_page_offers_pick_button_without_wheel() {
        let html = render(HarnessProps {
            picker: picker_with(Vec::new()),
            status: CatalogStatus::Ready,
            notices: Vec::new(),
            celebration: None,
        });
        assert!(html.contains("Random Country Picker"));
        assert!(html.contains("Pick Our Trip!"));
        assert!(!html.contains("wheel__disc"));
        assert!(!html.contains("Travel Itinerary"));
    }

    #[test]
    fn assigned_slot_swaps_button_for_wheel() {
        let html = render(HarnessProps {
            picker: picker_with(vec![PickEvent::CommitPick { unit: 0.5 }]),
            status: CatalogStatus::Ready,
            notices: Vec::new(),
            celebration: None,
        });
        assert!(html.contains("wheel__disc"));
        assert!(!html.contains("Pick Our Trip!"));
        assert!(!html.contains("result-card"));
    }

    #[test]
    fn resolved_round_shows_result_itinerary_and_confetti() {
        let html = render(HarnessProps {
            picker: picker_with(vec![
                PickEvent::CommitPick { unit: 0.5 },
                PickEvent::SpinDelayElapsed,
                PickEvent::SpinStopped,
            ]),
            status: CatalogStatus::Ready,
            notices: Vec::new(),
            celebration: Some(3),
        });
        assert!(html.contains("result-card__country"));
        assert!(html.contains("Travel Itinerary"));
        assert!(html.contains("Louvre."));
        assert!(html.contains("class=\"confetti__piece\""));
    }

    #[test]
    fn notices_render_in_tray() {
        let html = render(HarnessProps {
            picker: picker_with(Vec::new()),
            status: CatalogStatus::Loading,
            notices: vec![(1, Notice::insufficient_selection(Duration::from_secs(3)))],
            celebration: None,
        });
        assert!(html.contains("class=\"notice notice--warning\""));
        assert!(html.contains("Loading countries..."));
    }
}
