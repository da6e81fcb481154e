use crate::app::state::{AppState, NoticeAction};
use crate::game::{PickEvent, UnitSource};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub add_country: Callback<usize>,
    pub remove_country: Callback<usize>,
    pub commit_pick: Callback<()>,
    pub stop_spinning: Callback<()>,
    pub dismiss_notice: Callback<u64>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            add_country: build_add_country(state),
            remove_country: build_remove_country(state),
            commit_pick: build_commit_pick(state),
            stop_spinning: build_stop_spinning(state),
            dismiss_notice: build_dismiss_notice(state),
        }
    }
}

fn build_add_country(state: &AppState) -> Callback<usize> {
    let catalog = state.catalog.clone();
    let picker = state.picker.clone();
    Callback::from(move |value: usize| {
        let Some(option) = catalog.get(value).cloned() else {
            log::warn!("no catalog entry with value {value}");
            return;
        };
        picker.dispatch(PickEvent::AddCountry(option));
    })
}

fn build_remove_country(state: &AppState) -> Callback<usize> {
    let picker = state.picker.clone();
    Callback::from(move |value: usize| picker.dispatch(PickEvent::RemoveCountry(value)))
}

fn build_commit_pick(state: &AppState) -> Callback<()> {
    let picker = state.picker.clone();
    let rng = std::rc::Rc::clone(&state.rng);
    Callback::from(move |()| {
        let unit = rng.borrow_mut().next_unit();
        picker.dispatch(PickEvent::CommitPick { unit });
    })
}

fn build_stop_spinning(state: &AppState) -> Callback<()> {
    let picker = state.picker.clone();
    Callback::from(move |()| picker.dispatch(PickEvent::SpinStopped))
}

fn build_dismiss_notice(state: &AppState) -> Callback<u64> {
    let notices = state.notices.clone();
    Callback::from(move |id: u64| notices.dispatch(NoticeAction::Dismiss(id)))
}

#[cfg(test)]
impl AppHandlers {
    pub(crate) fn noop() -> Self {
        Self {
            add_country: Callback::noop(),
            remove_country: Callback::noop(),
            commit_pick: Callback::noop(),
            stop_spinning: Callback::noop(),
            dismiss_notice: Callback::noop(),
        }
    }
}
