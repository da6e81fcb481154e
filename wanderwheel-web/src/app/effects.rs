//! Runs the side effects requested by picker transitions.
#[cfg(target_arch = "wasm32")]
use crate::app::state::{AppState, NoticeAction, NoticeTray, PickerModel};
#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use crate::game::{Effect, Notice, PickEvent};
use std::time::Duration;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Timer length in whole milliseconds, saturating at `u32::MAX`.
#[must_use]
pub fn timer_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(target_arch = "wasm32")]
fn schedule_spin(picker: UseReducerHandle<PickerModel>, after: Duration) {
    wasm_bindgen_futures::spawn_local(async move {
        match dom::sleep_ms(timer_ms(after)).await {
            Ok(()) => picker.dispatch(PickEvent::SpinDelayElapsed),
            Err(err) => log::error!("spin timer failed: {}", dom::js_error_message(&err)),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn show_notice(notices: UseReducerHandle<NoticeTray>, ids: &Rc<RefCell<u64>>, notice: Notice) {
    let id = {
        let mut next = ids.borrow_mut();
        *next = next.wrapping_add(1);
        *next
    };
    let dismiss_after = timer_ms(notice.dismiss_after);
    notices.dispatch(NoticeAction::Push { id, notice });
    wasm_bindgen_futures::spawn_local(async move {
        let _ = dom::sleep_ms(dismiss_after).await;
        notices.dispatch(NoticeAction::Dismiss(id));
    });
}

/// Execute pending effects each time the picker accepts an event.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_round_effects(app_state: &AppState) {
    let picker = app_state.picker.clone();
    let notices = app_state.notices.clone();
    let notice_ids = Rc::clone(&app_state.notice_ids);
    let celebration = app_state.celebration.clone();
    let revision = app_state.picker.revision;

    use_effect_with(revision, move |_| {
        for effect in picker.pending.iter().cloned() {
            match effect {
                Effect::ScheduleSpin { after } => schedule_spin(picker.clone(), after),
                Effect::ShowNotice(notice) => show_notice(notices.clone(), &notice_ids, notice),
                Effect::Celebrate(country) => {
                    let seed = dom::entropy() ^ country.value as u64;
                    celebration.set(Some(seed));
                }
            }
        }
        || {}
    });
}

/// Keep the stored viewport size in step with window resizes.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_viewport_tracking(viewport: &UseStateHandle<(u32, u32)>) {
    let viewport = viewport.clone();
    use_effect_with((), move |()| {
        let mut listener: Option<Closure<dyn FnMut()>> = None;
        if let Some(win) = dom::window() {
            if let Some(size) = dom::viewport_size() {
                viewport.set(size);
            }
            let handle = viewport;
            let closure = Closure::wrap(Box::new(move || {
                if let Some(size) = dom::viewport_size() {
                    handle.set(size);
                }
            }) as Box<dyn FnMut()>);
            if win
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                listener = Some(closure);
            }
        }
        move || {
            if let (Some(win), Some(closure)) = (dom::window(), listener.as_ref()) {
                let _ = win
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            drop(listener);
        }
    });
}
