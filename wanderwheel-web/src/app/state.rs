use crate::dom;
use crate::game::picker::Effects;
use crate::game::{Catalog, CountryOption, Notice, PickEvent, PickerState, PickerTiming};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Unavailable,
}

/// Picker state plus the effects produced by the latest transition.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PickerModel {
    pub picker: PickerState,
    pub pending: Effects,
    /// Bumped on every accepted event so effect hooks re-run even when the
    /// picker state itself did not change.
    pub revision: u64,
}

impl PickerModel {
    #[must_use]
    pub fn new(timing: PickerTiming) -> Self {
        Self {
            picker: PickerState::new(timing),
            pending: Effects::new(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Vec<CountryOption> {
        self.picker.selection.present().cloned().collect()
    }
}

impl Reducible for PickerModel {
    type Action = PickEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.picker.apply(action) {
            Ok(transition) => Rc::new(Self {
                picker: transition.state,
                pending: transition.effects,
                revision: self.revision.wrapping_add(1),
            }),
            Err(err) => {
                log::warn!("ignored picker event: {err}");
                self
            }
        }
    }
}

pub enum NoticeAction {
    Push { id: u64, notice: Notice },
    Dismiss(u64),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NoticeTray {
    pub items: Vec<(u64, Notice)>,
}

impl Reducible for NoticeTray {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            NoticeAction::Push { id, notice } => items.push((id, notice)),
            NoticeAction::Dismiss(id) => {
                if !items.iter().any(|(existing, _)| *existing == id) {
                    return self;
                }
                items.retain(|(existing, _)| *existing != id);
            }
        }
        Rc::new(Self { items })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Rc<Catalog>>,
    pub catalog_status: UseStateHandle<CatalogStatus>,
    pub picker: UseReducerHandle<PickerModel>,
    pub notices: UseReducerHandle<NoticeTray>,
    pub notice_ids: Rc<RefCell<u64>>,
    /// Seed for the confetti layout once a round resolves.
    pub celebration: UseStateHandle<Option<u64>>,
    pub viewport: UseStateHandle<(u32, u32)>,
    pub rng: Rc<RefCell<ChaCha20Rng>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let timing = PickerTiming::from(&crate::game::assets().config);
    AppState {
        catalog: use_state(|| Rc::new(Catalog::empty())),
        catalog_status: use_state(|| CatalogStatus::Loading),
        picker: use_reducer(move || PickerModel::new(timing)),
        notices: use_reducer(NoticeTray::default),
        notice_ids: use_mut_ref(|| 0_u64),
        celebration: use_state(|| None::<u64>),
        viewport: use_state(|| dom::viewport_size().unwrap_or((0, 0))),
        rng: use_mut_ref(|| ChaCha20Rng::seed_from_u64(dom::entropy())),
    }
}

impl AppState {
    #[must_use]
    pub fn catalog_ready(&self) -> bool {
        *self.catalog_status == CatalogStatus::Ready && !self.catalog.is_empty()
    }

    /// Catalog options still available to the selection widget.
    #[must_use]
    pub fn candidates(&self) -> Vec<CountryOption> {
        self.picker
            .picker
            .selection
            .candidates(&self.catalog)
            .into_iter()
            .cloned()
            .collect()
    }
}
