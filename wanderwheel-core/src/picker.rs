//! Round state machine: slot draw, delayed spin, result commit.
//!
//! A round moves `Idle -> SlotAssigned -> Spinning -> Resolved`. Every
//! transition is a pure function of the current [`PickerState`] and a
//! [`PickEvent`]; timers, notices and celebration are returned as
//! [`Effect`] values for the shell to carry out.
use rand::RngCore;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::CountryOption;
use crate::config::AppConfig;
use crate::notice::Notice;
use crate::selection::SelectionSet;

/// Fewest present selections that allow a pick.
pub const MIN_SELECTION: usize = 2;

/// Source of uniform values in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        rand::Rng::r#gen::<f64>(self)
    }
}

/// Always yields the same value. Used to force a draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedUnit(pub f64);

impl UnitSource for FixedUnit {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickPhase {
    Idle,
    SlotAssigned,
    Spinning,
    Resolved,
}

impl fmt::Display for PickPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::SlotAssigned => "slot-assigned",
            Self::Spinning => "spinning",
            Self::Resolved => "resolved",
        };
        f.write_str(label)
    }
}

/// One pick-to-result cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PickRound {
    /// 1-based winning position among present selections.
    pub winning_slot: Option<usize>,
    pub spinning: bool,
    pub result: Option<CountryOption>,
}

impl PickRound {
    #[must_use]
    pub const fn phase(&self) -> PickPhase {
        if self.result.is_some() {
            PickPhase::Resolved
        } else if self.spinning {
            PickPhase::Spinning
        } else if self.winning_slot.is_some() {
            PickPhase::SlotAssigned
        } else {
            PickPhase::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerTiming {
    pub spin_delay: Duration,
    pub notice_dismiss: Duration,
}

impl Default for PickerTiming {
    fn default() -> Self {
        Self {
            spin_delay: Duration::from_millis(1000),
            notice_dismiss: Duration::from_millis(3000),
        }
    }
}

impl From<&AppConfig> for PickerTiming {
    fn from(config: &AppConfig) -> Self {
        Self {
            spin_delay: config.spin_delay(),
            notice_dismiss: config.notice_dismiss(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickEvent {
    ReplaceSelection(SelectionSet),
    AddCountry(CountryOption),
    RemoveCountry(usize),
    /// Commit a pick; `unit` is the uniform draw in `[0, 1)`.
    CommitPick {
        unit: f64,
    },
    SpinDelayElapsed,
    SpinStopped,
}

impl PickEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReplaceSelection(_) => "replace the selection",
            Self::AddCountry(_) => "add a country",
            Self::RemoveCountry(_) => "remove a country",
            Self::CommitPick { .. } => "commit a pick",
            Self::SpinDelayElapsed => "start spinning",
            Self::SpinStopped => "stop spinning",
        }
    }
}

/// Work for the shell to perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowNotice(Notice),
    /// Deliver [`PickEvent::SpinDelayElapsed`] after the given delay.
    ScheduleSpin { after: Duration },
    Celebrate(CountryOption),
}

pub type Effects = SmallVec<[Effect; 2]>;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PickerState,
    pub effects: Effects,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("cannot {event} while the round is {phase}")]
    InvalidState { phase: PickPhase, event: &'static str },
    #[error("winning slot {slot} does not fit a selection of {len}")]
    SlotOutOfRange { slot: usize, len: usize },
}

/// Result of asking for a pick.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Assigned { slot: usize },
    Warning(Notice),
}

/// Map a uniform draw onto a 1-based slot: `floor(unit * count) + 1`.
///
/// Values outside `[0, 1)` are pulled back into range so the slot always
/// lands in `1..=count`. `count` must be non-zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn draw_slot(count: usize, unit: f64) -> usize {
    let count = count.max(1);
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let index = (unit * count as f64).floor().min((count - 1) as f64) as usize;
    index + 1
}

/// Validate a selection and draw a winning slot for it.
#[must_use]
pub fn commit_pick(selection: &SelectionSet, unit: f64, timing: &PickerTiming) -> CommitOutcome {
    let count = selection.count();
    if count < MIN_SELECTION {
        return CommitOutcome::Warning(Notice::insufficient_selection(timing.notice_dismiss));
    }
    CommitOutcome::Assigned {
        slot: draw_slot(count, unit),
    }
}

/// Resolve a 1-based slot against the present entries of `selection`.
///
/// # Errors
///
/// Returns [`PickerError::SlotOutOfRange`] when the slot is zero or larger
/// than the number of present entries.
pub fn finalize_result(
    slot: usize,
    selection: &SelectionSet,
) -> Result<CountryOption, PickerError> {
    slot.checked_sub(1)
        .and_then(|index| selection.nth_present(index))
        .cloned()
        .ok_or(PickerError::SlotOutOfRange {
            slot,
            len: selection.count(),
        })
}

/// Selection plus the current round, owned by one controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerState {
    pub selection: SelectionSet,
    pub round: PickRound,
    pub timing: PickerTiming,
}

impl PickerState {
    #[must_use]
    pub fn new(timing: PickerTiming) -> Self {
        Self {
            selection: SelectionSet::new(),
            round: PickRound::default(),
            timing,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> PickPhase {
        self.round.phase()
    }

    /// Whether the selection may still change.
    #[must_use]
    pub const fn selection_locked(&self) -> bool {
        !matches!(self.phase(), PickPhase::Idle)
    }

    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidState`] when the event is not accepted in
    /// the current phase, and [`PickerError::SlotOutOfRange`] when the
    /// selection no longer holds the winning slot.
    pub fn apply(&self, event: PickEvent) -> Result<Transition, PickerError> {
        let phase = self.phase();
        let event_name = event.name();
        let reject = || PickerError::InvalidState {
            phase,
            event: event_name,
        };

        let mut next = self.clone();
        let mut effects = Effects::new();

        match event {
            PickEvent::ReplaceSelection(selection) => {
                if phase != PickPhase::Idle {
                    return Err(reject());
                }
                next.selection = selection;
            }
            PickEvent::AddCountry(option) => {
                if phase != PickPhase::Idle {
                    return Err(reject());
                }
                next.selection.push(option);
            }
            PickEvent::RemoveCountry(value) => {
                if phase != PickPhase::Idle {
                    return Err(reject());
                }
                next.selection.remove(value);
            }
            PickEvent::CommitPick { unit } => {
                if phase != PickPhase::Idle {
                    return Err(reject());
                }
                match commit_pick(&self.selection, unit, &self.timing) {
                    CommitOutcome::Assigned { slot } => {
                        log::debug!("assigned winning slot {slot} of {}", self.selection.count());
                        next.round.winning_slot = Some(slot);
                        effects.push(Effect::ScheduleSpin {
                            after: self.timing.spin_delay,
                        });
                    }
                    CommitOutcome::Warning(notice) => {
                        log::debug!("pick refused with {} selected", self.selection.count());
                        effects.push(Effect::ShowNotice(notice));
                    }
                }
            }
            PickEvent::SpinDelayElapsed => {
                if phase != PickPhase::SlotAssigned {
                    return Err(reject());
                }
                next.round.spinning = true;
            }
            PickEvent::SpinStopped => {
                let Some(slot) = self.round.winning_slot.filter(|_| phase == PickPhase::Spinning)
                else {
                    return Err(reject());
                };
                let winner = finalize_result(slot, &self.selection)?;
                log::debug!("round resolved to {}", winner.label);
                effects = smallvec![Effect::Celebrate(winner.clone())];
                next.round.result = Some(winner);
            }
        }

        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// Commit a pick drawing the unit from `source`.
    ///
    /// # Errors
    ///
    /// See [`PickerState::apply`].
    pub fn commit_with<S: UnitSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Transition, PickerError> {
        self.apply(PickEvent::CommitPick {
            unit: source.next_unit(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Coordinates};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn trio() -> SelectionSet {
        let catalog = Catalog::from_entries([
            ("Japan", Coordinates::new(36.0, 138.0).unwrap()),
            ("France", Coordinates::new(46.0, 2.0).unwrap()),
            ("Italy", Coordinates::new(42.83, 12.83).unwrap()),
        ]);
        SelectionSet::from_options(
            ["Japan", "France", "Italy"]
                .iter()
                .filter_map(|label| catalog.find(label).cloned()),
        )
    }

    fn state_with(selection: SelectionSet) -> PickerState {
        PickerState {
            selection,
            ..PickerState::default()
        }
    }

    #[test]
    fn draw_slot_covers_the_boundaries() {
        assert_eq!(draw_slot(3, 0.0), 1);
        assert_eq!(draw_slot(3, 0.5), 2);
        assert_eq!(draw_slot(3, 0.999_999), 3);
        assert_eq!(draw_slot(3, 1.0), 3);
        assert_eq!(draw_slot(3, -0.2), 1);
        assert_eq!(draw_slot(3, f64::NAN), 1);
        assert_eq!(draw_slot(2, 0.5), 2);
        assert_eq!(draw_slot(3, 2.5), 3);
        assert_eq!(draw_slot(3, 1e300), 3);
        assert_eq!(draw_slot(3, f64::INFINITY), 1);
    }

    #[test]
    fn draws_stay_in_range_for_many_sizes() {
        let mut rng = SmallRng::seed_from_u64(42);
        for count in 2..40 {
            for _ in 0..200 {
                let slot = draw_slot(count, rng.next_unit());
                assert!((1..=count).contains(&slot));
            }
        }
    }

    #[test]
    fn finalize_result_indexes_from_one() {
        let selection = trio();
        assert_eq!(finalize_result(1, &selection).unwrap().label, "Japan");
        assert_eq!(finalize_result(3, &selection).unwrap().label, "Italy");
        assert_eq!(
            finalize_result(4, &selection),
            Err(PickerError::SlotOutOfRange { slot: 4, len: 3 })
        );
        assert!(finalize_result(0, &selection).is_err());
    }

    #[test]
    fn finalize_result_skips_empty_widget_slots() {
        let present: Vec<_> = trio().present().cloned().collect();
        let selection = SelectionSet::from_entries([
            None,
            Some(present[0].clone()),
            None,
            Some(present[1].clone()),
        ]);
        assert_eq!(finalize_result(2, &selection).unwrap().label, "France");
    }

    #[test]
    fn commit_schedules_spin_with_configured_delay() {
        let mut state = state_with(trio());
        state.timing.spin_delay = Duration::from_millis(250);
        let transition = state.apply(PickEvent::CommitPick { unit: 0.1 }).unwrap();
        assert_eq!(transition.state.round.winning_slot, Some(1));
        assert_eq!(transition.state.phase(), PickPhase::SlotAssigned);
        assert_eq!(
            transition.effects.as_slice(),
            [Effect::ScheduleSpin {
                after: Duration::from_millis(250)
            }]
        );
    }

    #[test]
    fn second_commit_is_rejected() {
        let state = state_with(trio());
        let assigned = state.apply(PickEvent::CommitPick { unit: 0.1 }).unwrap().state;
        let err = assigned
            .apply(PickEvent::CommitPick { unit: 0.9 })
            .unwrap_err();
        assert_eq!(
            err,
            PickerError::InvalidState {
                phase: PickPhase::SlotAssigned,
                event: "commit a pick"
            }
        );
        assert_eq!(assigned.round.winning_slot, Some(1));
    }

    #[test]
    fn selection_is_frozen_after_commit() {
        let state = state_with(trio());
        let assigned = state.apply(PickEvent::CommitPick { unit: 0.4 }).unwrap().state;
        assert!(assigned.selection_locked());
        assert!(assigned.apply(PickEvent::RemoveCountry(0)).is_err());
        assert!(
            assigned
                .apply(PickEvent::ReplaceSelection(SelectionSet::new()))
                .is_err()
        );
    }

    #[test]
    fn spin_events_must_arrive_in_order() {
        let state = state_with(trio());
        assert!(state.apply(PickEvent::SpinDelayElapsed).is_err());
        assert!(state.apply(PickEvent::SpinStopped).is_err());

        let assigned = state.apply(PickEvent::CommitPick { unit: 0.5 }).unwrap().state;
        assert!(assigned.apply(PickEvent::SpinStopped).is_err());

        let spinning = assigned.apply(PickEvent::SpinDelayElapsed).unwrap().state;
        assert!(spinning.round.spinning);
        assert!(spinning.apply(PickEvent::SpinDelayElapsed).is_err());

        let resolved = spinning.apply(PickEvent::SpinStopped).unwrap();
        assert_eq!(resolved.state.phase(), PickPhase::Resolved);
        assert!(matches!(
            resolved.effects.as_slice(),
            [Effect::Celebrate(option)] if option.label == "France"
        ));
        assert!(resolved.state.apply(PickEvent::SpinStopped).is_err());
        assert!(
            resolved
                .state
                .apply(PickEvent::CommitPick { unit: 0.0 })
                .is_err()
        );
    }

    #[test]
    fn commit_with_reads_the_source() {
        let state = state_with(trio());
        let transition = state.commit_with(&mut FixedUnit(0.7)).unwrap();
        assert_eq!(transition.state.round.winning_slot, Some(3));
    }
}
