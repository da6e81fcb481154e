use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use wanderwheel_core::notice::INSUFFICIENT_SELECTION_MESSAGE;
use wanderwheel_core::{
    Catalog, Coordinates, CountryOption, Effect, FixedUnit, MIN_SELECTION, PickEvent, PickPhase,
    PickerError, PickerState, PickerTiming, SelectionSet, UnitSource,
};

/// Standard normal quantile for p = 0.999.
const Z_999: f64 = 3.090_232_306_167_813;

/// Warning commits tried per sub-threshold selection size.
const WARNING_PROBES: usize = 25;

const SAMPLE_COUNTRIES: [(&str, f64, f64); 16] = [
    ("Japan", 36.0, 138.0),
    ("France", 46.0, 2.0),
    ("Italy", 42.83, 12.83),
    ("Spain", 40.0, -4.0),
    ("Portugal", 39.5, -8.0),
    ("Greece", 39.0, 22.0),
    ("Iceland", 65.0, -18.0),
    ("Mexico", 23.0, -102.0),
    ("Peru", -10.0, -76.0),
    ("Thailand", 15.0, 100.0),
    ("New Zealand", -41.0, 174.0),
    ("Norway", 62.0, 10.0),
    ("Chile", -30.0, -71.0),
    ("Kenya", 1.0, 38.0),
    ("Canada", 60.0, -95.0),
    ("Vietnam", 16.17, 107.83),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Uniformity,
    SubThreshold,
    EndToEnd,
}

impl Scenario {
    pub const ALL: [Self; 3] = [Self::Uniformity, Self::SubThreshold, Self::EndToEnd];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Uniformity => "uniformity",
            Self::SubThreshold => "sub-threshold",
            Self::EndToEnd => "end-to-end",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Uniformity => "Winning slots are uniform (chi-square, p = 0.001)",
            Self::SubThreshold => "Picks with fewer than two countries only warn",
            Self::EndToEnd => "Fixed draw resolves Japan/France/Italy to France",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    #[must_use]
    pub fn run(self, plan: &SimulationPlan, seed: u64) -> ScenarioOutcome {
        match self {
            Self::Uniformity => run_uniformity(plan, seed),
            Self::SubThreshold => run_sub_threshold(seed),
            Self::EndToEnd => run_end_to_end(plan, seed),
        }
    }
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    Scenario::ALL
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationPlan {
    pub rounds: usize,
    pub countries: usize,
}

/// Chi-square goodness of fit against a uniform distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquare {
    pub statistic: f64,
    pub critical: f64,
    pub degrees_of_freedom: usize,
    pub counts: Vec<u64>,
}

impl ChiSquare {
    #[must_use]
    pub fn passes(&self) -> bool {
        self.statistic <= self.critical
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioOutcome {
    pub rounds: usize,
    pub failures: Vec<String>,
    pub chi_square: Option<ChiSquare>,
}

/// Wilson–Hilferty approximation of the 0.999 chi-square quantile.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn critical_value_999(degrees_of_freedom: usize) -> f64 {
    let k = degrees_of_freedom.max(1) as f64;
    let term = 2.0 / (9.0 * k);
    k * (1.0 - term + Z_999 * term.sqrt()).powi(3)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chi_square(counts: &[u64]) -> ChiSquare {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len().max(1) as f64;
    let statistic = if expected > 0.0 {
        counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    } else {
        0.0
    };
    let degrees_of_freedom = counts.len().saturating_sub(1);
    ChiSquare {
        statistic,
        critical: critical_value_999(degrees_of_freedom),
        degrees_of_freedom,
        counts: counts.to_vec(),
    }
}

/// Catalog of `countries` entries: real sample names first, then numbered fillers.
#[must_use]
pub fn sample_catalog(countries: usize) -> Catalog {
    let entries = (0..countries).filter_map(|i| match SAMPLE_COUNTRIES.get(i) {
        Some(&(name, lat, lng)) => Coordinates::new(lat, lng).map(|c| (name.to_string(), c)),
        None => Coordinates::new(0.0, 0.0).map(|c| (format!("Country {i:03}"), c)),
    });
    Catalog::from_entries(entries)
}

fn selection_of(options: &[CountryOption]) -> SelectionSet {
    SelectionSet::from_options(options.iter().cloned())
}

fn ready_state(selection: SelectionSet) -> Result<PickerState, PickerError> {
    PickerState::new(PickerTiming::default())
        .apply(PickEvent::ReplaceSelection(selection))
        .map(|t| t.state)
}

/// Drive one round to completion and return the winning slot and country.
fn play_round<S: UnitSource + ?Sized>(
    state: &PickerState,
    source: &mut S,
) -> Result<(usize, CountryOption), String> {
    let assigned = state.commit_with(source).map_err(|e| e.to_string())?;
    let Some(slot) = assigned.state.round.winning_slot else {
        return Err(String::from("commit did not assign a slot"));
    };
    let spinning = assigned
        .state
        .apply(PickEvent::SpinDelayElapsed)
        .map_err(|e| e.to_string())?;
    let resolved = spinning
        .state
        .apply(PickEvent::SpinStopped)
        .map_err(|e| e.to_string())?;
    match resolved.state.round.result {
        Some(winner) => Ok((slot, winner)),
        None => Err(String::from("round did not resolve")),
    }
}

fn run_uniformity(plan: &SimulationPlan, seed: u64) -> ScenarioOutcome {
    let mut outcome = ScenarioOutcome::default();
    if plan.countries < MIN_SELECTION {
        outcome.failures.push(format!(
            "uniformity needs at least {MIN_SELECTION} countries, got {}",
            plan.countries
        ));
        return outcome;
    }
    let catalog = sample_catalog(plan.countries);
    let state = match ready_state(selection_of(catalog.options())) {
        Ok(state) => state,
        Err(err) => {
            outcome.failures.push(err.to_string());
            return outcome;
        }
    };

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut counts = vec![0_u64; state.selection.count()];
    for round in 0..plan.rounds {
        match play_round(&state, &mut rng) {
            Ok((slot, _)) => match slot.checked_sub(1).and_then(|i| counts.get_mut(i)) {
                Some(count) => *count += 1,
                None => outcome
                    .failures
                    .push(format!("round {}: slot {slot} out of range", round + 1)),
            },
            Err(err) => outcome.failures.push(format!("round {}: {err}", round + 1)),
        }
        outcome.rounds += 1;
    }

    let stats = chi_square(&counts);
    log::info!(
        "seed {seed}: chi-square {:.3} (critical {:.3}, {} dof)",
        stats.statistic,
        stats.critical,
        stats.degrees_of_freedom
    );
    if !stats.passes() {
        outcome.failures.push(format!(
            "chi-square {:.3} exceeds critical value {:.3} for counts {:?}",
            stats.statistic, stats.critical, stats.counts
        ));
    }
    outcome.chi_square = Some(stats);
    outcome
}

fn run_sub_threshold(seed: u64) -> ScenarioOutcome {
    let mut outcome = ScenarioOutcome::default();
    let catalog = sample_catalog(MIN_SELECTION);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    for size in 0..MIN_SELECTION {
        let state = match ready_state(selection_of(&catalog.options()[..size])) {
            Ok(state) => state,
            Err(err) => {
                outcome.failures.push(err.to_string());
                continue;
            }
        };
        for probe in 0..WARNING_PROBES {
            outcome.rounds += 1;
            let label = format!("{size} selected, probe {}", probe + 1);
            match state.commit_with(&mut rng) {
                Ok(transition) => {
                    if transition.state != state {
                        outcome.failures.push(format!("{label}: state changed"));
                    }
                    let warnings = transition
                        .effects
                        .iter()
                        .filter(|e| {
                            matches!(e, Effect::ShowNotice(n) if n.message == INSUFFICIENT_SELECTION_MESSAGE)
                        })
                        .count();
                    if warnings != 1 || transition.effects.len() != 1 {
                        outcome.failures.push(format!(
                            "{label}: expected one warning, got {:?}",
                            transition.effects
                        ));
                    }
                }
                Err(err) => outcome.failures.push(format!("{label}: {err}")),
            }
        }
    }
    outcome
}

fn run_end_to_end(plan: &SimulationPlan, seed: u64) -> ScenarioOutcome {
    let mut outcome = ScenarioOutcome::default();
    let catalog = sample_catalog(SAMPLE_COUNTRIES.len());
    let trio: Vec<CountryOption> = ["Japan", "France", "Italy"]
        .iter()
        .filter_map(|label| catalog.find(label).cloned())
        .collect();

    match ready_state(selection_of(&trio)) {
        Ok(state) => {
            outcome.rounds += 1;
            match play_round(&state, &mut FixedUnit(0.5)) {
                Ok((slot, winner)) if slot == 2 && winner.label == "France" => {}
                Ok((slot, winner)) => outcome
                    .failures
                    .push(format!("expected France in slot 2, got {} in slot {slot}", winner.label)),
                Err(err) => outcome.failures.push(err),
            }
            check_rejections(&state, &mut outcome.failures);
        }
        Err(err) => outcome.failures.push(err.to_string()),
    }

    // Random rounds over the configured catalog must land on a present entry.
    let options = sample_catalog(plan.countries.max(MIN_SELECTION));
    let Ok(state) = ready_state(selection_of(options.options())) else {
        outcome.failures.push(String::from("could not build random selection"));
        return outcome;
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for round in 0..plan.rounds.min(500) {
        outcome.rounds += 1;
        match play_round(&state, &mut rng) {
            Ok((slot, winner)) => {
                if slot.checked_sub(1).and_then(|i| state.selection.nth_present(i)) != Some(&winner) {
                    outcome.failures.push(format!(
                        "round {}: slot {slot} does not hold {}",
                        round + 1,
                        winner.label
                    ));
                }
            }
            Err(err) => outcome.failures.push(format!("round {}: {err}", round + 1)),
        }
    }
    outcome
}

/// Out-of-order events must be refused in every phase they do not belong to.
fn check_rejections(idle: &PickerState, failures: &mut Vec<String>) {
    let assigned = match idle.apply(PickEvent::CommitPick { unit: 0.0 }) {
        Ok(t) => t.state,
        Err(err) => {
            failures.push(err.to_string());
            return;
        }
    };
    if assigned.phase() != PickPhase::SlotAssigned {
        failures.push(format!("expected slot assigned, found {}", assigned.phase()));
    }
    for event in [
        PickEvent::CommitPick { unit: 0.1 },
        PickEvent::SpinStopped,
        PickEvent::RemoveCountry(0),
    ] {
        let name = event.name();
        if !matches!(
            assigned.apply(event),
            Err(PickerError::InvalidState { .. })
        ) {
            failures.push(format!("{name} was accepted while a slot was assigned"));
        }
    }
    if !matches!(idle.apply(PickEvent::SpinDelayElapsed), Err(PickerError::InvalidState { .. })) {
        failures.push(String::from("spin started without an assigned slot"));
    }
}
