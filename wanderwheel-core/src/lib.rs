//! Wanderwheel core
//!
//! Platform-agnostic logic for the Wanderwheel country picker: catalog
//! transform, selection handling, the pick round state machine, itinerary
//! lookup and the geometry used to draw the wheel and map.
//! This crate has no UI or browser dependencies.

pub mod catalog;
pub mod confetti;
pub mod config;
pub mod itinerary;
pub mod map;
pub mod notice;
pub mod picker;
pub mod selection;
pub mod wheel;

pub use catalog::{
    Catalog, CatalogError, Coordinates, CountryOption, RejectReason, RejectedRecord,
    locale_compare,
};
pub use config::{AppConfig, ConfettiConfig, ConfigError, MapConfig, WheelConfig};
pub use itinerary::{ItineraryBook, ItineraryDay, ItineraryLookup, NOT_AVAILABLE_MESSAGE};
pub use map::{PlacedTile, TileCoord, TileGrid, tile_grid};
pub use notice::{Notice, NoticeLevel};
pub use picker::{
    CommitOutcome, Effect, FixedUnit, MIN_SELECTION, PickEvent, PickPhase, PickRound,
    PickerError, PickerState, PickerTiming, Transition, UnitSource, commit_pick, draw_slot,
    finalize_result,
};
pub use selection::SelectionSet;

/// Trait for abstracting access to bundled data.
/// Platform-specific implementations should provide this.
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the itinerary dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or parsed.
    fn load_itineraries(&self) -> Result<ItineraryBook, Self::Error>;

    /// Load application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_config(&self) -> Result<AppConfig, Self::Error>;
}

/// Bundled data resolved once at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assets {
    pub config: AppConfig,
    pub itineraries: ItineraryBook,
}

impl Assets {
    /// Load everything through `loader`, falling back to defaults on failure.
    pub fn load<L: DataLoader>(loader: &L) -> Self {
        let config = loader
            .load_config()
            .map_err(|e| log::error!("falling back to default config: {e}"))
            .and_then(|config| {
                config
                    .validate()
                    .map(|()| config)
                    .map_err(|e| log::error!("rejecting config: {e}"))
            })
            .unwrap_or_else(|()| AppConfig::default_config());
        let itineraries = loader.load_itineraries().unwrap_or_else(|e| {
            log::error!("itineraries unavailable: {e}");
            ItineraryBook::empty()
        });
        Self {
            config,
            itineraries,
        }
    }
}
