//! Static per-country travel plans.
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

pub const NOT_AVAILABLE_MESSAGE: &str = "No itinerary available for the selected country.";

/// One day of a plan. Field names match the bundled dataset exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// JSON object whose entries keep document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Ordered<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Outcome of an itinerary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryLookup<'a> {
    /// Day label and plan, in dataset order. Never empty.
    Found(&'a [(String, ItineraryDay)]),
    NotFound,
}

impl ItineraryLookup<'_> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// The bundled itinerary dataset: country name -> day label -> day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItineraryBook {
    countries: HashMap<String, Vec<(String, ItineraryDay)>>,
}

impl ItineraryBook {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the dataset, keeping each country's days in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a day lacks `Activity` or
    /// `Description`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let Ordered(countries) = serde_json::from_str::<Ordered<Ordered<ItineraryDay>>>(json)?;
        Ok(Self {
            countries: countries
                .into_iter()
                .map(|(country, Ordered(days))| (country, days))
                .collect(),
        })
    }

    /// Look up a country by its exact display name.
    #[must_use]
    pub fn lookup(&self, country: &str) -> ItineraryLookup<'_> {
        match self.countries.get(country) {
            Some(days) if !days.is_empty() => ItineraryLookup::Found(days),
            _ => ItineraryLookup::NotFound,
        }
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.lookup(country).is_found()
    }

    /// Countries with at least one planned day, sorted.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .countries
            .iter()
            .filter(|(_, days)| !days.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
