//! Country catalog: record validation, ordering and option assignment.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Geographic position of a country's reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting non-finite or out-of-range values.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let finite = latitude.is_finite() && longitude.is_finite();
        let in_range = latitude.abs() <= MAX_LATITUDE && longitude.abs() <= MAX_LONGITUDE;
        (finite && in_range).then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// A selectable country produced by a successful catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryOption {
    pub label: String,
    pub value: usize,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawName {
    #[serde(default)]
    common: Option<String>,
}

/// Shape of one record from the remote country provider.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawCountry {
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
}

/// Why a remote record was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    Unreadable(String),
    MissingName,
    MissingCoordinates,
    MalformedCoordinates,
    CoordinatesOutOfRange,
    DuplicateName(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(detail) => write!(f, "unreadable record ({detail})"),
            Self::MissingName => write!(f, "missing common name"),
            Self::MissingCoordinates => write!(f, "missing latlng"),
            Self::MalformedCoordinates => write!(f, "latlng is not a latitude/longitude pair"),
            Self::CoordinatesOutOfRange => write!(f, "latlng out of range"),
            Self::DuplicateName(name) => write!(f, "duplicate name {name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Position of the record in the raw payload.
    pub index: usize,
    pub reason: RejectReason,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog payload is malformed: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// The loaded set of selectable countries, sorted by display name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Catalog {
    options: Vec<CountryOption>,
    rejected: Vec<RejectedRecord>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a raw provider payload (a JSON array of country records).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the payload is not a JSON array.
    /// Individual bad records do not fail the load; they are listed in
    /// [`Catalog::rejected`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::from_values(values))
    }

    /// Validate each record on its own and build the sorted option list.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut seen = HashSet::new();
        let mut accepted = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();

        for (index, value) in values.into_iter().enumerate() {
            match validate_record(value) {
                Ok((label, coordinates)) => {
                    if seen.insert(label.clone()) {
                        accepted.push((label, coordinates));
                    } else {
                        rejected.push(RejectedRecord {
                            index,
                            reason: RejectReason::DuplicateName(label),
                        });
                    }
                }
                Err(reason) => rejected.push(RejectedRecord { index, reason }),
            }
        }

        for record in &rejected {
            log::warn!("skipping catalog record {}: {}", record.index, record.reason);
        }

        Self {
            options: sort_options(accepted),
            rejected,
        }
    }

    /// Build a catalog from already-validated entries.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Coordinates)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let unique = entries
            .into_iter()
            .map(|(label, coordinates)| (label.into(), coordinates))
            .filter(|(label, _)| seen.insert(label.clone()))
            .collect();
        Self {
            options: sort_options(unique),
            rejected: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    #[must_use]
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn get(&self, value: usize) -> Option<&CountryOption> {
        self.options.get(value)
    }

    #[must_use]
    pub fn find(&self, label: &str) -> Option<&CountryOption> {
        self.options.iter().find(|option| option.label == label)
    }
}

fn validate_record(value: Value) -> Result<(String, Coordinates), RejectReason> {
    let raw: RawCountry =
        serde_json::from_value(value).map_err(|e| RejectReason::Unreadable(e.to_string()))?;

    let label = raw
        .name
        .and_then(|name| name.common)
        .map(|common| common.trim().to_string())
        .filter(|common| !common.is_empty())
        .ok_or(RejectReason::MissingName)?;

    let latlng = raw.latlng.ok_or(RejectReason::MissingCoordinates)?;
    let [latitude, longitude] = latlng[..] else {
        return Err(RejectReason::MalformedCoordinates);
    };
    let coordinates =
        Coordinates::new(latitude, longitude).ok_or(RejectReason::CoordinatesOutOfRange)?;

    Ok((label, coordinates))
}

/// Sort entries by display name and assign each its post-sort position.
#[must_use]
pub fn sort_options(mut entries: Vec<(String, Coordinates)>) -> Vec<CountryOption> {
    entries.sort_by(|(a, _), (b, _)| locale_compare(a, b));
    entries
        .into_iter()
        .enumerate()
        .map(|(value, (label, coordinates))| CountryOption {
            label,
            value,
            coordinates,
        })
        .collect()
}

/// Compare two display names the way a reader expects an atlas index to read:
/// case and Latin accents are ignored first, the raw text breaks ties.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Case-folded, accent-folded form of a display name. Leading punctuation
/// does not count.
#[must_use]
pub fn collation_key(label: &str) -> String {
    let trimmed = label.trim_start_matches(|c: char| !c.is_alphanumeric());
    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars().flat_map(char::to_lowercase) {
        match fold_latin(ch) {
            Some(folded) => key.push_str(folded),
            None => key.push(ch),
        }
    }
    key
}

const fn fold_latin(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'œ' => "oe",
        'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}
