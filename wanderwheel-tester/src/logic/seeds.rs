use thiserror::Error;
use twox_hash::XxHash64;

/// Hash key for turning a word into a seed.
const WORD_SEED_KEY: u64 = 0x5741_4E44_4552;

/// A resolved seed and the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
    /// Original word for hashed seeds.
    pub word: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed, word: None }
    }

    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self {
            seed: XxHash64::oneshot(WORD_SEED_KEY, word.to_lowercase().as_bytes()),
            word: Some(word.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        match &self.word {
            Some(word) => format!("{word} ({})", self.seed),
            None => self.seed.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("no seeds given")]
    Empty,
    #[error("seed token {0:?} is neither a number nor a word")]
    Invalid(String),
}

/// Resolve CLI seed tokens. Integers are used as-is (negative values by
/// magnitude); alphabetic words are hashed. Duplicates are dropped.
///
/// # Errors
///
/// Returns an error if no usable token is given or a token is neither an
/// integer nor a word.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>, SeedError> {
    let mut resolved: Vec<SeedInfo> = Vec::new();
    for token in tokens.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        let info = if let Ok(value) = token.parse::<u64>() {
            SeedInfo::from_numeric(value)
        } else if let Ok(value) = token.parse::<i64>() {
            SeedInfo::from_numeric(value.unsigned_abs())
        } else if token.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            SeedInfo::from_word(token)
        } else {
            return Err(SeedError::Invalid(token.to_string()));
        };
        if !resolved.iter().any(|existing| existing.seed == info.seed) {
            resolved.push(info);
        }
    }
    if resolved.is_empty() {
        return Err(SeedError::Empty);
    }
    Ok(resolved)
}
