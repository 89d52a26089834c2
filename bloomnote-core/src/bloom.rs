//! The fixed pool of daily bloom messages.
//!
//! The pool ships as an embedded JSON asset and never changes at runtime;
//! one entry is picked per page load and held for the whole session.

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One (name, message, emoji) greeting variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Bloom {
    pub name: String,
    pub message: String,
    pub emoji: String,
}

/// The full set of greeting variants.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BloomPool {
    pub blooms: Vec<Bloom>,
}

/// Errors decoding the embedded bloom pool asset.
#[derive(Debug, thiserror::Error)]
pub enum BloomDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bloom pool contains no entries")]
    Empty,
}

static BLOOMS_JSON: &str = include_str!("../assets/blooms.json");

static POOL: Lazy<BloomPool> = Lazy::new(|| {
    BloomPool::from_json(BLOOMS_JSON).expect("embedded bloom pool should be valid")
});

/// The embedded bloom pool, decoded once on first use.
#[must_use]
pub fn bloom_pool() -> &'static BloomPool {
    &POOL
}

impl BloomPool {
    /// Decode a pool from JSON.
    ///
    /// # Errors
    /// Returns an error when the JSON is malformed or the pool is empty.
    pub fn from_json(json: &str) -> Result<Self, BloomDataError> {
        let pool: Self = serde_json::from_str(json)?;
        if pool.blooms.is_empty() {
            return Err(BloomDataError::Empty);
        }
        Ok(pool)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blooms.is_empty()
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &Bloom {
        &self.blooms[rng.gen_range(0..self.blooms.len())]
    }
}
