// Endpoint pool and random endpoint selection
// Author: kelexine (https://github.com/kelexine)

use crate::config::DEFAULT_ENDPOINTS;
use crate::error::{Result, TranslateError};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Source of endpoint indices.
///
/// Implementations must be safe to call from many tasks at once.
pub trait RandomSource: Send + Sync + Debug {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Default [`RandomSource`]: a `StdRng` seeded from the clock.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

static SHARED_RANDOM: Lazy<Arc<SeededRandom>> = Lazy::new(|| Arc::new(SeededRandom::from_time()));

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        debug!("Seeding endpoint selector");
        Self::from_seed(seed)
    }

    /// Process-wide instance, seeded on first use.
    pub fn shared() -> Arc<SeededRandom> {
        Arc::clone(&SHARED_RANDOM)
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// Fixed set of interchangeable endpoint URLs.
#[derive(Debug, Clone)]
pub struct EndpointPool {
    endpoints: Arc<[String]>,
}

impl EndpointPool {
    pub fn new<I, S>(endpoints: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoints: Vec<String> = endpoints.into_iter().map(Into::into).collect();

        if endpoints.is_empty() {
            return Err(TranslateError::Config("endpoint pool is empty".to_string()));
        }
        if let Some(blank) = endpoints.iter().position(|e| e.trim().is_empty()) {
            return Err(TranslateError::Config(format!(
                "endpoint #{} is blank",
                blank
            )));
        }

        Ok(Self {
            endpoints: endpoints.into(),
        })
    }

    /// Draws exactly one endpoint.
    pub fn choose(&self, random: &dyn RandomSource) -> &str {
        let index = random.pick(self.endpoints.len()) % self.endpoints.len();
        &self.endpoints[index]
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(String::as_str)
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.iter().any(|e| e == endpoint)
    }
}

impl Default for EndpointPool {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
