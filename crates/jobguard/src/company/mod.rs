//! Company reputation lookup used as secondary evidence next to the risk score.
//!
//! Unknown companies receive small synthetic metrics so that the UI shows a low-presence
//! profile. Results with `found == false` are placeholders and never feed the risk score.

mod directory;
mod normalizer;

pub use directory::{CompanyDirectory, CompanyRecord, DirectoryError};
pub use normalizer::normalize_company_identifier;

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::debug;

pub const PLACEHOLDER_FOLLOWERS: RangeInclusive<u64> = 5..=54;
pub const PLACEHOLDER_EMPLOYEES: RangeInclusive<u64> = 1..=5;
pub const PLACEHOLDER_ENGAGEMENT: RangeInclusive<u64> = 0..=2;

/// Random source for placeholder metrics, injectable so tests can pin values.
pub trait PlaceholderSource: Send + Sync {
    fn pick(&self, range: RangeInclusive<u64>) -> u64;
}

/// Thread-local `fastrand` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastRandSource;

impl PlaceholderSource for FastRandSource {
    fn pick(&self, range: RangeInclusive<u64>) -> u64 {
        fastrand::u64(range)
    }
}

/// Reproducible generator for demos and tests.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<fastrand::Rng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl PlaceholderSource for SeededSource {
    fn pick(&self, range: RangeInclusive<u64>) -> u64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.u64(range)
    }
}

/// Metrics returned for a company identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub followers: u64,
    pub employees: u64,
    pub engagement: u64,
    pub found: bool,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Company name or URL is required")]
    MissingIdentifier,
}

/// Resolves company identifiers against a directory, fabricating placeholders on a miss.
pub struct CompanyLookup<S = FastRandSource> {
    directory: Arc<CompanyDirectory>,
    source: S,
}

impl CompanyLookup<FastRandSource> {
    pub fn new(directory: Arc<CompanyDirectory>) -> Self {
        Self::with_source(directory, FastRandSource)
    }
}

impl<S: PlaceholderSource> CompanyLookup<S> {
    pub fn with_source(directory: Arc<CompanyDirectory>, source: S) -> Self {
        Self { directory, source }
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    pub fn lookup(&self, input: &str) -> Result<CompanyStats, LookupError> {
        if input.trim().is_empty() {
            return Err(LookupError::MissingIdentifier);
        }

        let company_name = normalize_company_identifier(input);

        if let Some(record) = self.directory.find(&company_name) {
            return Ok(CompanyStats {
                followers: record.followers,
                employees: record.employees,
                engagement: record.engagement,
                found: true,
                company_name: record.company.clone(),
            });
        }

        debug!(company = %company_name, "company not in directory, using placeholder stats");

        Ok(CompanyStats {
            followers: self.source.pick(PLACEHOLDER_FOLLOWERS),
            employees: self.source.pick(PLACEHOLDER_EMPLOYEES),
            engagement: self.source.pick(PLACEHOLDER_ENGAGEMENT),
            found: false,
            company_name,
        })
    }
}
