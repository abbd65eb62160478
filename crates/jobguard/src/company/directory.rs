use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::normalizer::lookup_key;

/// Social and organizational metrics recorded for a known company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company: String,
    pub followers: u64,
    pub employees: u64,
    pub engagement: u64,
}

const BUILTIN_COMPANIES: [(&str, u64, u64, u64); 30] = [
    ("Infosys", 5_000_000, 340_000, 12_000),
    ("TCS", 4_000_000, 300_000, 10_000),
    ("Microsoft", 15_000_000, 220_000, 45_000),
    ("Google", 25_000_000, 180_000, 80_000),
    ("Apple", 30_000_000, 164_000, 95_000),
    ("Amazon", 20_000_000, 1_500_000, 60_000),
    ("Meta", 22_000_000, 86_000, 70_000),
    ("Netflix", 18_000_000, 15_000, 35_000),
    ("Tesla", 12_000_000, 140_000, 40_000),
    ("Spotify", 8_000_000, 9_000, 15_000),
    ("Uber", 5_000_000, 32_000, 8_000),
    ("Airbnb", 4_500_000, 6_800, 7_500),
    ("Dropbox", 2_000_000, 3_000, 3_500),
    ("Slack", 1_500_000, 2_500, 2_800),
    ("Zoom", 3_000_000, 8_000, 5_500),
    ("Adobe", 4_000_000, 28_000, 6_500),
    ("Salesforce", 6_000_000, 79_000, 9_500),
    ("Oracle", 3_500_000, 143_000, 5_000),
    ("IBM", 2_500_000, 350_000, 4_000),
    ("Intel", 2_800_000, 121_000, 4_200),
    ("RandomStartup", 80, 5, 2),
    ("TechStartup2023", 150, 12, 8),
    ("NewCompany", 45, 3, 1),
    ("SmallBiz", 200, 8, 15),
    ("LocalTech", 90, 6, 3),
    ("FakeLtd", 10, 1, 0),
    ("ScamCorp", 25, 2, 1),
    ("PhantomTech", 5, 1, 0),
    ("QuickMoney", 15, 1, 0),
    ("FakeJobs", 8, 1, 0),
];

/// Case-insensitive table of known companies.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    records: Vec<CompanyRecord>,
    index: HashMap<String, usize>,
}

impl CompanyDirectory {
    /// The reference table shipped with the service.
    pub fn builtin() -> Self {
        let mut directory = Self::default();
        for (company, followers, employees, engagement) in BUILTIN_COMPANIES {
            directory.index.insert(lookup_key(company), directory.records.len());
            directory.records.push(CompanyRecord {
                company: company.to_string(),
                followers,
                employees,
                engagement,
            });
        }
        directory
    }

    /// Reads a `company,followers,employees,engagement` CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut directory = Self::default();

        for record in csv_reader.deserialize::<CompanyRecord>() {
            directory.insert(record?)?;
        }

        Ok(directory)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn find(&self, name: &str) -> Option<&CompanyRecord> {
        self.index
            .get(&lookup_key(name))
            .and_then(|position| self.records.get(*position))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, record: CompanyRecord) -> Result<(), DirectoryError> {
        let key = lookup_key(&record.company);
        if key.is_empty() {
            return Err(DirectoryError::BlankCompany);
        }
        if self.index.contains_key(&key) {
            return Err(DirectoryError::DuplicateCompany(record.company));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }
}

/// Failure while loading a company table.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read company table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed company table: {0}")]
    Csv(#[from] csv::Error),
    #[error("company `{0}` appears more than once")]
    DuplicateCompany(String),
    #[error("company table contains a row without a name")]
    BlankCompany,
}
