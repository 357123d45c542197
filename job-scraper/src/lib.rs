pub mod api;
pub mod hh;
pub mod salary;
pub mod scraper;
pub mod stats;
pub mod superjob;
#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

pub use api::{HttpTransport, PageRequest, SearchPage, Transport, VacancySource};
pub use scraper::{collect_language_stats, collect_stats, search_pages};
pub use stats::{LanguageStats, SalaryAccumulator};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch data from: '{0}', status code: {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("Unexpected response body: '{0}'")]
    Decode(#[from] serde_json::Error),
    #[error("Credential not set: '{0}'")]
    MissingCredential(&'static str),
}

pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Swift",
    "Go",
];

/// Longest posting window accepted, in days
pub const MAX_PERIOD_DAYS: i64 = 36_500;

/// Search parameters shared by all sources
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub languages: Vec<String>,
    pub per_page: u32,
    /// HeadHunter area code
    pub hh_area: String,
    /// SuperJob town id
    pub superjob_town: u32,
    /// only vacancies posted within this many days are searched on HeadHunter
    pub period_days: i64,
    /// label used in report titles, must match the location codes
    pub city: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.into_iter().map(String::from).collect(),
            per_page: 100,
            hh_area: "1".to_owned(),
            superjob_town: 4,
            period_days: 30,
            city: "Moscow".to_owned(),
        }
    }
}
