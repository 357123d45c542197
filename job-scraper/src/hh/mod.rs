pub mod types;

use chrono::{Duration, NaiveDate, Utc};

use crate::api::{PageRequest, VacancySource};
use crate::salary::{predict_rub_salary_nullable, HH_REFERENCE_CURRENCY};
use crate::{SearchConfig, MAX_PERIOD_DAYS};
use types::{ApiResponse, Vacancy};

const USER_AGENT: &str = "job-scraper/0.1 (salary statistics)";

/// HeadHunter vacancy search, paginated by a declared page count
pub struct HeadHunter {
    base_url: String,
    area: String,
    per_page: u32,
    date_from: NaiveDate,
}

impl HeadHunter {
    /// Search vacancies posted within the configured window, counted back from today
    pub fn new(config: &SearchConfig) -> Self {
        let days = config.period_days.clamp(0, MAX_PERIOD_DAYS);
        let date_from = Utc::now().date_naive() - Duration::days(days);
        Self::with_date_from(config, date_from)
    }

    pub fn with_date_from(config: &SearchConfig, date_from: NaiveDate) -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_owned(),
            area: config.hh_area.clone(),
            per_page: config.per_page,
            date_from,
        }
    }
}

impl VacancySource for HeadHunter {
    type Page = ApiResponse;
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "HH"
    }

    fn build_request(&self, language: &str, page: u32) -> PageRequest {
        let url = format!(
            "{}?text={}&area={}&per_page={}&page={}&date_from={}",
            self.base_url,
            urlencoding::encode(language),
            urlencoding::encode(&self.area),
            self.per_page,
            page,
            self.date_from.format("%Y-%m-%d"),
        );
        PageRequest::new(url).header("HH-User-Agent", USER_AGENT)
    }

    fn has_more_pages(&self, response: &ApiResponse, page: u32) -> bool {
        page + 1 < response.pages
    }

    fn extract_total(&self, response: &ApiResponse) -> u32 {
        response.found
    }

    fn extract_items(&self, response: ApiResponse) -> Vec<Vacancy> {
        response.items
    }

    fn estimate(&self, vacancy: &Vacancy) -> Option<f64> {
        let salary = vacancy.salary.as_ref()?;
        predict_rub_salary_nullable(
            salary.currency.as_deref(),
            salary.from,
            salary.to,
            HH_REFERENCE_CURRENCY,
        )
    }
}
