pub mod types;

use crate::api::{PageRequest, VacancySource};
use crate::salary::{predict_rub_salary_zeroed, SUPERJOB_REFERENCE_CURRENCY};
use crate::{Error, Result, SearchConfig};
use types::{ApiResponse, Vacancy};

pub const TOKEN_ENV_VAR: &str = "SUPERJOB_TOKEN";

/// SuperJob vacancy search, paginated by the `more` flag
pub struct SuperJob {
    base_url: String,
    api_key: String,
    town: u32,
    per_page: u32,
}

impl SuperJob {
    pub fn new(config: &SearchConfig, api_key: String) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/".to_owned(),
            api_key,
            town: config.superjob_town,
            per_page: config.per_page,
        }
    }

    /// Read the app key from `SUPERJOB_TOKEN`
    pub fn from_env(config: &SearchConfig) -> Result<Self> {
        let api_key = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingCredential(TOKEN_ENV_VAR))?;
        Ok(Self::new(config, api_key))
    }
}

impl VacancySource for SuperJob {
    type Page = ApiResponse;
    type Vacancy = Vacancy;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    fn build_request(&self, language: &str, page: u32) -> PageRequest {
        let url = format!(
            "{}?keyword={}&town={}&page={}&count={}",
            self.base_url,
            urlencoding::encode(language),
            self.town,
            page,
            self.per_page,
        );
        PageRequest::new(url).header("X-Api-App-Id", self.api_key.as_str())
    }

    fn has_more_pages(&self, response: &ApiResponse, _page: u32) -> bool {
        response.more
    }

    fn extract_total(&self, response: &ApiResponse) -> u32 {
        response.total
    }

    fn extract_items(&self, response: ApiResponse) -> Vec<Vacancy> {
        response.objects
    }

    fn estimate(&self, vacancy: &Vacancy) -> Option<f64> {
        predict_rub_salary_zeroed(
            &vacancy.currency,
            vacancy.payment_from,
            vacancy.payment_to,
            SUPERJOB_REFERENCE_CURRENCY,
        )
    }
}
