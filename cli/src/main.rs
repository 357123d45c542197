mod scrape;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::{HttpTransport, SearchConfig, Transport, MAX_PERIOD_DAYS};
use report::{create_table, Table, TableConfig};
use scrape::Source;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Scrape(#[from] job_scraper::Error),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Hh,
    Superjob,
}

impl Site {
    pub fn title_prefix(&self) -> &'static str {
        match self {
            Site::Hh => "HH",
            Site::Superjob => "SuperJob",
        }
    }

    pub fn title(&self, city: &str) -> String {
        format!("{} {}", self.title_prefix(), city)
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Average salaries of programmers by language",
    long_about = None
)]
struct Cli {
    /// Job sites to query, in the order their tables are printed
    #[clap(long, value_enum)]
    site: Vec<Site>,

    /// Programming languages to search for
    #[clap(long)]
    language: Vec<String>,

    /// Only search vacancies posted during the last N days (HeadHunter)
    #[clap(long, value_parser = clap::value_parser!(i64).range(0..=MAX_PERIOD_DAYS))]
    days: Option<i64>,

    #[clap(long)]
    per_page: Option<u32>,

    /// City label used in table titles
    #[clap(long)]
    city: Option<String>,
}

impl Cli {
    fn sites(&self) -> Vec<Site> {
        if self.site.is_empty() {
            vec![Site::Hh, Site::Superjob]
        } else {
            self.site.clone()
        }
    }

    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default();
        if !self.language.is_empty() {
            config.languages = self.language.clone();
        }
        if let Some(days) = self.days {
            config.period_days = days;
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(city) = &self.city {
            config.city = city.clone();
        }
        config
    }
}

/// Build every source first so a missing credential fails before any request,
/// then fetch all sites before anything is printed
async fn run<T: Transport>(
    sites: &[Site],
    config: &SearchConfig,
    transport: &T,
) -> Result<Vec<Table>, Error> {
    let sources = sites
        .iter()
        .map(|site| Source::build(*site, config).map(|source| (*site, source)))
        .collect::<job_scraper::Result<Vec<_>>>()?;

    let mut tables = Vec::with_capacity(sources.len());
    for (site, source) in &sources {
        let stats = scrape::scrape(*site, source, config, transport).await?;
        tables.push(create_table(&stats, &site.title(&config.city), &TableConfig::default()));
    }
    Ok(tables)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = args.search_config();
    let tables = run(&args.sites(), &config, &HttpTransport::new()).await?;
    for table in tables {
        println!("{}", table);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use job_scraper::PageRequest;
    use serde_json::json;

    use super::*;

    /// Counts requests and answers each with a single empty HeadHunter page
    #[derive(Default)]
    struct CountingTransport {
        requests: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn get_json(&self, _request: &PageRequest) -> job_scraper::Result<serde_json::Value> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "found": 3, "pages": 1, "items": [] }))
        }
    }

    #[test]
    fn test_defaults() {
        let args = Cli::parse_from(["cli"]);
        assert_eq!(args.sites(), vec![Site::Hh, Site::Superjob]);
        let config = args.search_config();
        assert_eq!(config.languages.len(), 9);
        assert_eq!(config.per_page, 100);
        assert_eq!(Site::Superjob.title(&config.city), "SuperJob Moscow");
    }

    #[test]
    fn test_overrides() {
        let args = Cli::parse_from([
            "cli",
            "--site",
            "superjob",
            "--language",
            "Rust",
            "--language",
            "Go",
            "--days",
            "7",
            "--city",
            "Saint Petersburg",
        ]);
        assert_eq!(args.sites(), vec![Site::Superjob]);
        let config = args.search_config();
        assert_eq!(config.languages, vec!["Rust", "Go"]);
        assert_eq!(config.period_days, 7);
        assert_eq!(Site::Hh.title(&config.city), "HH Saint Petersburg");
    }

    #[test]
    fn test_days_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["cli", "--days", "100000000"]).is_err());
        assert!(Cli::try_parse_from(["cli", "--days", "-1"]).is_err());
        assert!(Cli::try_parse_from(["cli", "--days", "36500"]).is_ok());
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_any_request() {
        std::env::remove_var(job_scraper::superjob::TOKEN_ENV_VAR);
        let transport = CountingTransport::default();
        let result = run(&[Site::Hh, Site::Superjob], &SearchConfig::default(), &transport).await;
        assert!(matches!(
            result,
            Err(Error::Scrape(job_scraper::Error::MissingCredential(_)))
        ));
        assert_eq!(transport.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_builds_one_table_per_site() {
        let transport = CountingTransport::default();
        let config = SearchConfig {
            languages: vec!["Rust".to_owned(), "Go".to_owned()],
            ..SearchConfig::default()
        };
        let tables = run(&[Site::Hh], &config, &transport)
            .await
            .expect("Run failed");
        assert_eq!(transport.requests.load(Ordering::SeqCst), 2);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows().len(), 3);
        assert_eq!(tables[0].rows()[1][1], "3");
    }
}
