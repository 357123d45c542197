use job_scraper::hh::HeadHunter;
use job_scraper::superjob::SuperJob;
use job_scraper::{collect_stats, LanguageStats, SearchConfig, Transport};

use crate::Site;

/// A configured search for one site, ready to be queried
pub enum Source {
    Hh(HeadHunter),
    Superjob(SuperJob),
}

impl Source {
    /// Fails when the site's credential is missing
    pub fn build(site: Site, config: &SearchConfig) -> job_scraper::Result<Self> {
        match site {
            Site::Hh => Ok(Source::Hh(HeadHunter::new(config))),
            Site::Superjob => Ok(Source::Superjob(SuperJob::from_env(config)?)),
        }
    }
}

/// Collect statistics for every configured language on one site
pub async fn scrape<T: Transport>(
    site: Site,
    source: &Source,
    config: &SearchConfig,
    transport: &T,
) -> job_scraper::Result<Vec<LanguageStats>> {
    log::info!(
        "Collecting {} vacancies for {} languages",
        site.title_prefix(),
        config.languages.len()
    );
    match source {
        Source::Hh(source) => collect_stats(source, transport, &config.languages).await,
        Source::Superjob(source) => collect_stats(source, transport, &config.languages).await,
    }
}
