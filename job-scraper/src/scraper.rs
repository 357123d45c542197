use async_stream::try_stream;
use futures::{Stream, StreamExt};

use crate::api::{SearchPage, Transport, VacancySource};
use crate::stats::{LanguageStats, SalaryAccumulator};
use crate::{Error, Result};

/// Lazily walk every result page of a search for `language`.
/// Pages are requested one after another; the stream ends after the last page
/// or right after yielding the first error.
pub fn search_pages<'a, S, T>(
    source: &'a S,
    transport: &'a T,
    language: &'a str,
) -> impl Stream<Item = Result<SearchPage<S::Vacancy>>> + 'a
where
    S: VacancySource,
    T: Transport,
{
    try_stream! {
        let mut page = 0;
        loop {
            let request = source.build_request(language, page);
            log::debug!(
                "requesting vacancies from {}, page: {}, language: {}",
                source.name(),
                page,
                language
            );
            let body = transport.get_json(&request).await?;
            let response: S::Page = serde_json::from_value(body).map_err(Error::from)?;
            let more = source.has_more_pages(&response, page);
            let total = source.extract_total(&response);
            let items = source.extract_items(response);
            yield SearchPage { total, items };
            if !more {
                break;
            }
            page += 1;
        }
    }
}

pub async fn collect_language_stats<S, T>(
    source: &S,
    transport: &T,
    language: &str,
) -> Result<LanguageStats>
where
    S: VacancySource,
    T: Transport,
{
    let pages = search_pages(source, transport, language);
    tokio::pin!(pages);
    let mut salaries = SalaryAccumulator::default();
    let mut vacancies_found = 0;
    while let Some(page) = pages.next().await {
        let page = page?;
        vacancies_found = page.total;
        salaries.extend(page.items.iter().map(|vacancy| source.estimate(vacancy)));
    }
    log::info!(
        "{}: {} vacancies found for {}, {} with salary",
        source.name(),
        vacancies_found,
        language,
        salaries.processed()
    );
    Ok(salaries.finish(language, vacancies_found))
}

/// Statistics for every language, in the order given
pub async fn collect_stats<S, T>(
    source: &S,
    transport: &T,
    languages: &[String],
) -> Result<Vec<LanguageStats>>
where
    S: VacancySource,
    T: Transport,
{
    let mut stats = Vec::with_capacity(languages.len());
    for language in languages {
        stats.push(collect_language_stats(source, transport, language).await?);
    }
    Ok(stats)
}
