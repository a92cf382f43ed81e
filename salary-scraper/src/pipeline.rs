use futures::{stream, Stream, StreamExt, TryStreamExt};

use crate::aggregate::{LanguageRow, Pagination};
use crate::salary::predict_salaries;
use crate::source::{JobSource, Page};
use crate::Result;

/// Page through `source` for `language`, one request at a time.
/// Stops at the first exhausted page, which is not yielded, or after the first error.
pub fn pages<'a, S>(source: &'a S, language: &'a str) -> impl Stream<Item = Result<Page>> + 'a
where
    S: JobSource + ?Sized,
{
    async_stream::stream! {
        let mut page_index = 0;
        loop {
            match source.fetch_page(language, Some(page_index)).await {
                Ok(page) if source.is_exhausted(page_index, &page) => {
                    log::debug!(
                        "{} exhausted at page {} for {}",
                        source.name(),
                        page_index,
                        language
                    );
                    break;
                }
                Ok(page) => {
                    yield Ok(page);
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
            page_index += 1;
        }
    }
}

/// Salary estimates of every page `source` has for `language`.
pub async fn collect_pagination<S>(source: &S, language: &str) -> Result<Pagination>
where
    S: JobSource + ?Sized,
{
    pages(source, language)
        .map_ok(|page| predict_salaries(&page.bounds))
        .try_collect()
        .await
}

/// Fetch and aggregate one table row.
pub async fn language_row<S>(source: &S, language: &str) -> Result<LanguageRow>
where
    S: JobSource + ?Sized,
{
    let pagination = collect_pagination(source, language).await?;
    let found = source.fetch_page(language, None).await?.found;
    let row = LanguageRow::from_pagination(language, found, &pagination)?;
    log::info!(
        "{}: {} found, {} processed, average salary {} for {}",
        source.name(),
        row.found,
        row.processed,
        row.average,
        language
    );
    Ok(row)
}

/// One row per language, in the order given. Up to `workers` languages are
/// fetched at once; the first failure aborts the whole table.
pub async fn build_rows<S>(source: &S, languages: &[String], workers: usize) -> Result<Vec<LanguageRow>>
where
    S: JobSource + ?Sized,
{
    stream::iter(languages)
        .map(|language| language_row(source, language))
        .buffered(workers.max(1))
        .try_collect()
        .await
}
