use log::{debug, error, info};

use crate::assembler::assemble;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::extractors::{Extractor, HtmlClassExtractor, JsonLdExtractor, ParsingContext};
use crate::fetcher::{Fetch, PageFetcher};
use crate::model::RecipeRecord;
use crate::output::write_record;
use crate::source::validate_source_url;

/// Import one recipe page and write it to the configured CSV file.
///
/// This pipeline:
/// 1. Rejects URLs outside the BBC Food recipe pages before any request
/// 2. Fetches the page with `fetcher`
/// 3. Reads the JSON-LD recipe and the markup-only fields
/// 4. Assembles the normalized record
/// 5. Overwrites `config.output_path` with a single-row table
pub fn import_recipe_with<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &ImportConfig,
) -> Result<RecipeRecord, ImportError> {
    let url = config.source_url.as_str();
    validate_source_url(url)?;

    let html = fetcher.fetch(url)?;
    let context = ParsingContext::new(url, &html);

    let data = JsonLdExtractor.parse(&context)?;
    let dom = HtmlClassExtractor.parse(&context)?;
    debug!("{:#?}", data);
    debug!("{:#?}", dom);

    let record = assemble(&data, &dom, url)?;
    write_record(&config.output_path, &record)?;

    Ok(record)
}

/// [`import_recipe_with`] over HTTP.
pub fn import_recipe(config: &ImportConfig) -> Result<RecipeRecord, ImportError> {
    let fetcher = PageFetcher::new(Some(config.timeout()), &config.user_agent)?;
    import_recipe_with(&fetcher, config)
}

/// Run an import, logging any failure instead of returning it.
pub fn run(config: &ImportConfig) -> Option<RecipeRecord> {
    report(import_recipe(config))
}

/// Like [`run`] with a caller-supplied fetcher.
pub fn run_with<F: Fetch + ?Sized>(fetcher: &F, config: &ImportConfig) -> Option<RecipeRecord> {
    report(import_recipe_with(fetcher, config))
}

fn report(result: Result<RecipeRecord, ImportError>) -> Option<RecipeRecord> {
    match result {
        Ok(record) => {
            info!("Imported {}", record.url);
            Some(record)
        }
        Err(e @ ImportError::Transport(_)) => {
            error!("{}", e);
            None
        }
        Err(e) if e.is_invalid_source() => {
            error!("Invalid URL: {}", e);
            None
        }
        Err(e) => {
            error!("Recipe import failed: {}", e);
            None
        }
    }
}
