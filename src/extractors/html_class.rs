use super::{Extractor, ParsingContext};
use crate::error::ImportError;
use crate::model::DomFields;
use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1.gel-trafalgar.content-title__text").expect("TITLE_SELECTOR should parse")
});
static PREP_TIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.recipe-metadata__prep-time").expect("PREP_TIME_SELECTOR should parse")
});
static COOK_TIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p.recipe-metadata__cook-time").expect("COOK_TIME_SELECTOR should parse")
});

/// Reads the recipe fields BBC Food only renders in markup: the title and
/// the human-readable prep and cook times.
pub struct HtmlClassExtractor;

fn find_text(document: &Html, selector: &Selector, field: &str) -> Option<String> {
    let element = document.select(selector).next()?;
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        debug!("HtmlClassExtractor: {} element is empty", field);
        None
    } else {
        debug!("HtmlClassExtractor: Found {}: {}", field, text);
        Some(text)
    }
}

impl Extractor for HtmlClassExtractor {
    type Output = DomFields;

    fn parse(&self, context: &ParsingContext) -> Result<DomFields, ImportError> {
        debug!("HtmlClassExtractor: Starting parse for URL: {}", context.url);

        let document = &context.document;

        Ok(DomFields {
            title: find_text(document, &TITLE_SELECTOR, "title"),
            prep_time_text: find_text(document, &PREP_TIME_SELECTOR, "prep time"),
            cook_time_text: find_text(document, &COOK_TIME_SELECTOR, "cook time"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbc_metadata_extraction() {
        let html = r#"
        <html>
            <body>
                <h1 class="gel-trafalgar content-title__text">
                    Barbecue pulled chicken
                </h1>
                <div class="recipe-metadata">
                    <p class="recipe-metadata__prep-time">less than 30 mins</p>
                    <p class="recipe-metadata__cook-time">1 to 2 hours</p>
                </div>
            </body>
        </html>
        "#;

        let context = ParsingContext::new("https://www.bbc.co.uk/food/recipes/x", html);
        let fields = HtmlClassExtractor.parse(&context).unwrap();

        assert_eq!(fields.title.as_deref(), Some("Barbecue pulled chicken"));
        assert_eq!(fields.prep_time_text.as_deref(), Some("less than 30 mins"));
        assert_eq!(fields.cook_time_text.as_deref(), Some("1 to 2 hours"));
    }

    #[test]
    fn test_title_needs_both_classes() {
        let html = r#"
        <html><body>
            <h1 class="content-title__text">Not the title</h1>
            <h2 class="gel-trafalgar content-title__text">Wrong element</h2>
        </body></html>
        "#;

        let context = ParsingContext::new("https://www.bbc.co.uk/food/recipes/x", html);
        let fields = HtmlClassExtractor.parse(&context).unwrap();

        assert_eq!(fields.title, None);
    }

    #[test]
    fn test_missing_and_empty_elements() {
        let html = r#"
        <html><body>
            <p class="recipe-metadata__cook-time">   </p>
        </body></html>
        "#;

        let context = ParsingContext::new("https://www.bbc.co.uk/food/recipes/x", html);
        let fields = HtmlClassExtractor.parse(&context).unwrap();

        assert_eq!(fields, DomFields::default());
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let html = r#"
        <html><body>
            <p class="recipe-metadata__cook-time">1 hour <span>30 mins</span></p>
        </body></html>
        "#;

        let context = ParsingContext::new("https://www.bbc.co.uk/food/recipes/x", html);
        let fields = HtmlClassExtractor.parse(&context).unwrap();

        assert_eq!(fields.cook_time_text.as_deref(), Some("1 hour 30 mins"));
    }
}
