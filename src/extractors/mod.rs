use crate::error::ImportError;
use scraper::Html;

mod html_class;
mod json_ld;

pub use html_class::HtmlClassExtractor;
pub use json_ld::JsonLdExtractor;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    type Output;

    fn parse(&self, context: &ParsingContext) -> Result<Self::Output, ImportError>;
}
