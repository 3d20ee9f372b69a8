pub mod assembler;
pub mod config;
pub mod diet;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod rating;
pub mod source;

pub use assembler::assemble;
pub use config::ImportConfig;
pub use diet::{classify_diet, DietFlags};
pub use duration::{parse_cook_duration, parse_duration, HoursAndMinutes};
pub use error::ImportError;
pub use fetcher::{Fetch, PageFetcher};
pub use model::{DomFields, RecipeRecord, RecipeRow, StructuredData};
pub use pipeline::{import_recipe, import_recipe_with, run, run_with};
pub use rating::format_rating;
