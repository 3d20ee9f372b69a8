use log::{debug, warn};

use crate::diet::classify_diet;
use crate::duration::{parse_cook_duration, parse_duration, total_time};
use crate::error::ImportError;
use crate::model::{DomFields, RecipeRecord, StructuredData};
use crate::rating::format_rating;
use crate::source::validate_source_url;

/// Build the normalized record for one page.
///
/// Fails only when `source_url` is outside the BBC Food recipe pages; missing
/// fields are carried as `None`.
pub fn assemble(
    data: &StructuredData,
    dom: &DomFields,
    source_url: &str,
) -> Result<RecipeRecord, ImportError> {
    validate_source_url(source_url)?;

    let prep_hours = data.prep_time.as_deref().map(parse_duration).unwrap_or(0.0);
    let cook_hours = dom
        .cook_time_text
        .as_deref()
        .map_or(Some(0.0), parse_cook_duration);
    if cook_hours.is_none() {
        warn!(
            "Could not read a cook duration from {:?}; total time is unknown",
            dom.cook_time_text
        );
    }
    let total = total_time(prep_hours, cook_hours);
    debug!(
        "prep {:.3}h + cook {:?}h = {:?}",
        prep_hours, cook_hours, total
    );

    Ok(RecipeRecord {
        title: dom.title.clone(),
        prep_time: dom.prep_time_text.clone(),
        cooking_time: dom.cook_time_text.clone(),
        total_time: total.map(|t| t.to_string()),
        image: data.images.first().cloned(),
        ingredients: data.ingredients.as_ref().map(|items| items.join("\n")),
        rating: format_rating(data.rating_value),
        rating_count: data.rating_count.clone(),
        category: data.category.clone(),
        cuisine: data.cuisine.clone(),
        diet: data.suitable_for_diet.clone(),
        diet_flags: classify_diet(&data.suitable_for_diet),
        url: source_url.to_string(),
    })
}
