use super::{Extractor, ParsingContext};
use crate::error::ImportError;
use crate::model::StructuredData;
use crate::rating::parse_rating_value;
use html_escape::decode_html_entities;
use log::debug;
use scraper::Selector;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("SCRIPT_SELECTOR should parse")
});

/// Reads the schema.org `Recipe` object embedded as JSON-LD.
pub struct JsonLdExtractor;

impl JsonLdExtractor {
    fn convert_to_structured_data(&self, recipe: JsonLdRecipe) -> StructuredData {
        let images = match recipe.image {
            Some(ImageType::String(i)) => vec![decode_html_symbols(&i)],
            Some(ImageType::MultipleStrings(imgs)) => {
                imgs.iter().map(|i| decode_html_symbols(i)).collect()
            }
            Some(ImageType::Object(i)) => vec![i.url],
            Some(ImageType::MultipleObjects(imgs)) => imgs.into_iter().map(|i| i.url).collect(),
            None => vec![],
        };

        let ingredients = recipe.recipe_ingredient.map(|ingredients| match ingredients {
            RecipeIngredients::Strings(ingredients) => ingredients
                .iter()
                .map(|ing| decode_html_symbols(ing))
                .collect(),
            RecipeIngredients::Objects(ingredients) => ingredients
                .into_iter()
                .map(|ing| {
                    let amount = ing.amount.as_deref().unwrap_or("").trim();
                    let name = decode_html_symbols(&ing.name);
                    if amount.is_empty() {
                        name
                    } else {
                        format!("{amount} {name}")
                    }
                })
                .collect(),
        });

        let (rating_value, rating_count) = match recipe.aggregate_rating {
            Some(rating) => (
                rating.rating_value.and_then(|value| match value {
                    NumberOrText::Number(n) => n.as_f64(),
                    NumberOrText::Text(s) => parse_rating_value(&s),
                }),
                rating.rating_count.map(|count| match count {
                    NumberOrText::Number(n) => n.to_string(),
                    NumberOrText::Text(s) => s,
                }),
            ),
            None => (None, None),
        };

        StructuredData {
            images,
            ingredients,
            rating_value,
            rating_count,
            category: recipe.recipe_category.and_then(TextOrList::joined),
            cuisine: recipe.recipe_cuisine.and_then(TextOrList::joined),
            suitable_for_diet: recipe
                .suitable_for_diet
                .map(TextOrList::into_vec)
                .unwrap_or_default(),
            prep_time: recipe.prep_time.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Only the fields this crate reads. Each one is decoded on its own so a
/// malformed field is dropped instead of failing the whole recipe.
#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(default, deserialize_with = "lenient")]
    image: Option<ImageType>,
    #[serde(rename = "recipeIngredient", default, deserialize_with = "lenient")]
    recipe_ingredient: Option<RecipeIngredients>,
    #[serde(rename = "aggregateRating", default, deserialize_with = "lenient")]
    aggregate_rating: Option<AggregateRating>,
    #[serde(rename = "recipeCategory", default, deserialize_with = "lenient")]
    recipe_category: Option<TextOrList>,
    #[serde(rename = "recipeCuisine", default, deserialize_with = "lenient")]
    recipe_cuisine: Option<TextOrList>,
    #[serde(rename = "suitableForDiet", default, deserialize_with = "lenient")]
    suitable_for_diet: Option<TextOrList>,
    #[serde(rename = "prepTime", default, deserialize_with = "lenient")]
    prep_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageType {
    String(String),
    Object(ImageObject),
    MultipleStrings(Vec<String>),
    MultipleObjects(Vec<ImageObject>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeIngredients {
    Strings(Vec<String>),
    Objects(Vec<IngredientObject>),
}

#[derive(Debug, Deserialize)]
struct IngredientObject {
    name: String,
    amount: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AggregateRating {
    #[serde(rename = "ratingValue", default, deserialize_with = "lenient")]
    rating_value: Option<NumberOrText>,
    #[serde(rename = "ratingCount", default, deserialize_with = "lenient")]
    rating_count: Option<NumberOrText>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    Multiple(Vec<String>),
}

impl TextOrList {
    fn into_vec(self) -> Vec<String> {
        match self {
            TextOrList::Text(s) => vec![s],
            TextOrList::Multiple(v) => v,
        }
    }

    /// Entity-decoded, comma-joined, `None` when nothing is left.
    fn joined(self) -> Option<String> {
        let joined = self
            .into_vec()
            .iter()
            .map(|s| decode_html_symbols(s).trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            debug!("JsonLdExtractor: dropping malformed field: {}", e);
            Ok(None)
        }
    }
}

fn decode_html_symbols(text: &str) -> String {
    // entities are sometimes double-encoded
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn find_recipe(json_ld: &Value) -> Option<&Value> {
    if let Some(items) = json_ld.as_array() {
        debug!("JsonLdExtractor: JSON-LD is an array");
        items.iter().find_map(find_recipe)
    } else if is_recipe_type(json_ld) {
        debug!("JsonLdExtractor: Found Recipe type in root");
        Some(json_ld)
    } else if let Some(graph) = json_ld.get("@graph") {
        debug!("JsonLdExtractor: Found @graph");
        find_recipe(graph)
    } else {
        None
    }
}

impl Extractor for JsonLdExtractor {
    type Output = StructuredData;

    fn parse(&self, context: &ParsingContext) -> Result<StructuredData, ImportError> {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);

        let scripts: Vec<_> = context.document.select(&SCRIPT_SELECTOR).collect();
        debug!(
            "JsonLdExtractor: Found {} JSON-LD script tags",
            scripts.len()
        );

        let mut last_error = None;
        for (index, script) in scripts.iter().enumerate() {
            let raw_json = script.text().collect::<String>();

            let json_ld = match serde_json::from_str::<Value>(raw_json.trim()) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                    last_error = Some(e);
                    continue;
                }
            };

            if let Some(recipe) = find_recipe(&json_ld) {
                let recipe = JsonLdRecipe::deserialize(recipe)?;
                debug!("JsonLdExtractor: Decoded recipe from script {}", index);
                return Ok(self.convert_to_structured_data(recipe));
            }
            debug!("JsonLdExtractor: No recipe found in JSON-LD {}", index);
        }

        Err(last_error
            .map(ImportError::Json)
            .unwrap_or(ImportError::MissingStructuredData))
    }
}
