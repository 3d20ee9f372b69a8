use std::fmt;

use serde::Serialize;

use crate::diet::DietFlags;

/// Shown in the output for any field the page did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Recipe fields read from the page's JSON-LD block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredData {
    pub images: Vec<String>,
    pub ingredients: Option<Vec<String>>,
    pub rating_value: Option<f64>,
    pub rating_count: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub suitable_for_diet: Vec<String>,
    pub prep_time: Option<String>,
}

/// Recipe fields read from the rendered page markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomFields {
    pub title: Option<String>,
    pub prep_time_text: Option<String>,
    pub cook_time_text: Option<String>,
}

/// One normalized recipe. Absent fields stay `None` until [`RecipeRecord::to_row`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRecord {
    pub title: Option<String>,
    pub prep_time: Option<String>,
    pub cooking_time: Option<String>,
    pub total_time: Option<String>,
    pub image: Option<String>,
    pub ingredients: Option<String>,
    pub rating: Option<String>,
    pub rating_count: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Vec<String>,
    pub diet_flags: DietFlags,
    pub url: String,
}

/// Display form of a [`RecipeRecord`]; field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeRow {
    pub title: String,
    pub prep_time: String,
    pub cooking_time: String,
    pub total_time_hours: String,
    pub image: String,
    pub ingredients: String,
    pub rating_val: String,
    pub rating_count: String,
    pub category: String,
    pub cuisine: String,
    pub diet: String,
    pub vegan: String,
    pub vegetarian: String,
    pub url: String,
}

fn or_sentinel(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl RecipeRecord {
    pub fn to_row(&self) -> RecipeRow {
        RecipeRow {
            title: or_sentinel(&self.title),
            prep_time: or_sentinel(&self.prep_time),
            cooking_time: or_sentinel(&self.cooking_time),
            total_time_hours: or_sentinel(&self.total_time),
            image: or_sentinel(&self.image),
            ingredients: or_sentinel(&self.ingredients),
            rating_val: or_sentinel(&self.rating),
            rating_count: or_sentinel(&self.rating_count),
            category: or_sentinel(&self.category),
            cuisine: or_sentinel(&self.cuisine),
            diet: serde_json::to_string(&self.diet).unwrap_or_else(|_| "[]".to_string()),
            vegan: self.diet_flags.vegan_label().to_string(),
            vegetarian: self.diet_flags.vegetarian_label().to_string(),
            url: self.url.clone(),
        }
    }
}

impl fmt::Display for RecipeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.to_row();
        writeln!(f, "title: {}", row.title)?;
        writeln!(f, "prep_time: {}", row.prep_time)?;
        writeln!(f, "cooking_time: {}", row.cooking_time)?;
        writeln!(f, "total_time_hours: {}", row.total_time_hours)?;
        writeln!(f, "image: {}", row.image)?;
        writeln!(f, "ingredients:")?;
        for line in row.ingredients.lines() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "rating_val: {}", row.rating_val)?;
        writeln!(f, "rating_count: {}", row.rating_count)?;
        writeln!(f, "category: {}", row.category)?;
        writeln!(f, "cuisine: {}", row.cuisine)?;
        writeln!(f, "diet: {}", row.diet)?;
        writeln!(f, "vegan: {}", row.vegan)?;
        writeln!(f, "vegetarian: {}", row.vegetarian)?;
        write!(f, "url: {}", row.url)
    }
}
