use std::sync::LazyLock;

use regex::Regex;

static VEGAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://schema\.org/VeganDiet").expect("VEGAN_RE should compile")
});
static VEGETARIAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://schema\.org/VegetarianDiet").expect("VEGETARIAN_RE should compile")
});

/// Diet suitability derived from a recipe's `suitableForDiet` tags.
///
/// `vegan` implies `vegetarian`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DietFlags {
    pub vegan: bool,
    pub vegetarian: bool,
}

impl DietFlags {
    pub fn vegan_label(&self) -> &'static str {
        yes_no(self.vegan)
    }

    pub fn vegetarian_label(&self) -> &'static str {
        yes_no(self.vegetarian)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Classify a set of schema.org diet URIs. A vegan tag wins over a
/// vegetarian one.
pub fn classify_diet<S: AsRef<str>>(tags: &[S]) -> DietFlags {
    if tags.iter().any(|tag| VEGAN_RE.is_match(tag.as_ref())) {
        DietFlags {
            vegan: true,
            vegetarian: true,
        }
    } else if tags.iter().any(|tag| VEGETARIAN_RE.is_match(tag.as_ref())) {
        DietFlags {
            vegan: false,
            vegetarian: true,
        }
    } else {
        DietFlags::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tags() {
        let tags: [&str; 0] = [];
        assert_eq!(classify_diet(&tags), DietFlags::default());
    }

    #[test]
    fn test_vegan() {
        let flags = classify_diet(&["https://schema.org/VeganDiet"]);
        assert!(flags.vegan);
        assert!(flags.vegetarian);
    }

    #[test]
    fn test_vegetarian() {
        let flags = classify_diet(&["https://schema.org/VegetarianDiet"]);
        assert!(!flags.vegan);
        assert!(flags.vegetarian);
    }

    #[test]
    fn test_vegan_takes_precedence() {
        let flags = classify_diet(&[
            "http://schema.org/VegetarianDiet",
            "http://schema.org/VeganDiet",
        ]);
        assert_eq!(
            flags,
            DietFlags {
                vegan: true,
                vegetarian: true
            }
        );
    }

    #[test]
    fn test_unrecognized_tags() {
        let flags = classify_diet(&[
            "https://schema.org/GlutenFreeDiet",
            "VeganDiet",
            "see https://schema.org/VeganDiet",
        ]);
        assert_eq!(flags, DietFlags::default());
    }

    #[test]
    fn test_labels() {
        let flags = classify_diet(&["https://schema.org/VegetarianDiet".to_string()]);
        assert_eq!(flags.vegan_label(), "No");
        assert_eq!(flags.vegetarian_label(), "Yes");
    }
}
