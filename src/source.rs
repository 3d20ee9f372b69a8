use url::Url;

use crate::error::ImportError;

const SITE_HOST: &str = "bbc.co.uk";
const SITE_SECTION: &str = "/food";
const RECIPE_SECTION: &str = "/food/recipes";

/// Check that `url` points into the BBC Food recipe pages.
///
/// URLs elsewhere on BBC Food are rejected with `NotARecipePage`, anything
/// else (including strings that do not parse as URLs) with `UnsupportedSite`.
pub fn validate_source_url(url: &str) -> Result<(), ImportError> {
    let parsed = Url::parse(url).map_err(|_| ImportError::UnsupportedSite(url.to_string()))?;

    let on_site = matches!(parsed.scheme(), "http" | "https")
        && parsed
            .host_str()
            .is_some_and(|host| host == SITE_HOST || host.ends_with(&format!(".{SITE_HOST}")));
    let path = parsed.path();

    if !on_site || !in_section(path, SITE_SECTION) {
        return Err(ImportError::UnsupportedSite(url.to_string()));
    }
    if !in_section(path, RECIPE_SECTION) {
        return Err(ImportError::NotARecipePage(url.to_string()));
    }

    Ok(())
}

fn in_section(path: &str, section: &str) -> bool {
    path.strip_prefix(section)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_urls_accepted() {
        assert!(
            validate_source_url("https://www.bbc.co.uk/food/recipes/quick_fish_gratin_07463")
                .is_ok()
        );
        assert!(validate_source_url("http://bbc.co.uk/food/recipes/easiest_ever_banana_cake_42108").is_ok());
    }

    #[test]
    fn test_other_food_pages_rejected() {
        let err = validate_source_url("https://www.bbc.co.uk/food/ingredients/banana").unwrap_err();
        assert!(matches!(err, ImportError::NotARecipePage(_)));
        assert!(err.is_invalid_source());

        let err = validate_source_url("https://www.bbc.co.uk/food").unwrap_err();
        assert!(matches!(err, ImportError::NotARecipePage(_)));
    }

    #[test]
    fn test_other_sites_rejected() {
        for url in [
            "https://www.bbcgoodfood.com/recipes/pulled-chicken",
            "https://www.bbc.co.uk/news",
            "https://www.bbc.co.uk/foodies/recipes",
            "https://evil.com/www.bbc.co.uk/food/recipes/x",
            "ftp://www.bbc.co.uk/food/recipes/x",
            "not a url",
        ] {
            let err = validate_source_url(url).unwrap_err();
            assert!(matches!(err, ImportError::UnsupportedSite(_)), "{url}");
        }
    }
}
