//! Tag synthesis from hosting origin and subcategory.

use trove_core::Origin;

/// At most one origin tag, then the subcategory name.
pub(crate) fn synthesize(url: &str, subcategory: Option<&str>) -> Vec<String> {
    let mut tags = Vec::with_capacity(2);
    if let Some(origin) = Origin::from_url(url) {
        tags.push(origin.to_string());
    }
    if let Some(subcategory) = subcategory {
        if !subcategory.is_empty() {
            tags.push(subcategory.to_string());
        }
    }
    tags
}
