use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Restaurant,
    Retail,
    Service,
    Health,
    Automotive,
    Education,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Travel Agency")]
    Travel,
    #[serde(rename = "Legal Services")]
    Legal,
    Government,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Restaurant,
        Category::Retail,
        Category::Service,
        Category::Health,
        Category::Automotive,
        Category::Education,
        Category::RealEstate,
        Category::Travel,
        Category::Legal,
        Category::Government,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Retail => "Retail",
            Category::Service => "Service",
            Category::Health => "Health",
            Category::Automotive => "Automotive",
            Category::Education => "Education",
            Category::RealEstate => "Real Estate",
            Category::Travel => "Travel Agency",
            Category::Legal => "Legal Services",
            Category::Government => "Government",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdType {
    #[serde(rename = "Main Banner Slider")]
    Banner,
    #[serde(rename = "Sidebar Widget")]
    Sidebar,
    #[serde(rename = "Featured Listing")]
    Featured,
    #[serde(rename = "News Feed Integration")]
    NewsNative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_labels() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }
}
