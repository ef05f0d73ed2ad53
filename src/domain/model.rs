use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// 可以被選中的項目，權重即星等
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub weight: u32,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
        }
    }
}

/// Anything that can sit on the wheel.
pub trait Weighted {
    fn weight(&self) -> u32;
}

impl Weighted for Item {
    fn weight(&self) -> u32 {
        self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub is_vegetarian: bool,
    pub is_halal: bool,
}

impl Restaurant {
    pub fn to_item(&self) -> Item {
        Item::new(self.id.clone(), self.name.clone(), u32::from(self.rating))
    }

    pub fn stars(&self) -> String {
        star_bar(u32::from(self.rating))
    }

    /// Dietary badges shown next to the winner.
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.is_vegetarian {
            badges.push("🌱 Vegetarian Options");
        }
        if self.is_halal {
            badges.push("🌙 Halal");
        }
        badges
    }
}

/// Renders a rating as filled and empty stars, e.g. `★★★☆☆`.
pub fn star_bar(rating: u32) -> String {
    let filled = rating.min(u32::from(MAX_RATING)) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(usize::from(MAX_RATING) - filled)
    )
}

impl Weighted for Restaurant {
    fn weight(&self) -> u32 {
        u32::from(self.rating)
    }
}

impl From<&Restaurant> for Item {
    fn from(restaurant: &Restaurant) -> Self {
        restaurant.to_item()
    }
}

/// 新增時尚未分配 id 的餐廳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub rating: u8,
    pub is_vegetarian: bool,
    pub is_halal: bool,
}

impl Default for NewRestaurant {
    fn default() -> Self {
        Self {
            name: String::new(),
            rating: 3,
            is_vegetarian: false,
            is_halal: false,
        }
    }
}

/// Partial update applied by `Roster::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub rating: Option<u8>,
    pub is_vegetarian: Option<bool>,
    pub is_halal: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryFilters {
    pub vegetarian_only: bool,
    pub halal_only: bool,
}

impl DietaryFilters {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if self.vegetarian_only && !restaurant.is_vegetarian {
            return false;
        }
        if self.halal_only && !restaurant.is_halal {
            return false;
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.vegetarian_only || self.halal_only
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinResult {
    pub winner: Item,
    pub winner_index: usize,
    pub final_rotation: f64,
    pub trigger: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(veg: bool, halal: bool) -> Restaurant {
        Restaurant {
            id: "1".to_string(),
            name: "Test".to_string(),
            rating: 4,
            is_vegetarian: veg,
            is_halal: halal,
        }
    }

    #[test]
    fn test_filters_require_every_enabled_flag() {
        let both = DietaryFilters {
            vegetarian_only: true,
            halal_only: true,
        };
        assert!(both.matches(&restaurant(true, true)));
        assert!(!both.matches(&restaurant(true, false)));
        assert!(!both.matches(&restaurant(false, true)));

        let none = DietaryFilters::default();
        assert!(none.matches(&restaurant(false, false)));
        assert!(!none.is_active());
    }

    #[test]
    fn test_restaurant_projects_rating_to_weight() {
        let item = restaurant(true, false).to_item();
        assert_eq!(item.weight, 4);
        assert_eq!(item.id, "1");
        assert_eq!(item.name, "Test");
    }

    #[test]
    fn test_badges_follow_dietary_flags() {
        assert!(restaurant(false, false).badges().is_empty());
        assert_eq!(restaurant(true, false).badges(), vec!["🌱 Vegetarian Options"]);
        assert_eq!(
            restaurant(true, true).badges(),
            vec!["🌱 Vegetarian Options", "🌙 Halal"]
        );
    }

    #[test]
    fn test_restaurant_serializes_camel_case() {
        let json = serde_json::to_value(restaurant(true, false)).unwrap();
        assert_eq!(json["isVegetarian"], true);
        assert_eq!(json["isHalal"], false);
        assert_eq!(json["rating"], 4);
    }

    #[test]
    fn test_stars() {
        assert_eq!(restaurant(false, false).stars(), "★★★★☆");
    }
}
