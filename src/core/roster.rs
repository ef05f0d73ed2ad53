use crate::domain::model::{
    DietaryFilters, Item, NewRestaurant, Restaurant, RestaurantPatch, MAX_RATING, MIN_RATING,
};
use crate::utils::error::{Result, SpinnerError};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use std::collections::HashSet;

/// The editable restaurant list, in insertion order with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    restaurants: Vec<Restaurant>,
}

impl Roster {
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self> {
        let mut seen = HashSet::new();
        for restaurant in &restaurants {
            validate_restaurant(restaurant)?;
            if !seen.insert(restaurant.id.as_str()) {
                return Err(SpinnerError::DuplicateId {
                    id: restaurant.id.clone(),
                });
            }
        }
        Ok(Self { restaurants })
    }

    pub fn with_defaults() -> Self {
        Self {
            restaurants: default_restaurants(),
        }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Appends a restaurant with an id derived from the current time.
    pub fn add(&mut self, new: NewRestaurant) -> Result<&Restaurant> {
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        let restaurant = Restaurant {
            id,
            name: new.name.trim().to_string(),
            rating: new.rating,
            is_vegetarian: new.is_vegetarian,
            is_halal: new.is_halal,
        };
        validate_restaurant(&restaurant)?;

        tracing::info!("➕ Added restaurant '{}' ({})", restaurant.name, restaurant.id);
        self.restaurants.push(restaurant);
        let last = self.restaurants.len() - 1;
        Ok(&self.restaurants[last])
    }

    pub fn update(&mut self, id: &str, patch: RestaurantPatch) -> Result<&Restaurant> {
        let index = self.position(id)?;

        let mut updated = self.restaurants[index].clone();
        if let Some(name) = patch.name {
            updated.name = name.trim().to_string();
        }
        if let Some(rating) = patch.rating {
            updated.rating = rating;
        }
        if let Some(is_vegetarian) = patch.is_vegetarian {
            updated.is_vegetarian = is_vegetarian;
        }
        if let Some(is_halal) = patch.is_halal {
            updated.is_halal = is_halal;
        }
        validate_restaurant(&updated)?;

        tracing::info!("✏️ Updated restaurant '{}' ({})", updated.name, updated.id);
        self.restaurants[index] = updated;
        Ok(&self.restaurants[index])
    }

    pub fn remove(&mut self, id: &str) -> Result<Restaurant> {
        let index = self.position(id)?;
        let removed = self.restaurants.remove(index);
        tracing::info!("🗑️ Removed restaurant '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    pub fn reset(&mut self) {
        self.restaurants = default_restaurants();
    }

    pub fn filtered(&self, filters: &DietaryFilters) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| filters.matches(r))
            .collect()
    }

    /// The collection handed to a spin.
    pub fn items(&self, filters: &DietaryFilters) -> Vec<Item> {
        self.filtered(filters)
            .into_iter()
            .map(Restaurant::to_item)
            .collect()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.restaurants
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SpinnerError::RestaurantNotFound { id: id.to_string() })
    }

    fn next_id(&self, mut candidate: i64) -> String {
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

pub fn validate_restaurant(restaurant: &Restaurant) -> Result<()> {
    validate_non_empty_string("name", &restaurant.name).map_err(|_| {
        SpinnerError::ValidationError {
            message: "Restaurant name cannot be empty".to_string(),
        }
    })?;
    validate_range("rating", restaurant.rating, MIN_RATING, MAX_RATING).map_err(|_| {
        SpinnerError::InvalidWeight {
            id: restaurant.id.clone(),
            weight: i64::from(restaurant.rating),
        }
    })
}

pub fn default_restaurants() -> Vec<Restaurant> {
    [
        ("1", "Panda Express", 4, true, false),
        ("2", "Chipotle", 5, true, false),
        ("3", "Halal Guys", 5, true, true),
        ("4", "Subway", 3, true, false),
        ("5", "Pizza Hut", 3, true, false),
        ("6", "Tikka Masala", 4, true, true),
        ("7", "Mediterranean Grill", 4, true, true),
        ("8", "Thai Basil", 4, true, false),
    ]
    .into_iter()
    .map(|(id, name, rating, is_vegetarian, is_halal)| Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        is_vegetarian,
        is_halal,
    })
    .collect()
}
