use super::{Address, DomainError, OpeningHours, RestaurantId};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of food a restaurant serves. Searchable by its display name (`fast food`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cuisine {
    Peruvian,
    Chifa,
    Italian,
    Japanese,
    Mexican,
    FastFood,
    Vegetarian,
    Other,
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cuisine::Peruvian => "peruvian",
            Cuisine::Chifa => "chifa",
            Cuisine::Italian => "italian",
            Cuisine::Japanese => "japanese",
            Cuisine::Mexican => "mexican",
            Cuisine::FastFood => "fast food",
            Cuisine::Vegetarian => "vegetarian",
            Cuisine::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: Address,
    pub phone: String,
    pub cuisine: Cuisine,
    pub description: Option<String>,
    pub opening_hours: Vec<OpeningHours>,
    /// Latest rating between 0 and 5, absent until the first rating. Each rating replaces the
    /// previous one.
    pub rating: Option<f32>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: Address,
    pub phone: String,
    pub cuisine: Cuisine,
    pub description: Option<String>,
    pub opening_hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub cuisine: Option<Cuisine>,
    pub description: Option<String>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, params: RestaurantCreate) -> Result<Self, DomainError> {
        require("name", &params.name)?;
        require("phone", &params.phone)?;
        params.address.validate()?;
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            address: params.address,
            phone: params.phone.trim().to_string(),
            cuisine: params.cuisine,
            description: params.description,
            opening_hours: params.opening_hours,
            rating: None,
            active: true,
        })
    }

    pub fn apply(&mut self, update: RestaurantUpdate) -> Result<(), DomainError> {
        if let Some(name) = &update.name {
            require("name", name)?;
        }
        if let Some(phone) = &update.phone {
            require("phone", phone)?;
        }
        if let Some(address) = &update.address {
            address.validate()?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(cuisine) = update.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }

    pub fn add_opening_hours(&mut self, hours: OpeningHours) -> Result<(), DomainError> {
        if self.opening_hours.contains(&hours) {
            return Err(DomainError::invalid_argument(format!(
                "{} already has window {}",
                self.id, hours
            )));
        }
        self.opening_hours.push(hours);
        Ok(())
    }

    pub fn rate(&mut self, rating: f32) -> Result<(), DomainError> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(DomainError::invalid_argument(format!(
                "rating must be between 0 and 5, got {}",
                rating
            )));
        }
        self.rating = Some(rating);
        Ok(())
    }

    /// Open if active and any window covers the moment, including overnight spill-over from the
    /// previous day.
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        self.active && self.opening_hours.iter().any(|h| h.covers(day, time))
    }

    /// Case-insensitive match on name, description, cuisine or the address street, city and
    /// district. Underscores in the query count as spaces, so `fast_food` finds fast food.
    pub fn matches(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase().replace('_', " ");
        if needle.is_empty() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(&needle);
        contains(&self.name)
            || self.description.as_deref().is_some_and(contains)
            || self.cuisine.to_string().contains(&needle)
            || contains(&self.address.street)
            || contains(&self.address.city)
            || self.address.district.as_deref().is_some_and(contains)
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant::new(
            RestaurantId(1),
            RestaurantCreate {
                name: "La Nueva Palomino".into(),
                address: Address::new("Leoncio Prado 122", "Arequipa").unwrap(),
                phone: "054-252393".into(),
                cuisine: Cuisine::Peruvian,
                description: Some("Picanteria tradicional".into()),
                opening_hours: vec![OpeningHours::parse("viernes", "20:00", "02:00").unwrap()],
            },
        )
        .unwrap()
    }

    fn at(value: &str) -> NaiveTime {
        NaiveTime::parse_from_str(value, "%H:%M").unwrap()
    }

    #[test]
    fn test_requires_name_and_phone() {
        let mut params = RestaurantCreate {
            name: " ".into(),
            address: Address::new("Calle 1", "Lima").unwrap(),
            phone: "01-555".into(),
            cuisine: Cuisine::Other,
            description: None,
            opening_hours: vec![],
        };
        assert!(Restaurant::new(RestaurantId(1), params.clone()).is_err());
        params.name = "Tanta".into();
        params.phone = String::new();
        assert!(Restaurant::new(RestaurantId(1), params).is_err());
    }

    #[test]
    fn test_open_through_overnight_window() {
        let mut r = restaurant();
        assert!(r.is_open_at(Weekday::Fri, at("23:00")));
        assert!(r.is_open_at(Weekday::Sat, at("01:00")));
        assert!(!r.is_open_at(Weekday::Sat, at("03:00")));

        r.active = false;
        assert!(!r.is_open_at(Weekday::Fri, at("23:00")));
    }

    #[test]
    fn test_duplicate_window_rejected() {
        let mut r = restaurant();
        let window = OpeningHours::parse("viernes", "20:00", "02:00").unwrap();
        assert!(r.add_opening_hours(window).is_err());
        r.add_opening_hours(OpeningHours::parse("sabado", "12:00", "16:00").unwrap())
            .unwrap();
        assert_eq!(r.opening_hours.len(), 2);
    }

    #[test]
    fn test_rating_bounds() {
        let mut r = restaurant();
        assert!(r.rate(5.5).is_err());
        assert!(r.rate(-1.0).is_err());
        assert!(r.rate(f32::NAN).is_err());
        r.rate(4.5).unwrap();
        assert_eq!(r.rating, Some(4.5));
    }

    #[test]
    fn test_matches_name_description_and_cuisine() {
        let r = restaurant();
        assert!(r.matches("palomino"));
        assert!(r.matches("PICANTERIA"));
        assert!(r.matches("Peruvian"));
        assert!(!r.matches("sushi"));

        assert!(r.matches("leoncio prado"));
        assert!(r.matches("AREQUIPA"));
        assert!(!r.matches("Yanahuara"));
        let mut r = r;
        r.address = r.address.clone().with_district("Yanahuara");
        assert!(r.matches("yanahuara"));
    }

    #[test]
    fn test_two_word_cuisine_is_searchable() {
        let mut r = restaurant();
        r.cuisine = Cuisine::FastFood;
        assert_eq!(Cuisine::FastFood.to_string(), "fast food");
        assert!(r.matches("Fast Food"));
        assert!(r.matches("fast_food"));
        assert!(!r.matches("slow food"));
    }

    #[test]
    fn test_rating_keeps_the_latest_value() {
        let mut r = restaurant();
        assert_eq!(r.rating, None);
        r.rate(5.0).unwrap();
        r.rate(3.5).unwrap();
        assert_eq!(r.rating, Some(3.5));
        assert!(r.rate(5.5).is_err());
        assert_eq!(r.rating, Some(3.5));
    }
}
