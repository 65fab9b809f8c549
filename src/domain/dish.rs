use super::{DishId, DomainError, Money, RestaurantId};
use serde::{Deserialize, Serialize};

/// A menu entry of one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
}

impl Dish {
    pub fn new(id: DishId, params: DishCreate) -> Result<Self, DomainError> {
        validate_name(&params.name)?;
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name.trim().to_string(),
            description: params.description,
            price: params.price,
            available: true,
        })
    }

    pub fn apply(&mut self, update: DishUpdate) -> Result<(), DomainError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_argument("dish name must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_dish_is_available() {
        let dish = Dish::new(
            DishId(1),
            DishCreate {
                restaurant_id: RestaurantId(1),
                name: " Rocoto relleno ".into(),
                description: None,
                price: Money::create(dec!(28), "PEN").unwrap(),
            },
        )
        .unwrap();
        assert!(dish.available);
        assert_eq!(dish.name, "Rocoto relleno");
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Dish::new(
            DishId(1),
            DishCreate {
                restaurant_id: RestaurantId(1),
                name: "".into(),
                description: None,
                price: Money::zero("PEN").unwrap(),
            },
        );
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }
}
