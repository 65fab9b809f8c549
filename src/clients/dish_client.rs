//! # Dish Client
//!
//! High-level API for the `Dish` actor: menu management and per-restaurant menus.

use crate::dish_actor::{DishAction, DishError};
use crate::domain::{Dish, DishCreate, DishId, DishUpdate, RestaurantId};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<DishId, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(DishError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, update: DishUpdate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(DishError::from)
    }

    #[instrument(skip(self))]
    pub async fn set_availability(&self, id: DishId, available: bool) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, DishAction::SetAvailability(available))
            .await
            .map_err(DishError::from)
    }

    /// Every dish of a restaurant, available or not.
    #[instrument(skip(self))]
    pub async fn menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Dish>, DishError> {
        let dishes = self.list().await?;
        Ok(dishes
            .into_iter()
            .filter(|d| d.restaurant_id == restaurant_id)
            .collect())
    }

    /// The dishes a customer can order right now.
    pub async fn available_menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Dish>, DishError> {
        let mut dishes = self.menu(restaurant_id).await?;
        dishes.retain(|d| d.available);
        Ok(dishes)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DishError::from(e)
    }

    fn not_found(id: &DishId) -> Self::Error {
        DishError::NotFound(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;
    use crate::framework::mock::MockClient;
    use rust_decimal_macros::dec;

    fn dish(id: u32, restaurant: u32, available: bool) -> Dish {
        let mut d = Dish::new(
            DishId(id),
            DishCreate {
                restaurant_id: RestaurantId(restaurant),
                name: format!("Plato {}", id),
                description: None,
                price: Money::create(dec!(15), "PEN").unwrap(),
            },
        )
        .unwrap();
        d.available = available;
        d
    }

    #[tokio::test]
    async fn test_menus_are_per_restaurant() {
        let mut mock = MockClient::<Dish>::new();
        let all = vec![dish(1, 1, true), dish(2, 2, true), dish(3, 1, false)];
        mock.expect_list().return_ok(all.clone());
        mock.expect_list().return_ok(all);

        let client = DishClient::new(mock.client());

        let menu = client.menu(RestaurantId(1)).await.unwrap();
        assert_eq!(menu.iter().map(|d| d.id).collect::<Vec<_>>(), vec![DishId(1), DishId(3)]);

        let available = client.available_menu(RestaurantId(1)).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, DishId(1));

        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(DishError::NotFound(
                "dish_1".into(),
            ))));

        let client = DishClient::new(mock.client());
        let result = client
            .create_dish(DishCreate {
                restaurant_id: RestaurantId(1),
                name: "Adobo".into(),
                description: None,
                price: Money::create(dec!(20), "PEN").unwrap(),
            })
            .await;
        assert_eq!(result, Err(DishError::NotFound("dish_1".into())));
    }
}
