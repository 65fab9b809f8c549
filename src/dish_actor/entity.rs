//! [`ActorEntity`] implementation for [`Dish`].
//!
//! A dish can only be created for a restaurant that exists; `on_create` asks the restaurant
//! actor through the injected [`RestaurantClient`].

use super::actions::DishAction;
use super::error::DishError;
use crate::clients::RestaurantClient;
use crate::domain::{Dish, DishCreate, DishId, DishUpdate, DomainError};
use crate::framework::{ActorClient, ActorEntity};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = Dish;
    type Context = RestaurantClient;
    type Error = DishError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        Ok(Dish::new(id, params)?)
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        debug!(restaurant_id = %self.restaurant_id, "Validating restaurant");
        restaurants
            .find(self.restaurant_id)
            .await
            .map_err(|e| match e {
                RestaurantError::NotFound(id) => {
                    DishError::Domain(DomainError::NotFound(format!("restaurant {}", id)))
                }
                other => DishError::ActorCommunicationError(other.to_string()),
            })?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: DishUpdate,
        _ctx: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        self.apply(update)?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DishAction,
        _ctx: &RestaurantClient,
    ) -> Result<Dish, Self::Error> {
        match action {
            DishAction::SetAvailability(available) => self.available = available,
        }
        Ok(self.clone())
    }
}
