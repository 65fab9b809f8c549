//! [`ActorEntity`] implementation for [`Restaurant`].

use super::actions::{RestaurantAction, RestaurantActionResult};
use super::error::RestaurantError;
use crate::domain::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        Ok(Restaurant::new(id, params)?)
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(update)?;
        Ok(())
    }

    /// # Actions
    /// - `AddOpeningHours` / `ClearOpeningHours`: edit the weekly schedule
    /// - `Rate`: store a rating in `0..=5`
    /// - `SetActive`: list or delist the restaurant
    /// - `IsOpenAt`: schedule check, overnight windows included
    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &(),
    ) -> Result<RestaurantActionResult, Self::Error> {
        match action {
            RestaurantAction::AddOpeningHours(hours) => {
                self.add_opening_hours(hours)?;
                Ok(RestaurantActionResult::AddOpeningHours(()))
            }
            RestaurantAction::ClearOpeningHours => {
                self.opening_hours.clear();
                Ok(RestaurantActionResult::ClearOpeningHours(()))
            }
            RestaurantAction::Rate(rating) => {
                self.rate(rating)?;
                Ok(RestaurantActionResult::Rate(()))
            }
            RestaurantAction::SetActive(active) => {
                self.active = active;
                Ok(RestaurantActionResult::SetActive(()))
            }
            RestaurantAction::IsOpenAt { day, time } => {
                Ok(RestaurantActionResult::IsOpenAt(self.is_open_at(day, time)))
            }
        }
    }
}
