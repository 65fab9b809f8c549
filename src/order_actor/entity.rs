//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor runs with `Context = (UserClient, RestaurantClient)`. `on_create` rejects
//! orders from unknown or inactive customers and for unknown or inactive restaurants;
//! `AssignCourier` checks the courier with the user actor before touching the order.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::{RestaurantClient, UserClient};
use crate::domain::{DomainError, Order, OrderCreate, OrderId, OrderUpdate, UserId};
use crate::framework::{ActorClient, ActorEntity};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (UserClient, RestaurantClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::create(id, params)?)
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (users, restaurants) = ctx;

        debug!(customer_id = %self.customer_id(), "Validating customer");
        let customer = users.find(self.customer_id()).await?;
        if !customer.active || !customer.is_customer() {
            return Err(DomainError::invalid_argument(format!(
                "{} is not an active customer",
                customer.id
            ))
            .into());
        }

        debug!(restaurant_id = %self.restaurant_id(), "Validating restaurant");
        let restaurant = restaurants.find(self.restaurant_id()).await?;
        if !restaurant.active {
            return Err(DomainError::invalid_argument(format!(
                "{} is not taking orders",
                restaurant.id
            ))
            .into());
        }
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        self.update(update)?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Transition(status) => self.transition_to(status)?,
            OrderAction::Cancel { requested_by } => self.cancel(requested_by)?,
            OrderAction::AssignCourier(courier_id) => {
                ensure_available_courier(&ctx.0, courier_id).await?;
                self.assign_courier(courier_id)?;
            }
            OrderAction::ConfirmDelivery => self.confirm_delivery()?,
        }
        Ok(self.clone())
    }
}

async fn ensure_available_courier(users: &UserClient, courier_id: UserId) -> Result<(), OrderError> {
    let courier = match users.find(courier_id).await {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => {
            return Err(DomainError::invalid_argument(format!("unknown courier {}", courier_id)).into())
        }
        Err(other) => return Err(other.into()),
    };
    if !courier.is_available_courier() {
        return Err(DomainError::invalid_argument(format!(
            "{} is not an available courier",
            courier_id
        ))
        .into());
    }
    Ok(())
}
