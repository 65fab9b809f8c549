//! [`ActorEntity`] implementation for [`Delivery`].
//!
//! The delivery actor runs with `Context = OrderClient`. Steps that change the order (courier
//! assignment, final delivery) are checked locally first, then applied to the order, then
//! recorded here. A rejection from the order actor leaves the delivery untouched.

use super::actions::DeliveryAction;
use super::error::DeliveryError;
use crate::clients::OrderClient;
use crate::domain::{Delivery, DeliveryId, DomainError, OrderId};
use crate::framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

/// Parameters for opening a delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryCreate {
    pub order_id: OrderId,
}

#[async_trait]
impl ActorEntity for Delivery {
    type Id = DeliveryId;
    type Create = DeliveryCreate;
    type Update = ();
    type Action = DeliveryAction;
    type ActionResult = Delivery;
    type Context = OrderClient;
    type Error = DeliveryError;

    fn from_create_params(id: DeliveryId, params: DeliveryCreate) -> Result<Self, Self::Error> {
        Ok(Delivery::new(id, params.order_id))
    }

    async fn on_create(&mut self, orders: &OrderClient) -> Result<(), Self::Error> {
        debug!(order_id = %self.order_id(), "Validating order");
        let order = orders.find(self.order_id()).await?;
        if order.status().is_terminal() {
            return Err(DomainError::invalid_state(format!(
                "{} is already {}",
                order.id(),
                order.status()
            ))
            .into());
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderClient) -> Result<(), Self::Error> {
        Err(DomainError::invalid_argument("deliveries change through actions only").into())
    }

    async fn handle_action(
        &mut self,
        action: DeliveryAction,
        orders: &OrderClient,
    ) -> Result<Delivery, Self::Error> {
        match action {
            DeliveryAction::AssignCourier(courier_id) => {
                self.check_assignable()?;
                orders.assign_courier(self.order_id(), courier_id).await?;
                self.assign_courier(courier_id)?;
                info!(delivery_id = %self.id(), %courier_id, "Courier assigned");
            }
            DeliveryAction::RegisterPickup => self.register_pickup()?,
            DeliveryAction::RegisterDelivery => {
                self.check_deliverable()?;
                orders.confirm_delivery(self.order_id()).await?;
                self.register_delivery()?;
                info!(delivery_id = %self.id(), "Delivered");
            }
            DeliveryAction::UpdateLocation(coordinates) => self.update_location(coordinates)?,
            DeliveryAction::ReportIncident(description) => self.report_incident(description)?,
        }
        Ok(self.clone())
    }
}
