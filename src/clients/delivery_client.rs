//! # Delivery Client
//!
//! High-level API for the `Delivery` actor.

use crate::delivery_actor::{DeliveryAction, DeliveryCreate, DeliveryError};
use crate::domain::{Delivery, DeliveryId, OrderId, UserId};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DeliveryClient {
    inner: ResourceClient<Delivery>,
}

impl DeliveryClient {
    pub fn new(inner: ResourceClient<Delivery>) -> Self {
        Self { inner }
    }

    /// Opens a delivery for an order that is still in progress.
    #[instrument(skip(self))]
    pub async fn create_delivery(&self, order_id: OrderId) -> Result<DeliveryId, DeliveryError> {
        debug!("Sending request");
        self.inner
            .create(DeliveryCreate { order_id })
            .await
            .map_err(DeliveryError::from)
    }

    pub async fn assign_courier(
        &self,
        id: DeliveryId,
        courier_id: UserId,
    ) -> Result<Delivery, DeliveryError> {
        self.act(id, DeliveryAction::AssignCourier(courier_id)).await
    }

    pub async fn register_pickup(&self, id: DeliveryId) -> Result<Delivery, DeliveryError> {
        self.act(id, DeliveryAction::RegisterPickup).await
    }

    pub async fn register_delivery(&self, id: DeliveryId) -> Result<Delivery, DeliveryError> {
        self.act(id, DeliveryAction::RegisterDelivery).await
    }

    pub async fn update_location(
        &self,
        id: DeliveryId,
        coordinates: impl Into<String>,
    ) -> Result<Delivery, DeliveryError> {
        self.act(id, DeliveryAction::UpdateLocation(coordinates.into()))
            .await
    }

    pub async fn report_incident(
        &self,
        id: DeliveryId,
        description: impl Into<String>,
    ) -> Result<Delivery, DeliveryError> {
        self.act(id, DeliveryAction::ReportIncident(description.into()))
            .await
    }

    /// Deliveries currently or previously handled by a courier.
    #[instrument(skip(self))]
    pub async fn deliveries_for_courier(
        &self,
        courier_id: UserId,
    ) -> Result<Vec<Delivery>, DeliveryError> {
        let deliveries = self.list().await?;
        Ok(deliveries
            .into_iter()
            .filter(|d| d.courier_id() == Some(courier_id))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn delivery_for_order(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Delivery>, DeliveryError> {
        let deliveries = self.list().await?;
        Ok(deliveries.into_iter().find(|d| d.order_id() == order_id))
    }

    #[instrument(skip(self))]
    async fn act(&self, id: DeliveryId, action: DeliveryAction) -> Result<Delivery, DeliveryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(DeliveryError::from)
    }
}

#[async_trait]
impl ActorClient<Delivery> for DeliveryClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<Delivery> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DeliveryError::from(e)
    }

    fn not_found(id: &DeliveryId) -> Self::Error {
        DeliveryError::NotFound(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_actions_carry_their_payload() {
        let (generic, mut receiver) = create_mock_client::<Delivery>(10);
        let client = DeliveryClient::new(generic);

        let task = tokio::spawn(async move {
            client
                .update_location(DeliveryId(1), "-16.3989,-71.5350")
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, DeliveryId(1));
        assert!(matches!(action, DeliveryAction::UpdateLocation(ref c) if c == "-16.3989,-71.5350"));
        responder.send(Ok(Delivery::new(DeliveryId(1), OrderId(3)))).unwrap();

        let delivery = task.await.unwrap().unwrap();
        assert_eq!(delivery.order_id(), OrderId(3));
    }

    #[tokio::test]
    async fn test_lookups_filter_the_listing() {
        let mut mock = MockClient::<Delivery>::new();
        let mut assigned = Delivery::new(DeliveryId(1), OrderId(10));
        assigned.assign_courier(UserId(5)).unwrap();
        let open = Delivery::new(DeliveryId(2), OrderId(11));
        let all = vec![assigned, open];
        mock.expect_list().return_ok(all.clone());
        mock.expect_list().return_ok(all);

        let client = DeliveryClient::new(mock.client());

        let mine = client.deliveries_for_courier(UserId(5)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id(), DeliveryId(1));

        let for_order = client.delivery_for_order(OrderId(11)).await.unwrap();
        assert_eq!(for_order.map(|d| d.id()), Some(DeliveryId(2)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_domain_errors_come_back_typed() {
        let mut mock = MockClient::<Delivery>::new();
        let refused = DeliveryError::Domain(DomainError::InvalidState("delivery_1 is DELIVERED".into()));
        mock.expect_action(DeliveryId(1))
            .return_err(FrameworkError::EntityError(Box::new(refused.clone())));
        mock.expect_get(DeliveryId(9)).return_ok(None);

        let client = DeliveryClient::new(mock.client());
        assert_eq!(client.report_incident(DeliveryId(1), "flat tyre").await, Err(refused));
        assert_eq!(
            client.find(DeliveryId(9)).await,
            Err(DeliveryError::NotFound("delivery_9".into()))
        );
        mock.verify();
    }
}
