//! # Order Client
//!
//! High-level API for the `Order` actor. Turns a cart of dish references into priced line items
//! and exposes the lifecycle operations.

use super::DishClient;
use crate::dish_actor::DishError;
use crate::domain::{
    Address, DishId, DomainError, LineItem, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate,
    RestaurantId, UserId,
};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// One entry of a customer's cart.
#[derive(Debug, Clone, Copy)]
pub struct CartItem {
    pub dish_id: DishId,
    pub quantity: u32,
}

/// A cart ready to be checked out.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub customer_id: UserId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: Address,
    pub items: Vec<CartItem>,
    pub special_instructions: Option<String>,
}

/// Client for interacting with the Order actor.
///
/// Customer and restaurant validation happens in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    dishes: DishClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, dishes: DishClient) -> Self {
        Self { inner, dishes }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    /// Prices every cart entry at the dish's current price and creates the order.
    ///
    /// # Errors
    /// `InvalidArgument` when a dish is unknown, belongs to another restaurant or is not
    /// available, or a quantity is zero. Errors from `create_order` otherwise.
    #[instrument(skip(self, cart), fields(customer_id = %cart.customer_id, restaurant_id = %cart.restaurant_id))]
    pub async fn place_order(&self, cart: PlaceOrder) -> Result<OrderId, OrderError> {
        let mut items = Vec::with_capacity(cart.items.len());
        for entry in &cart.items {
            items.push(self.price(cart.restaurant_id, entry).await?);
        }

        let id = self
            .create_order(OrderCreate {
                customer_id: Some(cart.customer_id),
                restaurant_id: Some(cart.restaurant_id),
                delivery_address: Some(cart.delivery_address),
                items,
                special_instructions: cart.special_instructions,
            })
            .await?;
        info!(%id, "Order placed");
        Ok(id)
    }

    async fn price(&self, restaurant_id: RestaurantId, entry: &CartItem) -> Result<LineItem, OrderError> {
        let dish = match self.dishes.find(entry.dish_id).await {
            Ok(dish) => dish,
            Err(DishError::NotFound(_)) => {
                return Err(DomainError::invalid_argument(format!("unknown dish {}", entry.dish_id)).into())
            }
            Err(other) => return Err(other.into()),
        };
        if dish.restaurant_id != restaurant_id {
            return Err(DomainError::invalid_argument(format!(
                "{} is not on the menu of {}",
                dish.id, restaurant_id
            ))
            .into());
        }
        if !dish.available {
            return Err(DomainError::invalid_argument(format!(
                "{} ({}) is not available",
                dish.id, dish.name
            ))
            .into());
        }
        Ok(LineItem::new(dish.id, dish.price, entry.quantity)?)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(OrderError::from)
    }

    pub async fn transition(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.act(id, OrderAction::Transition(status)).await
    }

    pub async fn cancel(&self, id: OrderId, requested_by: UserId) -> Result<Order, OrderError> {
        self.act(id, OrderAction::Cancel { requested_by }).await
    }

    pub async fn assign_courier(&self, id: OrderId, courier_id: UserId) -> Result<Order, OrderError> {
        self.act(id, OrderAction::AssignCourier(courier_id)).await
    }

    pub async fn confirm_delivery(&self, id: OrderId) -> Result<Order, OrderError> {
        self.act(id, OrderAction::ConfirmDelivery).await
    }

    #[instrument(skip(self))]
    pub async fn orders_for_customer(&self, customer_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.customer_id() == customer_id)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| o.status() == status).collect())
    }

    #[instrument(skip(self))]
    async fn act(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(OrderError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }

    fn not_found(id: &OrderId) -> Self::Error {
        OrderError::NotFound(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dish, DishCreate, Money};
    use crate::framework::mock::{create_mock_client, expect_create, MockClient};
    use rust_decimal_macros::dec;

    fn dish(id: u32, restaurant: u32, price: rust_decimal::Decimal, available: bool) -> Dish {
        let mut d = Dish::new(
            DishId(id),
            DishCreate {
                restaurant_id: RestaurantId(restaurant),
                name: format!("Plato {}", id),
                description: None,
                price: Money::create(price, "PEN").unwrap(),
            },
        )
        .unwrap();
        d.available = available;
        d
    }

    fn cart(items: Vec<CartItem>) -> PlaceOrder {
        PlaceOrder {
            customer_id: UserId(1),
            restaurant_id: RestaurantId(1),
            delivery_address: Address::new("Av. Goyeneche 330", "Arequipa").unwrap(),
            items,
            special_instructions: None,
        }
    }

    #[tokio::test]
    async fn test_place_order_prices_cart_from_dishes() {
        let mut dish_mock = MockClient::<Dish>::new();
        dish_mock
            .expect_get(DishId(1))
            .return_ok(Some(dish(1, 1, dec!(10.00), true)));
        dish_mock
            .expect_get(DishId(2))
            .return_ok(Some(dish(2, 1, dec!(5.00), true)));

        let (order_generic, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(order_generic, DishClient::new(dish_mock.client()));

        let task = tokio::spawn(async move {
            client
                .place_order(cart(vec![
                    CartItem { dish_id: DishId(1), quantity: 2 },
                    CartItem { dish_id: DishId(2), quantity: 3 },
                ]))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.items.len(), 2);
        assert_eq!(params.items[0].subtotal(), &Money::create(dec!(20), "PEN").unwrap());
        assert_eq!(params.customer_id, Some(UserId(1)));
        responder.send(Ok(OrderId(1))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderId(1)));
        dish_mock.verify();
    }

    #[tokio::test]
    async fn test_place_order_rejects_dish_from_other_restaurant() {
        let mut dish_mock = MockClient::<Dish>::new();
        dish_mock
            .expect_get(DishId(7))
            .return_ok(Some(dish(7, 2, dec!(9), true)));

        let (order_generic, _receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(order_generic, DishClient::new(dish_mock.client()));

        let result = client
            .place_order(cart(vec![CartItem { dish_id: DishId(7), quantity: 1 }]))
            .await;
        assert!(matches!(
            result,
            Err(OrderError::Domain(DomainError::InvalidArgument(_)))
        ));
    }

    #[tokio::test]
    async fn test_place_order_rejects_unavailable_and_unknown_dishes() {
        let mut dish_mock = MockClient::<Dish>::new();
        dish_mock
            .expect_get(DishId(3))
            .return_ok(Some(dish(3, 1, dec!(9), false)));
        dish_mock.expect_get(DishId(4)).return_ok(None);

        let (order_generic, _receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(order_generic, DishClient::new(dish_mock.client()));

        let unavailable = client
            .place_order(cart(vec![CartItem { dish_id: DishId(3), quantity: 1 }]))
            .await;
        assert!(matches!(
            unavailable,
            Err(OrderError::Domain(DomainError::InvalidArgument(_)))
        ));

        let unknown = client
            .place_order(cart(vec![CartItem { dish_id: DishId(4), quantity: 1 }]))
            .await;
        assert!(matches!(
            unknown,
            Err(OrderError::Domain(DomainError::InvalidArgument(_)))
        ));
        dish_mock.verify();
    }

    #[tokio::test]
    async fn test_actions_surface_domain_errors() {
        let dish_mock = MockClient::<Dish>::new();
        let mut order_mock = MockClient::<Order>::new();
        let refused = OrderError::Domain(DomainError::Unauthorized("user_2 may not cancel order_1".into()));
        order_mock
            .expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(refused.clone())));

        let client = OrderClient::new(order_mock.client(), DishClient::new(dish_mock.client()));
        let result = client.cancel(OrderId(1), UserId(2)).await;
        assert_eq!(result, Err(refused));
        order_mock.verify();
    }
}
