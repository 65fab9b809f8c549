//! Order lifecycle, line items and totals.
//!
//! ```text
//! Pending -> Preparing -> ReadyForPickup -> OutForDelivery -> Delivered
//!    \___________\______________\________________\__________> Cancelled
//! ```
//!
//! `Delivered` and `Cancelled` are terminal. Items are fixed once the order exists, so the
//! total is computed at creation and stays equal to the sum of the subtotals.

use super::{Address, DishId, DomainError, Money, OrderId, RestaurantId, UserId, DEFAULT_CURRENCY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    ReadyForPickup,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::ReadyForPickup),
            OrderStatus::ReadyForPickup => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// A single forward step, or a jump to `Cancelled` from any non-terminal status.
    pub fn can_transition_to(self, target: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == OrderStatus::Cancelled || self.next() == Some(target)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// Largest quantity of one dish in a single line.
pub const MAX_QUANTITY: u32 = 9999;

/// One dish in an order, priced at the moment it was added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    dish_id: DishId,
    unit_price: Money,
    quantity: u32,
    subtotal: Money,
}

impl LineItem {
    pub fn new(dish_id: DishId, unit_price: Money, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument(format!(
                "quantity for {} must be greater than zero",
                dish_id
            )));
        }
        if quantity > MAX_QUANTITY {
            return Err(DomainError::invalid_argument(format!(
                "quantity for {} exceeds {}, got {}",
                dish_id, MAX_QUANTITY, quantity
            )));
        }
        let subtotal = unit_price.multiply(quantity)?;
        Ok(Self {
            dish_id,
            unit_price,
            quantity,
            subtotal,
        })
    }

    /// Returns a replacement line with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Result<Self, DomainError> {
        Self::new(self.dish_id, self.unit_price.clone(), quantity)
    }

    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> &Money {
        &self.subtotal
    }
}

/// Sums subtotals in the currency of the first item, or zero in the default currency.
pub fn total_of(items: &[LineItem]) -> Result<Money, DomainError> {
    let Some(first) = items.first() else {
        return Money::zero(DEFAULT_CURRENCY);
    };
    let zero = Money::zero(first.subtotal.currency())?;
    items
        .iter()
        .try_fold(zero, |total, item| total.add(&item.subtotal))
}

/// Payload for creating an order.
///
/// Customer, restaurant and address are optional here so that a missing one is reported as
/// `InvalidArgument` instead of being impossible to express.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: Option<UserId>,
    pub restaurant_id: Option<RestaurantId>,
    pub delivery_address: Option<Address>,
    pub items: Vec<LineItem>,
    pub special_instructions: Option<String>,
}

/// Changes a customer may still make while the kitchen has not started.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub delivery_address: Option<Address>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: UserId,
    restaurant_id: RestaurantId,
    courier_id: Option<UserId>,
    status: OrderStatus,
    items: Vec<LineItem>,
    total: Money,
    delivery_address: Address,
    special_instructions: Option<String>,
    created_at: DateTime<Utc>,
    delivered_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Builds a `Pending` order and computes its total.
    ///
    /// # Errors
    /// `InvalidArgument` if items are empty or customer, restaurant or address is missing;
    /// `CurrencyMismatch` if the items are priced in different currencies.
    pub fn create(id: OrderId, params: OrderCreate) -> Result<Self, DomainError> {
        let customer_id = params
            .customer_id
            .ok_or_else(|| DomainError::invalid_argument("customer is required"))?;
        let restaurant_id = params
            .restaurant_id
            .ok_or_else(|| DomainError::invalid_argument("restaurant is required"))?;
        let delivery_address = params
            .delivery_address
            .ok_or_else(|| DomainError::invalid_argument("delivery address is required"))?;
        delivery_address.validate()?;
        if params.items.is_empty() {
            return Err(DomainError::invalid_argument(
                "an order needs at least one item",
            ));
        }
        let total = total_of(&params.items)?;

        Ok(Self {
            id,
            customer_id,
            restaurant_id,
            courier_id: None,
            status: OrderStatus::Pending,
            items: params.items,
            total,
            delivery_address,
            special_instructions: params.special_instructions,
            created_at: Utc::now(),
            delivered_at: None,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> UserId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn courier_id(&self) -> Option<UserId> {
        self.courier_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> &Money {
        &self.total
    }

    pub fn delivery_address(&self) -> &Address {
        &self.delivery_address
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    pub fn recompute_total(&self) -> Result<Money, DomainError> {
        total_of(&self.items)
    }

    /// Moves along the status table. Does not check who asks; customer cancellations go through
    /// [`Order::cancel`].
    pub fn transition_to(&mut self, target: OrderStatus) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::invalid_state(format!(
                "{} is {} and can no longer change",
                self.id, self.status
            )));
        }
        if !self.status.can_transition_to(target) {
            return Err(DomainError::invalid_state(format!(
                "{} cannot move from {} to {}",
                self.id, self.status, target
            )));
        }
        self.status = target;
        if target == OrderStatus::Delivered {
            self.delivered_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Cancels on behalf of `requested_by`, who must be the customer that placed the order.
    pub fn cancel(&mut self, requested_by: UserId) -> Result<(), DomainError> {
        if requested_by != self.customer_id {
            return Err(DomainError::Unauthorized(format!(
                "{} may not cancel {}",
                requested_by, self.id
            )));
        }
        if self.status.is_terminal() {
            return Err(DomainError::invalid_state(format!(
                "{} is already {}",
                self.id, self.status
            )));
        }
        self.status = OrderStatus::Cancelled;
        Ok(())
    }

    /// Hands the order to a courier and marks it out for delivery.
    ///
    /// Assignment and dispatch are one step: an order in any non-terminal status goes straight
    /// to `OutForDelivery`. Reassigning an order that is already out keeps its status.
    pub fn assign_courier(&mut self, courier_id: UserId) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::invalid_state(format!(
                "cannot assign a courier to {} in status {}",
                self.id, self.status
            )));
        }
        self.courier_id = Some(courier_id);
        self.status = OrderStatus::OutForDelivery;
        Ok(())
    }

    pub fn confirm_delivery(&mut self) -> Result<(), DomainError> {
        self.transition_to(OrderStatus::Delivered)
    }

    pub fn update(&mut self, update: OrderUpdate) -> Result<(), DomainError> {
        if self.status != OrderStatus::Pending {
            return Err(DomainError::invalid_state(format!(
                "{} can only be edited while {}, it is {}",
                self.id,
                OrderStatus::Pending,
                self.status
            )));
        }
        if let Some(address) = update.delivery_address {
            address.validate()?;
            self.delivery_address = address;
        }
        if let Some(instructions) = update.special_instructions {
            self.special_instructions = Some(instructions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pen(amount: rust_decimal::Decimal) -> Money {
        Money::create(amount, "PEN").unwrap()
    }

    fn address() -> Address {
        Address::new("Av. Ejercito 710", "Arequipa").unwrap()
    }

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new(DishId(1), pen(dec!(10.00)), 2).unwrap(),
            LineItem::new(DishId(2), pen(dec!(5.00)), 3).unwrap(),
        ]
    }

    fn params(items: Vec<LineItem>) -> OrderCreate {
        OrderCreate {
            customer_id: Some(UserId(1)),
            restaurant_id: Some(RestaurantId(1)),
            delivery_address: Some(address()),
            items,
            special_instructions: Some("sin cebolla".into()),
        }
    }

    fn sample_order() -> Order {
        Order::create(OrderId(1), params(sample_items())).unwrap()
    }

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem::new(DishId(4), pen(dec!(12.50)), 4).unwrap();
        assert_eq!(item.subtotal(), &pen(dec!(50)));
        let fewer = item.with_quantity(1).unwrap();
        assert_eq!(fewer.subtotal(), &pen(dec!(12.50)));
    }

    #[test]
    fn test_line_item_rejects_zero_quantity() {
        let result = LineItem::new(DishId(1), pen(dec!(1)), 0);
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_line_item_bounds_quantity_and_amount() {
        let too_many = LineItem::new(DishId(1), pen(dec!(1)), MAX_QUANTITY + 1);
        assert!(matches!(too_many, Err(DomainError::InvalidArgument(_))));
        assert!(LineItem::new(DishId(1), pen(dec!(1)), MAX_QUANTITY).is_ok());

        let huge = pen(rust_decimal::Decimal::MAX);
        let overflow = LineItem::new(DishId(1), huge.clone(), 2);
        assert!(matches!(overflow, Err(DomainError::InvalidArgument(_))));

        let line = LineItem::new(DishId(1), huge, 1).unwrap();
        let total = total_of(&[line.clone(), line]);
        assert!(matches!(total, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_create_computes_total_and_starts_pending() {
        let order = sample_order();
        assert_eq!(order.total(), &pen(dec!(35.00)));
        assert_eq!(order.recompute_total().unwrap(), *order.total());
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.courier_id().is_none());
        assert!(order.delivered_at().is_none());
    }

    #[test]
    fn test_create_requires_items_and_references() {
        let empty = Order::create(OrderId(1), params(vec![]));
        assert!(matches!(empty, Err(DomainError::InvalidArgument(_))));

        let mut missing_customer = params(sample_items());
        missing_customer.customer_id = None;
        assert!(matches!(
            Order::create(OrderId(1), missing_customer),
            Err(DomainError::InvalidArgument(_))
        ));

        let mut missing_restaurant = params(sample_items());
        missing_restaurant.restaurant_id = None;
        assert!(Order::create(OrderId(1), missing_restaurant).is_err());

        let mut missing_address = params(sample_items());
        missing_address.delivery_address = None;
        assert!(Order::create(OrderId(1), missing_address).is_err());
    }

    #[test]
    fn test_mixed_currency_items_fail() {
        let items = vec![
            LineItem::new(DishId(1), pen(dec!(10)), 1).unwrap(),
            LineItem::new(DishId(2), Money::create(dec!(3), "USD").unwrap(), 1).unwrap(),
        ];
        let result = Order::create(OrderId(1), params(items));
        assert_eq!(
            result.unwrap_err(),
            DomainError::CurrencyMismatch {
                expected: "PEN".into(),
                found: "USD".into()
            }
        );
    }

    #[test]
    fn test_total_of_empty_is_default_currency_zero() {
        let total = total_of(&[]).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), DEFAULT_CURRENCY);
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut order = sample_order();
        for status in [
            OrderStatus::Preparing,
            OrderStatus::ReadyForPickup,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            order.transition_to(status).unwrap();
            assert_eq!(order.status(), status);
        }
        assert!(order.delivered_at().is_some());

        let result = order.transition_to(OrderStatus::Preparing);
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_skipping_steps_is_rejected() {
        let mut order = sample_order();
        let result = order.transition_to(OrderStatus::Delivered);
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
        assert!(order.transition_to(OrderStatus::Pending).is_err());
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Cancelled));
        assert!(ReadyForPickup.can_transition_to(Cancelled));
        assert!(OutForDelivery.can_transition_to(Cancelled));
        assert!(!ReadyForPickup.can_transition_to(Preparing));
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn test_cancel_checks_owner_then_state() {
        let mut order = sample_order();
        order.transition_to(OrderStatus::Preparing).unwrap();
        order.transition_to(OrderStatus::ReadyForPickup).unwrap();
        order.transition_to(OrderStatus::OutForDelivery).unwrap();

        let result = order.cancel(UserId(99));
        assert!(matches!(result, Err(DomainError::Unauthorized(_))));
        assert_eq!(order.status(), OrderStatus::OutForDelivery);

        order.cancel(UserId(1)).unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);

        let again = order.cancel(UserId(1));
        assert!(matches!(again, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_transition_to_cancelled_is_not_an_ownership_check() {
        // The plain transition is the restaurant/operator path; only `cancel` checks the owner.
        let mut order = sample_order();
        order.transition_to(OrderStatus::Preparing).unwrap();
        order.transition_to(OrderStatus::Cancelled).unwrap();
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(matches!(
            order.transition_to(OrderStatus::Cancelled),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn test_cancel_delivered_order_fails() {
        let mut order = sample_order();
        order.assign_courier(UserId(5)).unwrap();
        order.confirm_delivery().unwrap();
        let result = order.cancel(UserId(1));
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_assign_courier_dispatches() {
        let mut order = sample_order();
        order.assign_courier(UserId(5)).unwrap();
        assert_eq!(order.courier_id(), Some(UserId(5)));
        assert_eq!(order.status(), OrderStatus::OutForDelivery);

        order.assign_courier(UserId(6)).unwrap();
        assert_eq!(order.courier_id(), Some(UserId(6)));
        assert_eq!(order.status(), OrderStatus::OutForDelivery);

        order.cancel(UserId(1)).unwrap();
        assert!(matches!(
            order.assign_courier(UserId(5)),
            Err(DomainError::InvalidState(_))
        ));
    }

    #[test]
    fn test_update_only_while_pending() {
        let mut order = sample_order();
        order
            .update(OrderUpdate {
                delivery_address: None,
                special_instructions: Some("tocar el timbre".into()),
            })
            .unwrap();
        assert_eq!(order.special_instructions(), Some("tocar el timbre"));

        order.transition_to(OrderStatus::Preparing).unwrap();
        let result = order.update(OrderUpdate::default());
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }
}
