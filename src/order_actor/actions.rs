//! Custom actions for the Order actor.
//!
//! Every action returns the order as it is after the change.

use crate::domain::{OrderStatus, UserId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step along its lifecycle (or to `Cancelled`).
    Transition(OrderStatus),
    /// Cancellation by the customer who placed the order.
    Cancel { requested_by: UserId },
    /// Hands the order to an available courier and dispatches it.
    AssignCourier(UserId),
    /// `OutForDelivery -> Delivered`.
    ConfirmDelivery,
}
