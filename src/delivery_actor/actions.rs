//! Custom actions for the Delivery actor.
//!
//! Every action returns the delivery as it is after the change.

use crate::domain::UserId;

#[derive(Debug, Clone)]
pub enum DeliveryAction {
    /// Assigns (or reassigns) a courier. The order is dispatched to the same courier.
    AssignCourier(UserId),
    RegisterPickup,
    /// Completes the delivery and confirms the order as delivered.
    RegisterDelivery,
    /// Latest courier position, free-form coordinates.
    UpdateLocation(String),
    ReportIncident(String),
}
