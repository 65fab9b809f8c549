use crate::clients::{DeliveryClient, DishClient, OrderClient, RestaurantClient, UserClient};
use crate::config::SystemConfig;
use tracing::{error, info};

/// Owns the running actors of the delivery backend.
///
/// Dependencies between actors:
/// - **Users** and **Restaurants** have none (`Context = ()`).
/// - **Dishes** check their restaurant (`Context = RestaurantClient`).
/// - **Orders** check customer, restaurant and courier (`Context = (UserClient, RestaurantClient)`);
///   the order client prices carts through the dish client.
/// - **Deliveries** drive their order (`Context = OrderClient`).
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::new();
/// let customer = system.user_client.register(params).await?;
/// // ...
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    pub delivery_client: DeliveryClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Starts every actor with the default configuration. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    /// # Panics
    /// If `config.channel_buffer` is zero. Configs read through
    /// [`SystemConfig::from_yaml`] are already validated.
    pub fn with_config(config: &SystemConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(buffer);
        let (dish_actor, dish_client) = crate::dish_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer, dish_client.clone());
        let (delivery_actor, delivery_client) = crate::delivery_actor::new(buffer);

        // 2. Start them with their context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(dish_actor.run(restaurant_client.clone())),
            tokio::spawn(order_actor.run((user_client.clone(), restaurant_client.clone()))),
            tokio::spawn(delivery_actor.run(order_client.clone())),
        ];
        info!(buffer, actors = handles.len(), "System started");

        Self {
            user_client,
            restaurant_client,
            dish_client,
            order_client,
            delivery_client,
            handles,
        }
    }

    /// Drops the clients and waits for every actor to drain its queue and stop.
    ///
    /// Actors hold clients of the actors they depend on, so an actor only stops once its
    /// dependents have stopped. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.delivery_client);
        drop(self.order_client);
        drop(self.dish_client);
        drop(self.restaurant_client);
        drop(self.user_client);

        // Dependents first: the delivery actor releases the order client, and so on.
        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}
