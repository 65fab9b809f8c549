//! Demo run: a customer orders from a restaurant and a courier delivers it.
//!
//! Settings are read from the YAML file named by `DELIVERY_CONFIG`, if set.

use chrono::{Datelike, Local};
use delivery_actors::clients::{CartItem, PlaceOrder};
use delivery_actors::config::SystemConfig;
use delivery_actors::domain::{
    Address, Cuisine, DishCreate, Money, OpeningHours, OrderStatus, RestaurantCreate, Role,
    UserCreate,
};
use delivery_actors::framework::ActorClient;
use delivery_actors::lifecycle::{setup_tracing, DeliverySystem};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = match std::env::var("DELIVERY_CONFIG") {
        Ok(path) => SystemConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => SystemConfig::default(),
    };
    setup_tracing(&config.log_filter);

    info!(?config, "Starting delivery system");
    let system = DeliverySystem::with_config(&config);

    let span = tracing::info_span!("onboarding");
    let (customer, courier, restaurant, dishes) = async {
        let customer = system
            .user_client
            .register(UserCreate {
                name: "Ana Quispe".to_string(),
                email: "Ana.Quispe@example.com".to_string(),
                phone: Some("+51 954 000 111".to_string()),
                role: Role::customer(),
                main_address: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        let courier = system
            .user_client
            .register(UserCreate {
                name: "Luis Mamani".to_string(),
                email: "luis@example.com".to_string(),
                phone: None,
                role: Role::courier("motorcycle"),
                main_address: None,
            })
            .await
            .map_err(|e| e.to_string())?;

        let today = Local::now().weekday();
        let hours = OpeningHours::parse(&today.to_string(), "00:00", "23:59")
            .map_err(|e| e.to_string())?;
        let restaurant = system
            .restaurant_client
            .create_restaurant(RestaurantCreate {
                name: "La Nueva Palomino".to_string(),
                address: Address::new("Leoncio Prado 122", "Arequipa")
                    .map_err(|e| e.to_string())?
                    .with_district("Yanahuara"),
                phone: "054 252393".to_string(),
                cuisine: Cuisine::Peruvian,
                description: Some("Picantería arequipeña".to_string()),
                opening_hours: vec![hours],
            })
            .await
            .map_err(|e| e.to_string())?;

        let mut dishes = Vec::new();
        let menu = [
            ("Rocoto relleno", Decimal::new(3200, 2)),
            ("Chicha de jora", Decimal::new(800, 2)),
        ];
        for (name, price) in menu {
            let id = system
                .dish_client
                .create_dish(DishCreate {
                    restaurant_id: restaurant,
                    name: name.to_string(),
                    description: None,
                    price: Money::create(price, "PEN").map_err(|e| e.to_string())?,
                })
                .await
                .map_err(|e| e.to_string())?;
            dishes.push(id);
        }
        Ok::<_, String>((customer, courier, restaurant, dishes))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    let result = async {
        let order_id = system
            .order_client
            .place_order(PlaceOrder {
                customer_id: customer,
                restaurant_id: restaurant,
                delivery_address: Address::new("Calle Mercaderes 210", "Arequipa")
                    .map_err(|e| e.to_string())?,
                items: vec![
                    CartItem { dish_id: dishes[0], quantity: 2 },
                    CartItem { dish_id: dishes[1], quantity: 1 },
                ],
                special_instructions: Some("Sin ají, por favor".to_string()),
            })
            .await
            .map_err(|e| e.to_string())?;

        for status in [OrderStatus::Preparing, OrderStatus::ReadyForPickup] {
            system
                .order_client
                .transition(order_id, status)
                .await
                .map_err(|e| e.to_string())?;
        }

        let deliveries = &system.delivery_client;
        let delivery_id = deliveries
            .create_delivery(order_id)
            .await
            .map_err(|e| e.to_string())?;
        deliveries
            .assign_courier(delivery_id, courier)
            .await
            .map_err(|e| e.to_string())?;
        deliveries
            .register_pickup(delivery_id)
            .await
            .map_err(|e| e.to_string())?;
        deliveries
            .update_location(delivery_id, "-16.3988,-71.5369")
            .await
            .map_err(|e| e.to_string())?;
        deliveries
            .register_delivery(delivery_id)
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>(order_id)
    }
    .instrument(span)
    .await;

    match result {
        Ok(order_id) => {
            match system.order_client.find(order_id).await {
                Ok(order) => info!(
                    %order_id,
                    status = %order.status(),
                    total = %order.total(),
                    "Order completed"
                ),
                Err(e) => error!(error = %e, "Order lookup failed"),
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
