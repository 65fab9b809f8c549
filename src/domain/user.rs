use super::{Address, DomainError, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a user does on the platform, with the data only that role carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    Customer {
        dietary_preferences: Option<String>,
    },
    Courier {
        vehicle_type: String,
        available: bool,
    },
    Admin {
        department: String,
    },
}

impl Role {
    pub fn customer() -> Self {
        Role::Customer {
            dietary_preferences: None,
        }
    }

    /// A courier starts out available for deliveries.
    pub fn courier(vehicle_type: impl Into<String>) -> Self {
        Role::Courier {
            vehicle_type: vehicle_type.into(),
            available: true,
        }
    }

    pub fn admin(department: impl Into<String>) -> Self {
        Role::Admin {
            department: department.into(),
        }
    }
}

/// A registered customer, courier or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub active: bool,
    pub main_address: Option<Address>,
    pub registered_at: DateTime<Utc>,
}

/// Payload for registering a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub main_address: Option<Address>,
}

/// Contact details a user may change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub main_address: Option<Address>,
}

impl User {
    pub fn new(id: UserId, params: UserCreate) -> Result<Self, DomainError> {
        validate_name(&params.name)?;
        let email = normalize_email(&params.email)?;
        if let Some(address) = &params.main_address {
            address.validate()?;
        }
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            email,
            phone: params.phone,
            role: params.role,
            active: true,
            main_address: params.main_address,
            registered_at: Utc::now(),
        })
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, Role::Customer { .. })
    }

    /// An active courier that is currently taking deliveries.
    pub fn is_available_courier(&self) -> bool {
        self.active && matches!(self.role, Role::Courier { available: true, .. })
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn update_contact(&mut self, update: UserUpdate) -> Result<(), DomainError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        let email = update.email.as_deref().map(normalize_email).transpose()?;
        if let Some(address) = &update.main_address {
            address.validate()?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.main_address {
            self.main_address = Some(address);
        }
        Ok(())
    }

    pub fn set_availability(&mut self, available: bool) -> Result<(), DomainError> {
        match &mut self.role {
            Role::Courier { available: current, .. } => {
                *current = available;
                Ok(())
            }
            _ => Err(DomainError::invalid_argument(format!(
                "{} is not a courier",
                self.id
            ))),
        }
    }

    pub fn set_dietary_preferences(&mut self, preferences: String) -> Result<(), DomainError> {
        match &mut self.role {
            Role::Customer {
                dietary_preferences,
            } => {
                *dietary_preferences = Some(preferences);
                Ok(())
            }
            _ => Err(DomainError::invalid_argument(format!(
                "{} is not a customer",
                self.id
            ))),
        }
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_argument("name must not be blank"));
    }
    Ok(())
}

/// Trims and lower-cases an email after checking it has an `@`.
pub fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    if !email.contains('@') {
        return Err(DomainError::invalid_argument(format!(
            "invalid email: {}",
            email
        )));
    }
    Ok(email.to_lowercase())
}
