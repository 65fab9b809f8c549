use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Postal address embedded by value in users, restaurants and orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub district: Option<String>,
    /// Free-text hint for the courier ("blue door, second floor").
    pub reference: Option<String>,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            city: city.into(),
            district: None,
            reference: None,
        };
        address.validate()?;
        Ok(address)
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Checks required fields. Addresses can arrive through deserialization, so owners call this
    /// again before storing one.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.street.trim().is_empty() {
            return Err(DomainError::invalid_argument("street must not be blank"));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::invalid_argument("city must not be blank"));
        }
        Ok(())
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.street)?;
        if let Some(district) = &self.district {
            write!(f, ", {}", district)?;
        }
        write!(f, ", {}", self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_street_and_city() {
        assert!(Address::new("", "Arequipa").is_err());
        assert!(Address::new("Calle Mercaderes 120", " ").is_err());
    }

    #[test]
    fn test_display() {
        let address = Address::new("Calle Mercaderes 120", "Arequipa")
            .unwrap()
            .with_district("Cercado")
            .with_reference("frente al parque");
        assert_eq!(address.to_string(), "Calle Mercaderes 120, Cercado, Arequipa");
    }
}
