//! Customer postal address.

use serde::{Deserialize, Serialize};

/// A required address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    Street1,
    City,
    State,
    PostalCode,
    Country,
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AddressField::Street1 => "street1",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::PostalCode => "postal code",
            AddressField::Country => "country",
        };
        f.write_str(name)
    }
}

/// A postal address. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street1: String,
    pub street2: Option<String>,
    pub street3: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Returns the first required field that is blank, in the order
    /// street1, city, state, postal code, country.
    pub fn first_blank_field(&self) -> Option<AddressField> {
        [
            (AddressField::Street1, &self.street1),
            (AddressField::City, &self.city),
            (AddressField::State, &self.state),
            (AddressField::PostalCode, &self.postal_code),
            (AddressField::Country, &self.country),
        ]
        .into_iter()
        .find(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
    }

    /// Checks that every required field is present.
    pub fn validate(&self) -> Result<(), AddressField> {
        match self.first_blank_field() {
            Some(field) => Err(field),
            None => Ok(()),
        }
    }
}

/// Empty or whitespace-only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
