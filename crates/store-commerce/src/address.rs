//! Address book types.

use crate::error::StoreError;
use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A postal address in a customer's address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// Address ID (None for unsaved addresses).
    pub id: Option<AddressId>,
    /// Customer-facing label (e.g., "Home", "Office").
    pub label: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Address line 1.
    pub address1: String,
    /// Address line 2 (apt, suite, etc.).
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// State/province name.
    pub province: Option<String>,
    /// Country name.
    pub country: String,
    /// Country code (e.g., "US").
    pub country_code: String,
    /// Postal/ZIP code.
    pub zip: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Whether this is the default shipping address.
    pub is_default: bool,
}

impl Address {
    /// Create a new address.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        label: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            label: label.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address1: address1.into(),
            address2: None,
            city: city.into(),
            province: None,
            country: country.into(),
            country_code: country_code.into(),
            zip: zip.into(),
            phone: None,
            is_default: false,
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as a single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            parts.push(addr2.clone());
        }
        parts.push(self.city.clone());
        if let Some(ref province) = self.province {
            parts.push(province.clone());
        }
        parts.push(self.zip.clone());
        parts.push(self.country_code.clone());
        parts.join(", ")
    }

    /// Check all required fields are present.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate required fields, naming the first missing one.
    pub fn validate(&self) -> Result<(), StoreError> {
        let missing = if self.first_name.trim().is_empty() {
            Some("first name")
        } else if self.last_name.trim().is_empty() {
            Some("last name")
        } else if self.address1.trim().is_empty() {
            Some("address line 1")
        } else if self.city.trim().is_empty() {
            Some("city")
        } else if self.country_code.trim().is_empty() {
            Some("country code")
        } else if self.zip.trim().is_empty() {
            Some("zip")
        } else {
            None
        };

        match missing {
            Some(field) => Err(StoreError::IncompleteAddress(field.to_string())),
            None => Ok(()),
        }
    }
}

/// Mark one address as the default, clearing the flag on the rest.
///
/// A no-op when `index` is out of range.
pub fn set_default_address(addresses: &mut [Address], index: usize) {
    if index >= addresses.len() {
        return;
    }
    for (i, addr) in addresses.iter_mut().enumerate() {
        addr.is_default = i == index;
    }
}
