//! # Validation Module
//!
//! Input validation for admin catalog writes and the booking form.
//!
//! The booking form performs presence checks only: every field of the
//! category's form must be non-blank. No format or cross-field validation is
//! applied (phone numbers and emails are taken as typed).
//!
//! ## Usage
//! ```rust
//! use mjg_core::money::Money;
//! use mjg_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Schweppes Chapman").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! assert!(validate_price(Money::from_units(1500)).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CustomerDetails;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name: non-blank, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a catalog price: must be strictly positive.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive { field: "price" });
    }
    Ok(())
}

// =============================================================================
// Booking Form Validators
// =============================================================================

/// Validates customer details: every field of the variant must be non-blank.
///
/// Returns the first missing field, in form order, so the caller can surface
/// a single actionable message.
pub fn validate_customer(details: &CustomerDetails) -> ValidationResult<()> {
    match details {
        CustomerDetails::Delivery {
            name,
            phone,
            address,
        } => {
            require("name", name)?;
            require("phone", phone)?;
            require("address", address)?;
        }
        CustomerDetails::Charter {
            organization,
            phone,
            email,
            address,
            from_destination,
            to_destination,
        } => {
            require("organization", organization)?;
            require("phone", phone)?;
            require("email", email)?;
            require("address", address)?;
            require("fromDestination", from_destination)?;
            require("toDestination", to_destination)?;
        }
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(name: &str, phone: &str, address: &str) -> CustomerDetails {
        CustomerDetails::Delivery {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_product_name_rules() {
        assert!(validate_product_name("Fanta Orange 50cl").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(validate_price(Money::from_units(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_units(-5)).is_err());
    }

    #[test]
    fn test_delivery_details_presence() {
        assert!(validate_customer(&delivery("Ada", "0800000000", "12 Lagos Rd")).is_ok());

        let err = validate_customer(&delivery("", "0800000000", "12 Lagos Rd")).unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        // Whitespace-only counts as missing.
        let err = validate_customer(&delivery("Ada", "  ", "12 Lagos Rd")).unwrap_err();
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn test_charter_details_presence() {
        let mut details = CustomerDetails::Charter {
            organization: "Acme Logistics".to_string(),
            phone: "08012345678".to_string(),
            email: "ops@acme.test".to_string(),
            address: "14 Marina Rd".to_string(),
            from_destination: "Lagos".to_string(),
            to_destination: "Ibadan".to_string(),
        };
        assert!(validate_customer(&details).is_ok());

        if let CustomerDetails::Charter { to_destination, .. } = &mut details {
            to_destination.clear();
        }
        let err = validate_customer(&details).unwrap_err();
        assert_eq!(err.to_string(), "toDestination is required");
    }
}
