//! # Brand Profiles
//!
//! The storefront ships as two near-identical brands. Everything that
//! differs between them (display name, currency, bank-transfer block,
//! receipt copy, settlement pacing) lives here as data, so there is exactly
//! one code path parameterized by a `BrandProfile`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::money::Money;

// =============================================================================
// Bank Transfer Details
// =============================================================================

/// The manual bank-transfer block shown at the payment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferDetails {
    pub bank_name: String,
    pub account_number: String,
    pub sort_code: String,
}

// =============================================================================
// Settlement Timeline
// =============================================================================

/// Durations of the two simulated settlement phases.
///
/// The first brand shows a ~1.5 s "confirming" pause followed by a ~2 s
/// "processing" pause; the second collapses both into a single settle phase
/// (`confirm` of zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementTimeline {
    /// Pause while the transfer is "confirmed".
    pub confirm: Duration,
    /// Pause while the booking is "secured".
    pub settle: Duration,
}

// =============================================================================
// Brand Profile
// =============================================================================

/// Everything brand-specific, in one read-only bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProfile {
    /// Brand name (receipt header, copy).
    pub name: String,

    /// Home-screen tagline.
    pub tagline: String,

    /// Website printed in the receipt footer.
    pub website: String,

    /// Currency symbol prefixed to formatted amounts.
    pub currency_symbol: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// `chrono` format string for short dates on receipts.
    pub date_format: String,

    /// Manual transfer details shown at the payment step.
    pub bank: BankTransferDetails,

    /// Receipt footer thanks line.
    pub receipt_thanks: String,

    /// Settlement note while the transfer is confirmed.
    pub confirming_note: String,

    /// Settlement note while the booking is secured.
    pub processing_note: String,

    /// Pacing of the simulated settlement.
    pub timeline: SettlementTimeline,
}

impl BrandProfile {
    /// The MJGGLOBAL brand: naira storefront, two-phase settlement.
    pub fn mjgglobal() -> Self {
        BrandProfile {
            name: "MJGGLOBAL".to_string(),
            tagline: "Premium essentials for your journey.".to_string(),
            website: "mjgglobal.com".to_string(),
            currency_symbol: "₦".to_string(),
            currency_code: "NGN".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            bank: BankTransferDetails {
                bank_name: "MJG Global Bank".to_string(),
                account_number: "0011223344".to_string(),
                sort_code: "12-34-56".to_string(),
            },
            receipt_thanks: "Thank you for choosing MJGGLOBAL.".to_string(),
            confirming_note: "Confirming your transfer...".to_string(),
            processing_note: "Securing your booking...".to_string(),
            timeline: SettlementTimeline {
                confirm: Duration::from_millis(1500),
                settle: Duration::from_millis(2000),
            },
        }
    }

    /// The Zest & Glide brand: dollar storefront, single settle phase.
    pub fn zest_glide() -> Self {
        BrandProfile {
            name: "Zest & Glide".to_string(),
            tagline: "Sip well. Travel better.".to_string(),
            website: "zestandglide.com".to_string(),
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            bank: BankTransferDetails {
                bank_name: "Zest Commercial Bank".to_string(),
                account_number: "5566778899".to_string(),
                sort_code: "65-43-21".to_string(),
            },
            receipt_thanks: "Thank you for choosing Zest & Glide.".to_string(),
            confirming_note: "Confirming your transfer...".to_string(),
            processing_note: "Finalizing your booking...".to_string(),
            timeline: SettlementTimeline {
                confirm: Duration::ZERO,
                settle: Duration::from_millis(1500),
            },
        }
    }

    /// Looks a profile up by its configuration key.
    pub fn by_key(key: &str) -> Option<Self> {
        match key {
            "mjgglobal" => Some(Self::mjgglobal()),
            "zest-glide" => Some(Self::zest_glide()),
            _ => None,
        }
    }

    /// Formats an amount with the brand's currency symbol and grouped
    /// thousands, e.g. `₦1,500`.
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{}{}", self.currency_symbol, amount.grouped())
    }

    /// Formats a short date per the brand's locale convention.
    pub fn format_date(&self, date: chrono::DateTime<chrono::Utc>) -> String {
        date.format(&self.date_format).to_string()
    }

    /// The transfer reference the customer quotes: `<PRODUCT-ID>-PAY`.
    pub fn payment_reference(&self, product_id: &str) -> String {
        format!("{}-PAY", product_id.to_uppercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_amount_formatting() {
        let brand = BrandProfile::mjgglobal();
        assert_eq!(brand.format_amount(Money::from_units(1500)), "₦1,500");
        assert_eq!(brand.format_amount(Money::from_units(250000)), "₦250,000");

        let brand = BrandProfile::zest_glide();
        assert_eq!(brand.format_amount(Money::from_units(1500)), "$1,500");
    }

    #[test]
    fn test_date_formatting_differs_per_brand() {
        let date = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(BrandProfile::mjgglobal().format_date(date), "09/03/2024");
        assert_eq!(BrandProfile::zest_glide().format_date(date), "03/09/2024");
    }

    #[test]
    fn test_payment_reference() {
        let brand = BrandProfile::mjgglobal();
        assert_eq!(brand.payment_reference("abc123xyz"), "ABC123XYZ-PAY");
    }

    #[test]
    fn test_lookup_by_key() {
        assert_eq!(
            BrandProfile::by_key("mjgglobal").map(|b| b.name),
            Some("MJGGLOBAL".to_string())
        );
        assert_eq!(
            BrandProfile::by_key("zest-glide").map(|b| b.currency_code),
            Some("USD".to_string())
        );
        assert!(BrandProfile::by_key("acme").is_none());
    }

    #[test]
    fn test_zest_glide_collapses_confirm_phase() {
        assert_eq!(BrandProfile::zest_glide().timeline.confirm, Duration::ZERO);
        assert!(BrandProfile::mjgglobal().timeline.confirm > Duration::ZERO);
    }
}
