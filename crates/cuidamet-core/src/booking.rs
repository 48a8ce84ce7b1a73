//! Booking details and price quotes.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::{Provider, ProviderId};

/// Bundled hours sold as a prepaid pack.
pub const HOUR_PACK_HOURS: f64 = 10.0;
/// Discount applied to the hour pack, as a fraction of the subtotal.
pub const HOUR_PACK_DISCOUNT: f64 = 0.10;
/// Flat price of the optional cancellation/damage insurance, in EUR.
pub const INSURANCE_COST: f64 = 3.50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("la hora de fin debe ser posterior a la de inicio")]
    EmptyTimeRange,
}

/// The parameters and cost breakdown of a reservation in progress.
///
/// `date`/`start_time`/`end_time` are set for a concrete slot and absent
/// for an hour-pack booking. Created when a booking flow starts; cleared
/// at flow completion or cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub provider_id: ProviderId,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub hours: f64,
    pub total_cost: f64,
    pub discount_amount: f64,
    pub insurance_cost: f64,
}

impl BookingDetails {
    /// Service subtotal before insurance and discount, reconstructed the
    /// way the payment breakdown displays it.
    pub fn subtotal(&self) -> f64 {
        self.total_cost - self.insurance_cost + self.discount_amount
    }
}

/// Quote a concrete slot with the provider's hourly rate.
pub fn quote_slot(
    provider: &Provider,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    with_insurance: bool,
) -> Result<BookingDetails, QuoteError> {
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return Err(QuoteError::EmptyTimeRange);
    }
    let hours = minutes as f64 / 60.0;
    let subtotal = provider.hourly_rate * hours;
    let insurance_cost = if with_insurance { INSURANCE_COST } else { 0.0 };
    Ok(BookingDetails {
        provider_id: provider.id,
        date: Some(date),
        start_time: Some(start),
        end_time: Some(end),
        hours,
        total_cost: subtotal + insurance_cost,
        discount_amount: 0.0,
        insurance_cost,
    })
}

/// Quote a prepaid hour pack: no fixed date, discounted subtotal.
pub fn quote_hour_pack(provider: &Provider, with_insurance: bool) -> BookingDetails {
    let subtotal = provider.hourly_rate * HOUR_PACK_HOURS;
    let discount_amount = subtotal * HOUR_PACK_DISCOUNT;
    let insurance_cost = if with_insurance { INSURANCE_COST } else { 0.0 };
    BookingDetails {
        provider_id: provider.id,
        date: None,
        start_time: None,
        end_time: None,
        hours: HOUR_PACK_HOURS,
        total_cost: subtotal - discount_amount + insurance_cost,
        discount_amount,
        insurance_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn provider() -> Provider {
        let mut provider = mock_data::mock_providers()[0].clone();
        provider.hourly_rate = 12.0;
        provider
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_slot_quote_charges_rate_times_hours() {
        let quote =
            quote_slot(&provider(), date(), time(16, 0), time(19, 30), false).unwrap();
        assert_eq!(quote.hours, 3.5);
        assert_eq!(quote.total_cost, 42.0);
        assert_eq!(quote.discount_amount, 0.0);
        assert_eq!(quote.insurance_cost, 0.0);
    }

    #[test]
    fn test_insurance_is_added_on_top() {
        let quote = quote_slot(&provider(), date(), time(9, 0), time(11, 0), true).unwrap();
        assert_eq!(quote.insurance_cost, INSURANCE_COST);
        assert_eq!(quote.total_cost, 24.0 + INSURANCE_COST);
        assert_eq!(quote.subtotal(), 24.0);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let err = quote_slot(&provider(), date(), time(12, 0), time(12, 0), false);
        assert_eq!(err, Err(QuoteError::EmptyTimeRange));
        let err = quote_slot(&provider(), date(), time(14, 0), time(12, 0), false);
        assert_eq!(err, Err(QuoteError::EmptyTimeRange));
    }

    #[test]
    fn test_hour_pack_discounts_subtotal() {
        let quote = quote_hour_pack(&provider(), false);
        assert_eq!(quote.date, None);
        assert_eq!(quote.hours, HOUR_PACK_HOURS);
        assert_eq!(quote.discount_amount, 12.0);
        assert_eq!(quote.total_cost, 108.0);
        assert_eq!(quote.subtotal(), 120.0);
    }
}
