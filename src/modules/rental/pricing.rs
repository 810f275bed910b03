use crate::entity::vehicle::{PriceList, RateTier};
use crate::error::Error;
use chrono::{DateTime, Utc};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// suggested price in whole CZK for renting over `[starts_at, ends_at)`
///
/// picks the cheapest fixed tier covering the whole duration, when none does
/// the daily rate is charged per started day, saturating at [`u32::MAX`]
pub fn compute_price(
    pricing: &PriceList,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<u32, Error> {
    if ends_at <= starts_at {
        return Err(Error::InvalidInterval);
    }

    let minutes = (ends_at - starts_at).num_minutes();

    let cheapest_fixed = pricing
        .iter()
        .filter(|(tier, _)| tier.minutes().map_or(false, |covered| covered >= minutes))
        .map(|(_, amount)| amount)
        .min();

    if let Some(amount) = cheapest_fixed {
        return Ok(amount);
    }

    let daily = pricing
        .rate(RateTier::Daily)
        .ok_or(Error::MissingPriceTier(RateTier::Daily))?;

    let days = (minutes + MINUTES_PER_DAY - 1) / MINUTES_PER_DAY;

    Ok(daily.saturating_mul(days as u32))
}
