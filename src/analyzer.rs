use chrono::{DateTime, Utc};

use crate::models::{ActivityVerdict, TimestampError, TransactionHistory};

pub const DEFAULT_MONTHS_IDLE: u32 = 12;
// Flat approximation, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AnalyzeError {
    #[error("latest transaction has an unusable timestamp: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("latest transaction timestamp {0} is outside the representable date range")]
    OutOfRange(i64),
}

/// Classifies an account by its most recent transaction.
///
/// The first record of `history` is taken as the most recent one. An account counts as
/// dormant once `months_idle * 30` whole days or more have passed since that record.
pub fn analyze(
    history: &TransactionHistory,
    months_idle: u32,
    now: DateTime<Utc>,
) -> Result<ActivityVerdict, AnalyzeError> {
    let Some(latest) = history.latest() else {
        return Ok(ActivityVerdict::NeverActive);
    };

    let timestamp = latest.timestamp()?;
    let last_active =
        DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or(AnalyzeError::OutOfRange(timestamp))?;
    let days = whole_days_between(last_active, now);

    tracing::debug!(
        hash = latest.hash().unwrap_or("-"),
        block = latest.block_number().unwrap_or("-"),
        %last_active,
        days,
        months_idle,
        "latest transaction"
    );

    if days >= i64::from(months_idle) * DAYS_PER_MONTH {
        Ok(ActivityVerdict::Dormant {
            last_active,
            months_idle,
        })
    } else {
        Ok(ActivityVerdict::Active {
            last_active,
            days_since_active: days,
        })
    }
}

// Floors, so a partial day never counts and a future timestamp gives a negative count.
fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut seconds = later.timestamp() - earlier.timestamp();
    if later.timestamp_subsec_nanos() < earlier.timestamp_subsec_nanos() {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}
