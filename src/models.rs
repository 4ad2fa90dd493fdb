use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// One record from the explorer's `txlist` response. Only `timeStamp` is interpreted,
/// everything else is carried as the explorer sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord(Value);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimestampError {
    #[error("transaction record has no timeStamp field")]
    Missing,
    #[error("transaction timeStamp {0} is not an integer")]
    NotAnInteger(String),
}

impl TransactionRecord {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Seconds since the unix epoch. Etherscan sends this as a decimal string, other
    /// explorers send a number; both are accepted.
    pub fn timestamp(&self) -> Result<i64, TimestampError> {
        let value = self.0.get("timeStamp").ok_or(TimestampError::Missing)?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .ok_or_else(|| TimestampError::NotAnInteger(n.to_string())),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| TimestampError::NotAnInteger(format!("{s:?}"))),
            other => Err(TimestampError::NotAnInteger(other.to_string())),
        }
    }

    pub fn hash(&self) -> Option<&str> {
        self.0.get("hash").and_then(Value::as_str)
    }

    pub fn block_number(&self) -> Option<&str> {
        self.0.get("blockNumber").and_then(Value::as_str)
    }
}

/// Transactions of one account, newest first as requested from the explorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionHistory {
    records: Vec<TransactionRecord>,
}

impl TransactionHistory {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// The first record. Ordering is whatever the fetcher produced, nothing is re-sorted.
    pub fn latest(&self) -> Option<&TransactionRecord> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }
}

impl From<Vec<Value>> for TransactionHistory {
    fn from(raw: Vec<Value>) -> Self {
        Self::new(raw.into_iter().map(TransactionRecord::new).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityVerdict {
    NeverActive,
    Dormant {
        last_active: DateTime<Utc>,
        months_idle: u32,
    },
    Active {
        last_active: DateTime<Utc>,
        days_since_active: i64,
    },
}

impl ActivityVerdict {
    pub fn is_dormant(&self) -> bool {
        matches!(self, ActivityVerdict::Dormant { .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivityVerdict::Active { .. })
    }
}

impl fmt::Display for ActivityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityVerdict::NeverActive => {
                write!(f, "Wallet has never made any transactions, it may be abandoned.")
            }
            ActivityVerdict::Dormant {
                last_active,
                months_idle,
            } => write!(
                f,
                "🔒 Wallet has been inactive for more than {} months (last activity: {})",
                months_idle,
                last_active.format("%Y-%m-%d")
            ),
            ActivityVerdict::Active {
                last_active,
                days_since_active,
            } => write!(
                f,
                "✅ Wallet is active. Last activity: {} ({} days ago)",
                last_active.format("%Y-%m-%d"),
                days_since_active
            ),
        }
    }
}
