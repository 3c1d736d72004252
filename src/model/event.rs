//! Sale Event
//!
//! Wire type for a single recorded transaction as delivered by the events
//! feed, with tolerant deserialization for the two field encodings the feed
//! is known to produce.

use chrono::{DateTime, Utc};

/// A single recorded sale transaction.
///
/// Events arrive as an immutable batch each poll and wholly replace the
/// previous batch. Nothing here is mutated after deserialization.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SaleEvent {
    /// Opaque unique identifier (a UUID in practice).
    pub id: String,
    /// Product label, used as the grouping key for the distribution chart.
    pub product: String,
    /// Region label, carried through for display only.
    pub region: String,
    /// Monetary value, normalized to `f64` at the wire boundary.
    #[serde(deserialize_with = "amount_from_wire")]
    pub amount: f64,
    /// When the sale was recorded.
    #[serde(deserialize_with = "timestamp_from_wire")]
    pub timestamp: DateTime<Utc>,
}

/// Accept an amount as either a JSON number or its decimal-string form.
///
/// A string that does not parse as a decimal becomes `NaN` and flows through
/// the transformations unfiltered, so a malformed feed shows up as `NaN`
/// totals rather than silently dropped revenue.
fn amount_from_wire<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    use serde::Deserialize;
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => n,
        RawAmount::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
    })
}

/// Accept a timestamp as either an RFC 3339 string (what the feed emits) or
/// an epoch-milliseconds number.
fn timestamp_from_wire<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    use serde::Deserialize;
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| serde::de::Error::custom("timestamp out of range")),
        RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_amount() {
        let event: SaleEvent = serde_json::from_str(
            r#"{
                "id": "e1",
                "product": "Laptop",
                "region": "North",
                "amount": 1250.75,
                "timestamp": "2025-03-01T12:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(event.amount, 1250.75);
        assert_eq!(event.product, "Laptop");
    }

    #[test]
    fn test_deserialize_string_amount() {
        let event: SaleEvent = serde_json::from_str(
            r#"{
                "id": "e2",
                "product": "Monitor",
                "region": "South",
                "amount": "10.00",
                "timestamp": "2025-03-01T12:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(event.amount, 10.0);
    }

    #[test]
    fn test_unparseable_amount_becomes_nan() {
        let event: SaleEvent = serde_json::from_str(
            r#"{
                "id": "e3",
                "product": "Keyboard",
                "region": "East",
                "amount": "not-a-number",
                "timestamp": "2025-03-01T12:30:00Z"
            }"#,
        )
        .unwrap();

        assert!(event.amount.is_nan());
    }

    #[test]
    fn test_timestamp_from_rfc3339() {
        let event: SaleEvent = serde_json::from_str(
            r#"{
                "id": "e4",
                "product": "Laptop",
                "region": "West",
                "amount": 5,
                "timestamp": "2025-03-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(event.timestamp.to_rfc3339(), "2025-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_from_epoch_millis() {
        let event: SaleEvent = serde_json::from_str(
            r#"{
                "id": "e5",
                "product": "Laptop",
                "region": "West",
                "amount": 5,
                "timestamp": 1740787200000
            }"#,
        )
        .unwrap();

        assert_eq!(event.timestamp.timestamp_millis(), 1740787200000);
    }

    #[test]
    fn test_deserialize_batch() {
        let events: Vec<SaleEvent> = serde_json::from_str(
            r#"[
                {"id": "a", "product": "Laptop", "region": "North",
                 "amount": 100, "timestamp": "2025-03-01T10:00:00Z"},
                {"id": "b", "product": "Monitor", "region": "South",
                 "amount": "42.50", "timestamp": 1740787200000}
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].amount, 100.0);
        assert_eq!(events[1].amount, 42.5);
    }
}
