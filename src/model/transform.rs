//! Chart Transformers
//!
//! Pure functions mapping a raw event batch to the view models the dashboard
//! renders. All of them are total over any input, including the empty batch:
//! the chart-facing transformers substitute a single sentinel element so the
//! chart components never receive an empty dataset.

use std::collections::{HashMap, HashSet};

use chrono::Local;

use super::event::SaleEvent;

/// Label used for the sentinel element of an empty series.
pub const NO_DATA_LABEL: &str = "No Data";

/// One point of the sales-over-time line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartPoint {
    /// Time-of-day label derived from the event timestamp.
    pub time: String,
    pub sales: f64,
}

/// One slice of the sales-by-product pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartSlice {
    pub name: String,
    pub value: f64,
}

/// Transform each event into a separate line-chart point.
///
/// Output order strictly follows input order; there is no sorting and no
/// deduplication. An empty batch yields the single sentinel point.
pub fn to_line_series(events: &[SaleEvent]) -> Vec<LineChartPoint> {
    if events.is_empty() {
        return vec![LineChartPoint {
            time: NO_DATA_LABEL.to_string(),
            sales: 0.0,
        }];
    }

    events
        .iter()
        .map(|event| LineChartPoint {
            time: event
                .timestamp
                .with_timezone(&Local)
                .format("%H:%M:%S")
                .to_string(),
            sales: event.amount,
        })
        .collect()
}

/// Group events by product, summing amounts per group.
///
/// Slices come out in first-occurrence order of each product. An empty batch
/// yields the single sentinel slice, as does a grouping that somehow produces
/// no slices.
pub fn to_product_distribution(events: &[SaleEvent]) -> Vec<PieChartSlice> {
    if events.is_empty() {
        return vec![sentinel_slice()];
    }

    let mut slices: Vec<PieChartSlice> = Vec::new();
    let mut slot_by_product: HashMap<String, usize> = HashMap::new();

    for event in events {
        match slot_by_product.get(event.product.as_str()) {
            Some(&slot) => slices[slot].value += event.amount,
            None => {
                slot_by_product.insert(event.product.clone(), slices.len());
                slices.push(PieChartSlice {
                    name: event.product.clone(),
                    value: event.amount,
                });
            }
        }
    }

    if slices.is_empty() {
        return vec![sentinel_slice()];
    }
    slices
}

fn sentinel_slice() -> PieChartSlice {
    PieChartSlice {
        name: NO_DATA_LABEL.to_string(),
        value: 0.0,
    }
}

/// Sum of all amounts, formatted to two decimal places for display.
pub fn total_sales(events: &[SaleEvent]) -> String {
    let total: f64 = events.iter().map(|event| event.amount).sum();
    format!("{:.2}", total)
}

/// The product with the largest summed amount, if any events exist.
pub fn top_product(events: &[SaleEvent]) -> Option<PieChartSlice> {
    if events.is_empty() {
        return None;
    }

    to_product_distribution(events).into_iter().max_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Number of distinct regions seen in the batch.
pub fn region_count(events: &[SaleEvent]) -> usize {
    events
        .iter()
        .map(|event| event.region.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, product: &str, region: &str, amount: f64, minute: u32) -> SaleEvent {
        SaleEvent {
            id: id.to_string(),
            product: product.to_string(),
            region: region.to_string(),
            amount,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_line_series_empty_input_yields_sentinel() {
        let series = to_line_series(&[]);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time, NO_DATA_LABEL);
        assert_eq!(series[0].sales, 0.0);
    }

    #[test]
    fn test_line_series_preserves_length_and_order() {
        let events = vec![
            event("a", "Laptop", "North", 10.0, 0),
            event("b", "Monitor", "South", 5.0, 1),
            event("c", "Laptop", "East", 3.0, 2),
        ];

        let series = to_line_series(&events);

        assert_eq!(series.len(), events.len());
        let sales: Vec<f64> = series.iter().map(|p| p.sales).collect();
        assert_eq!(sales, vec![10.0, 5.0, 3.0]);
    }

    #[test]
    fn test_line_series_time_labels_are_time_of_day() {
        let events = vec![event("a", "Laptop", "North", 10.0, 30)];

        let series = to_line_series(&events);

        // HH:MM:SS
        assert_eq!(series[0].time.len(), 8);
        assert_eq!(series[0].time.matches(':').count(), 2);
    }

    #[test]
    fn test_distribution_empty_input_yields_sentinel() {
        let slices = to_product_distribution(&[]);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].name, NO_DATA_LABEL);
        assert_eq!(slices[0].value, 0.0);
    }

    #[test]
    fn test_distribution_groups_by_product_in_first_occurrence_order() {
        // The base scenario: A/"10.00" + A/5 merge, B/3 stays separate.
        let events: Vec<SaleEvent> = serde_json::from_str(
            r#"[
                {"id": "1", "product": "A", "region": "North",
                 "amount": "10.00", "timestamp": "2025-03-01T12:00:00Z"},
                {"id": "2", "product": "A", "region": "South",
                 "amount": 5, "timestamp": "2025-03-01T12:01:00Z"},
                {"id": "3", "product": "B", "region": "East",
                 "amount": 3, "timestamp": "2025-03-01T12:02:00Z"}
            ]"#,
        )
        .unwrap();

        let slices = to_product_distribution(&events);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].name, "A");
        assert_eq!(slices[0].value, 15.0);
        assert_eq!(slices[1].name, "B");
        assert_eq!(slices[1].value, 3.0);

        let line = to_line_series(&events);
        let sales: Vec<f64> = line.iter().map(|p| p.sales).collect();
        assert_eq!(sales, vec![10.0, 5.0, 3.0]);
    }

    #[test]
    fn test_distribution_conserves_total() {
        let events = vec![
            event("a", "Laptop", "North", 12.25, 0),
            event("b", "Monitor", "South", 0.75, 1),
            event("c", "Laptop", "East", 99.5, 2),
            event("d", "Keyboard", "West", 7.0, 3),
        ];

        let grouped: f64 = to_product_distribution(&events)
            .iter()
            .map(|slice| slice.value)
            .sum();
        let raw: f64 = events.iter().map(|e| e.amount).sum();

        assert!((grouped - raw).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_distinct_products_never_merge() {
        let events = vec![
            event("a", "Laptop", "North", 1.0, 0),
            event("b", "laptop", "North", 2.0, 1),
        ];

        // Grouping is by exact string equality, so case differences stay apart.
        assert_eq!(to_product_distribution(&events).len(), 2);
    }

    #[test]
    fn test_nan_amount_propagates_into_sum() {
        let events: Vec<SaleEvent> = serde_json::from_str(
            r#"[
                {"id": "1", "product": "A", "region": "North",
                 "amount": "bogus", "timestamp": "2025-03-01T12:00:00Z"},
                {"id": "2", "product": "A", "region": "South",
                 "amount": 5, "timestamp": "2025-03-01T12:01:00Z"}
            ]"#,
        )
        .unwrap();

        let slices = to_product_distribution(&events);

        assert_eq!(slices.len(), 1);
        assert!(slices[0].value.is_nan());
    }

    #[test]
    fn test_total_sales_empty() {
        assert_eq!(total_sales(&[]), "0.00");
    }

    #[test]
    fn test_total_sales_formats_two_decimals() {
        let events = vec![
            event("a", "Laptop", "North", 10.0, 0),
            event("b", "Monitor", "South", 20.5, 1),
        ];

        assert_eq!(total_sales(&events), "30.50");
    }

    #[test]
    fn test_top_product() {
        let events = vec![
            event("a", "Laptop", "North", 10.0, 0),
            event("b", "Monitor", "South", 20.5, 1),
            event("c", "Laptop", "East", 15.0, 2),
        ];

        let top = top_product(&events).unwrap();
        assert_eq!(top.name, "Laptop");
        assert_eq!(top.value, 25.0);

        assert!(top_product(&[]).is_none());
    }

    #[test]
    fn test_region_count() {
        let events = vec![
            event("a", "Laptop", "North", 1.0, 0),
            event("b", "Monitor", "North", 2.0, 1),
            event("c", "Laptop", "South", 3.0, 2),
        ];

        assert_eq!(region_count(&events), 2);
        assert_eq!(region_count(&[]), 0);
    }
}
