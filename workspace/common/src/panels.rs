//! Typed display-data schema, one struct per infographic panel.
//!
//! Every field carries `#[serde(default)]` so a record with missing
//! fields deserializes to empty values and the affected panel renders
//! empty instead of failing the whole page.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// The whole dashboard payload. Supplied fully formed at render time;
/// nothing here is computed beyond the occupancy shares.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfographicData {
    #[serde(default)]
    pub header: HeaderData,
    #[serde(default)]
    pub trade_area: TradeArea,
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(default)]
    pub housing_vs_employment: Vec<TrendPoint>,
    #[serde(default)]
    pub monthly_rent: RentTable,
    #[serde(default)]
    pub housing_units: UnitsBreakdown,
    #[serde(default)]
    pub year_built: Vec<DistributionBin>,
    #[serde(default)]
    pub owner_occupied_value: Vec<DistributionBin>,
    #[serde(default)]
    pub footer_note: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub attribution: String,
}

/// The geographic catchment for the displayed metrics: a ring of
/// `radius_miles` around `center`, labeled with its formatted area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeArea {
    #[serde(default)]
    pub area_label: String,
    #[serde(default)]
    pub center: Coordinate,
    #[serde(default)]
    pub radius_miles: f64,
}

/// One stat card. `value` and `sub_value` arrive preformatted; `icon` is
/// an icon class name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetric {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub sub_value: String,
    #[serde(default)]
    pub icon: String,
}

/// One year of the housing-vs-employment trend, as percent change from
/// the base year.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub housing_units: f64,
    #[serde(default)]
    pub employed_population: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RentRow {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub benchmark: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RentTable {
    #[serde(default)]
    pub median: RentRow,
    #[serde(default)]
    pub breakdown: Vec<RentRow>,
}

/// Housing stock split by occupancy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitsBreakdown {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub owned: u32,
    #[serde(default)]
    pub rented: u32,
    #[serde(default)]
    pub vacant: u32,
}

/// A labeled occupancy count with its share of the total stock.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancySlice {
    pub label: &'static str,
    pub count: u32,
    pub percent: f64,
}

impl UnitsBreakdown {
    /// Owned/rented/vacant slices with percent shares of `total`. A zero
    /// total yields zero shares rather than dividing by zero.
    pub fn occupancy_slices(&self) -> Vec<OccupancySlice> {
        let share = |count: u32| {
            if self.total == 0 {
                0.0
            } else {
                f64::from(count) / f64::from(self.total) * 100.0
            }
        };
        vec![
            OccupancySlice {
                label: "Owned",
                count: self.owned,
                percent: share(self.owned),
            },
            OccupancySlice {
                label: "Rented",
                count: self.rented,
                percent: share(self.rented),
            },
            OccupancySlice {
                label: "Vacant",
                count: self.vacant,
                percent: share(self.vacant),
            },
        ]
    }
}

/// One bin of a unit-count histogram (year built, home value).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionBin {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub units: u32,
    #[serde(default)]
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_deserializes_to_defaults() {
        let data: InfographicData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, InfographicData::default());
        assert!(data.key_metrics.is_empty());
        assert_eq!(data.header.title, "");
    }

    #[test]
    fn test_partial_panel_fills_missing_fields() {
        let metric: KeyMetric =
            serde_json::from_str(r#"{"title": "Housing Density", "value": "1,111"}"#).unwrap();
        assert_eq!(metric.title, "Housing Density");
        assert_eq!(metric.sub_value, "");
        assert_eq!(metric.icon, "");

        let trade_area: TradeArea =
            serde_json::from_str(r#"{"area_label": "78.54 sq/mi"}"#).unwrap();
        assert_eq!(trade_area.center, Coordinate::default());
        assert_eq!(trade_area.radius_miles, 0.0);
    }

    #[test]
    fn test_occupancy_slices_share_the_total() {
        let units = UnitsBreakdown {
            total: 86_972,
            owned: 41_195,
            rented: 38_000,
            vacant: 7_777,
        };
        let slices = units.occupancy_slices();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].label, "Owned");

        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((slices[0].percent - 47.365).abs() < 0.01);
    }

    #[test]
    fn test_occupancy_slices_guard_zero_total() {
        let slices = UnitsBreakdown::default().occupancy_slices();
        assert!(slices.iter().all(|s| s.percent == 0.0));
    }
}
