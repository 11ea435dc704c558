use common::{
    Coordinate, DistributionBin, HeaderData, InfographicData, KeyMetric, RentRow, RentTable,
    TradeArea, TrendPoint, UnitsBreakdown,
};

/// The downtown Chicago survey record the page renders. Everything is
/// already shaped for display; percentages and formatted values are baked
/// in.
pub fn infographic_data() -> InfographicData {
    InfographicData {
        header: HeaderData {
            title: "Housing Survey".to_string(),
            subtitle: "Downtown Chicago • 101 Michigan Ave, Chicago IL".to_string(),
            attribution: "This infographic contains Placer.ai data".to_string(),
        },
        trade_area: TradeArea {
            area_label: "78.54 sq/mi".to_string(),
            center: Coordinate {
                lng: -87.6233,
                lat: 41.8827,
            },
            radius_miles: 5.0,
        },
        key_metrics: vec![
            KeyMetric {
                title: "Housing Density".to_string(),
                value: "1,111".to_string(),
                sub_value: "Units/Sq Mi".to_string(),
                icon: "fas fa-city".to_string(),
            },
            KeyMetric {
                title: "Median HH Inc".to_string(),
                value: "$111K".to_string(),
                sub_value: "2028: 1.1%".to_string(),
                icon: "fas fa-dollar-sign".to_string(),
            },
            KeyMetric {
                title: "Avg Household Size".to_string(),
                value: "2.42".to_string(),
                sub_value: "2028: 1.1%".to_string(),
                icon: "fas fa-users".to_string(),
            },
            KeyMetric {
                title: "Mortgage Interest Yr".to_string(),
                value: "$6.6K".to_string(),
                sub_value: String::new(),
                icon: "fas fa-building".to_string(),
            },
            KeyMetric {
                title: "30% AMI HHI Thresh".to_string(),
                value: "$71.6K".to_string(),
                sub_value: String::new(),
                icon: "fas fa-sliders-h".to_string(),
            },
            KeyMetric {
                title: "Median Home Value".to_string(),
                value: "$77.7K".to_string(),
                sub_value: String::new(),
                icon: "fas fa-home".to_string(),
            },
        ],
        housing_vs_employment: vec![
            TrendPoint {
                year: "2019".to_string(),
                housing_units: -2.0,
                employed_population: -1.5,
            },
            TrendPoint {
                year: "2020".to_string(),
                housing_units: 1.0,
                employed_population: 0.5,
            },
            TrendPoint {
                year: "2021".to_string(),
                housing_units: 2.0,
                employed_population: 1.5,
            },
            TrendPoint {
                year: "2022".to_string(),
                housing_units: 4.0,
                employed_population: 3.0,
            },
            TrendPoint {
                year: "2023".to_string(),
                housing_units: 5.0,
                employed_population: 4.0,
            },
        ],
        monthly_rent: RentTable {
            median: RentRow {
                range: "Median Rent".to_string(),
                value: "$1,810".to_string(),
                benchmark: "129".to_string(),
            },
            breakdown: vec![
                RentRow {
                    range: "$1K & Below".to_string(),
                    value: "20.0%".to_string(),
                    benchmark: "130".to_string(),
                },
                RentRow {
                    range: "$1K - 2K".to_string(),
                    value: "20.0%".to_string(),
                    benchmark: "400".to_string(),
                },
                RentRow {
                    range: "$2K - 3K".to_string(),
                    value: "20.0%".to_string(),
                    benchmark: "130".to_string(),
                },
                RentRow {
                    range: "$3K & Above".to_string(),
                    value: "20.0%".to_string(),
                    benchmark: "400".to_string(),
                },
            ],
        },
        housing_units: UnitsBreakdown {
            total: 86_972,
            owned: 41_195,
            rented: 38_000,
            vacant: 7_777,
        },
        year_built: vec![
            bin("<1939", 5_000, 11.0),
            bin("1940-49", 7_000, 15.0),
            bin("1950-59", 5_000, 11.0),
            bin("1960-69", 2_500, 5.0),
            bin("1970-79", 7_000, 15.0),
            bin("1980-89", 5_000, 11.0),
            bin("1990-99", 8_000, 18.0),
            bin("2000-09", 7_000, 15.0),
            bin(">2010", 1_000, 2.0),
        ],
        owner_occupied_value: vec![
            bin("<$100K", 5_000, 11.0),
            bin("$100K-200K", 7_000, 15.0),
            bin("$200K-300K", 5_000, 11.0),
            bin("$300K-400K", 2_500, 5.0),
            bin("$400K-500K", 7_000, 15.0),
            bin("$500K-1M", 5_000, 11.0),
            bin(">$1M", 8_000, 18.0),
        ],
        footer_note: "Ring Radius (5 miles) | Potential Market | Jan 1st, 2023 - Dec 31st, 2023 | Data Source: STI: Popstats; AGS: Demographic Dimensions".to_string(),
    }
}

fn bin(label: &str, units: u32, percentage: f64) -> DistributionBin {
    DistributionBin {
        label: label.to_string(),
        units,
        percentage,
    }
}
