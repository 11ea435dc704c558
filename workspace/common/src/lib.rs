//! Pure, display-agnostic core shared by the infographic frontend.
//! Holds the typed display-data schema, the trade-area circle geometry,
//! and the mapping-library load state machine, so all of it can be unit
//! tested without a browser.

mod geo;
mod loader;
mod panels;

pub use geo::{
    Coordinate, GeoError, circle_ring, DEFAULT_RING_POINTS, KM_PER_DEG_LAT,
    KM_PER_DEG_LON_EQUATOR, MAX_RING_LATITUDE_DEG, MILES_TO_KM,
};
pub use loader::{LibraryLoader, LoadPhase, SubscriberId, Subscription};
pub use panels::{
    DistributionBin, HeaderData, InfographicData, KeyMetric, OccupancySlice, RentRow, RentTable,
    TradeArea, TrendPoint, UnitsBreakdown,
};
