//! Comic catalog aggregation and filtering pipeline.
//!
//! `longbox` ingests a fetched comic catalog, drops records that fail the
//! baseline inclusion rules, computes descriptive statistics over the
//! character counts once per load, and serves an incrementally adjustable
//! filtered view of the cleaned collection.
//!
//! The crate is presentation-agnostic: fetching, rendering and charting are
//! collaborators that hand records in and read snapshots out. The bundled
//! `longbox` binary is the reference consumer: it loads a snapshot file and
//! prints the summary and the filtered list.

pub mod data;
pub mod state;
pub mod stats;

pub use data::filter::{
    FilterCriteria, PLACEHOLDER_TITLE, filter_eligible, filtered_indices, matches,
};
pub use data::loader::{ApiError, load_file, parse_json};
pub use data::model::{Catalog, Character, CharacterRoster, Comic, Price, Thumbnail};
pub use state::{CatalogState, LoadTicket};
pub use stats::{Mode, SeriesPoint, StatsSummary, character_series, mean, median, mode};
