//! Parcel grid viewer (workspace facade crate).
//!
//! Re-exports the member crates under one `parcel_grid::{core,ingest,input,term,types}`
//! namespace for the binary, the integration tests and the benchmarks.

pub use parcel_grid_core as core;
pub use parcel_grid_ingest as ingest;
pub use parcel_grid_input as input;
pub use parcel_grid_term as term;
pub use parcel_grid_types as types;
