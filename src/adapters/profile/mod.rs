//! Profile adapters. Implement ProfilePort.
//!
//! Bundled snapshot, JSON file, remote endpoint, and a primary/fallback chain.

pub mod chained;
pub mod json_file;
pub mod mapper;
pub mod remote;
pub mod static_adapter;

pub use chained::ChainedProfileAdapter;
pub use json_file::JsonFileProfileAdapter;
pub use mapper::profile_from_json;
pub use remote::RemoteProfileAdapter;
pub use static_adapter::StaticProfileAdapter;
