//! Elevation profile pipeline: load a series, subsample it, build the 
//! interpolants and measure how well each reproduces the full profile.

pub mod compare;
pub mod errors;
pub mod loader;
pub mod settings;

pub use compare::{compare, run, Comparison, MethodSummary};
pub use errors::ProfileError;
pub use loader::{load_csv, parse_csv};
pub use settings::{Settings, DEFAULT_SETTINGS_PATH};
