pub mod chebyshev; 
pub mod errors; 
pub mod series; 
pub mod uniform;

pub use errors::SamplingError;
pub use series::{Sample, SampleSeries};
