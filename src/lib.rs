pub mod error;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{AirportsError, Result};
pub use pipeline::{Destination, Document, Pipeline, PipelineSummary, RowFormat};
