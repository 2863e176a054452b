pub mod output;
pub mod readings;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use readings::{load_readings, LoadOutcome};
