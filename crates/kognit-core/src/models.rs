pub mod export;
pub mod metric;
pub mod result;
pub mod step;
pub mod subject;
