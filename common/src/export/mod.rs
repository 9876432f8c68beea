//! Export core modules (in-memory buffers).

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;
