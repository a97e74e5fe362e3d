//! # delphi-io
//!
//! Read delimited tabular text files into dense `f32` matrices. Bridges
//! on-disk datasets into delphi's [`delphi_matrix::DenseMatrix`]-based APIs,
//! substituting a configurable placeholder for cells that fail to parse.

mod error;
mod reader;

pub use error::IoError;
pub use reader::{ReaderConfig, read_delimited};
