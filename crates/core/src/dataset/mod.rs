//! Rectangular fiscal record frames and the data provider seam.

pub mod frame;
pub mod provider;

pub use frame::{FieldValue, FiscalFrame, FrameError};
pub use provider::DataProvider;
