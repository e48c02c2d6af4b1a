pub mod currency;
pub mod error;
pub mod gst;

pub use currency::format_inr;
pub use error::TaxError;
pub use gst::*;
