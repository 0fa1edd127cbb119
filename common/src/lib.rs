//! ratepath Common Types
//!
//! This crate contains the types shared across the ratepath workspace:
//! currency codes, directed conversion rates and the rounding rule applied
//! to converted amounts.

pub mod currency;
pub mod rate;
pub mod rounding;
pub mod error;

pub use currency::*;
pub use rate::*;
pub use rounding::*;
pub use error::*;
