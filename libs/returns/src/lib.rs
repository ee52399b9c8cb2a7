//! # marquee-returns
//!
//! Financial return aggregation for a single actor.
//!
//! Given an actor name, the calculator resolves the actor's movies in the
//! [`DatasetStore`](marquee_dataset::DatasetStore), joins them against the
//! movie returns and derives:
//!
//! - the number of appearances with a return record
//! - the number of appearances whose return is exactly zero
//! - the total return, as a percentage
//! - the average return over strictly positive returns only
//! - the average return over every appearance, zeros included
//!
//! Percentages are rendered with thousands separators and two decimals,
//! e.g. `"1,234.50%"`.

mod calculator;
mod error;
mod format;

pub use calculator::{ActorReturnCalculator, ActorReturnSummary, ReturnStats};
pub use error::ReturnError;
pub use format::{format_percent, round2};
