//! Data model for the Clarus pharmacy analytics engine.
//!
//! Defines the transaction schema (required and derived column names), the
//! service-type taxonomy with its classification predicates, calendar period
//! keys used for grouping and filtering, and the identifiers of the
//! analytical views exposed to presentation layers.

pub mod columns;
mod error;
mod period;
mod service;
mod transaction;
mod views;

pub use error::{ModelError, Result};
pub use period::{MONTH_NAMES, MonthKey, QuarterKey, month_name};
pub use service::{
    CHRONIC_CATEGORIES, SEASONAL_CATEGORIES, ServiceType, is_chronic, is_chronic_category,
    is_seasonal_category,
};
pub use transaction::Transaction;
pub use views::ViewId;
