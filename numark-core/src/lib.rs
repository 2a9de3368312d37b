//! Core library for the numark filing viewer
//!
//! The centerpiece is the [`Annotator`], a single-pass text scanner that
//! finds standalone numbers in free-text descriptions and wraps the
//! interesting ones in an inline highlight span, while leaving numbers that
//! read as dates, years, or label references (e.g. "Form 10") untouched.
//!
//! Around it sit the typed dataset rows the annotator is fed from
//! ([`dataset`]) and the wrap-around category pager the viewer navigates
//! with ([`navigation`]).

#![warn(missing_docs)]

pub mod annotator;
pub mod config;
pub mod dataset;
pub mod error;
pub mod navigation;

// Re-export key types
pub use annotator::{Annotator, Classification};
pub use config::{AnnotatorConfig, HighlightStyle, YearRange};
pub use dataset::{Dataset, Record};
pub use error::{ConfigError, DatasetError};
pub use navigation::CategoryPager;
