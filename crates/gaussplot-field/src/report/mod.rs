//! Reporting and plotting helpers.
//!
//! This module wraps plotting helpers (Plotly) converting coordinate
//! vectors and scalar fields into `plotly::Plot` figures. The figures are
//! returned to the caller; nothing here retains rendering state.
pub mod plots;
