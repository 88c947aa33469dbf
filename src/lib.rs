//! filterbench - imperative vs higher-order filtering benchmark with linear model reports
//!
//! This library times two strategies for selecting even numbers from an
//! integer sequence and compares measured timings against hand-chosen linear
//! models `T(n) = a·n + b`, producing per-size comparison rows, aggregate
//! statistics, and chart-ready series for external renderers.

pub mod bench;
pub mod chart;
pub mod cli;
pub mod csv_output;
pub mod error;
pub mod filter;
pub mod json_output;
pub mod model;
pub mod report;
pub mod runner;
pub mod text_output;
