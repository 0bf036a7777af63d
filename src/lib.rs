//! Labor Cost Engine for restaurant schedules
//!
//! This crate turns a week of free-text shift entries ("9am-5pm", "10-6",
//! "11pm-7am") into per-shift labor costs, weekly overtime allocation for
//! hourly staff, salary spreading for salaried staff, daily totals and the
//! sales required to meet a labor-cost goal.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
