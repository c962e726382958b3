//! Worked-time and pay engine for the CCN Jardineries & Graineteries
//!
//! This crate derives daily and weekly worked hours from raw start/end/break
//! entries, classifies them (night, Sunday, public holiday, regular,
//! structural, overtime brackets) under French labor law and the collective
//! agreement IDCC 1760, estimates gross pay, and reports advisory warnings
//! when legal limits are breached.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
