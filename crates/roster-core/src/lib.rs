//! # roster-core
//!
//! Foundational types shared across the roster crates:
//! - The [`Employee`](entities::Employee) value entity produced by the record parser
//! - The [`ReportResponse`](responses::ReportResponse) handed to the presentation layer

pub mod entities;
pub mod responses;
