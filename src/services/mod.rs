//! Service modules for extracted functionality.
//!
//! `ingest` holds the aggregation pipeline; `report` turns its published
//! snapshots into plain text for the command-line front end.

pub mod ingest;
pub mod report;
