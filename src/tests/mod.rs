//! End-to-end shell scenarios.

mod scenarios;
