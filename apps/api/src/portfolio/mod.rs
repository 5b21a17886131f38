//! Portfolio API: plan, generate and archive a portfolio from a posted CV.

pub mod handlers;
