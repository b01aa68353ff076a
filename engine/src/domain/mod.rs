//! Domain pipelines built on the data layer

pub mod reports;
