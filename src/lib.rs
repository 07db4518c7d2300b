// Library for tests to access modules

pub mod alert_feed;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod models;
pub mod routes;
pub mod scheduler;
pub mod stats;
pub mod telemetry;
pub mod version;
