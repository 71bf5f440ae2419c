use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Every JSON endpoint lives under this prefix.
pub const API_PREFIX: &str = "/api";

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
