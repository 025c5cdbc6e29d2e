pub mod markdown;
pub mod params;
pub mod sanitize;
