pub mod content_type;
pub mod entity;
pub mod platform;
pub mod priority;
pub mod release_date;
