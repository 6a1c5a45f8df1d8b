// Module exports for models

pub mod countdown;
pub mod schedule;
pub mod settings;
pub mod zoned;
