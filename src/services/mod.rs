// Service module exports

pub mod clock;
pub mod countdown;
pub mod deadline;
pub mod offset;
pub mod settings;
pub mod zoned;
