mod new_event_model;
pub use new_event_model::*;
