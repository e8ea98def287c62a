mod group_form_model;
pub use group_form_model::*;
