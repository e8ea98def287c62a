mod group_show_model;
pub use group_show_model::*;
