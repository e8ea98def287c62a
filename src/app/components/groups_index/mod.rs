mod groups_index_model;
pub use groups_index_model::*;
