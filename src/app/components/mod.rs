use crate::app::AppEvent;

mod groups_index;
pub use groups_index::*;

mod group_show;
pub use group_show::*;

mod group_form;
pub use group_form::*;

mod new_event;
pub use new_event::*;

pub trait EventListener {
    fn on_event(&mut self, _: &AppEvent) {}
}
