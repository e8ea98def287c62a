use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::api::api_models::{FieldErrors, Group, NewGroup};
use crate::api::HuddleResult;
use crate::app::{ActionCreators, ActionDispatcher, AppModel};

pub struct GroupFormModel {
    actions: ActionCreators,
    errors: RefCell<FieldErrors>,
}

impl GroupFormModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            actions: ActionCreators::new(app_model.get_api(), dispatcher),
            errors: RefCell::new(FieldErrors::default()),
        }
    }

    pub fn errors(&self) -> Ref<'_, FieldErrors> {
        self.errors.borrow()
    }

    pub async fn submit(&self, name: &str) -> HuddleResult<Group> {
        let result = self
            .actions
            .create_group(NewGroup {
                name: name.to_string(),
            })
            .await;
        *self.errors.borrow_mut() = result
            .as_ref()
            .err()
            .and_then(|err| err.field_errors())
            .cloned()
            .unwrap_or_default();
        result
    }
}
