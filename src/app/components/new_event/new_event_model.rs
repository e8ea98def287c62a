use async_std::fs;
use async_std::path::Path as AsyncPath;
use std::cell::{Ref, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::api::api_models::{Event, FieldErrors, GroupId, NewEvent, Poster};
use crate::api::HuddleResult;
use crate::app::{ActionCreators, ActionDispatcher, AppModel};

#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub poster_path: Option<PathBuf>,
}

pub struct NewEventModel {
    pub group_id: GroupId,
    actions: ActionCreators,
    errors: RefCell<FieldErrors>,
}

impl NewEventModel {
    pub fn new(
        group_id: GroupId,
        app_model: Rc<AppModel>,
        dispatcher: Box<dyn ActionDispatcher>,
    ) -> Self {
        Self {
            group_id,
            actions: ActionCreators::new(app_model.get_api(), dispatcher),
            errors: RefCell::new(FieldErrors::default()),
        }
    }

    pub fn errors(&self) -> Ref<'_, FieldErrors> {
        self.errors.borrow()
    }

    async fn read_poster(path: &Path) -> HuddleResult<Poster> {
        let bytes = fs::read(AsyncPath::new(path)).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "poster".to_string());
        Ok(Poster::new(&file_name, bytes))
    }

    async fn make_event(&self, form: EventForm) -> HuddleResult<NewEvent> {
        let poster = match form.poster_path.as_deref() {
            Some(path) => Some(Self::read_poster(path).await?),
            None => None,
        };
        Ok(NewEvent {
            name: form.name,
            description: form.description,
            start_time: form.start_time,
            end_time: form.end_time,
            location: form.location,
            poster,
            group_id: self.group_id,
        })
    }

    pub async fn submit(&self, form: EventForm) -> HuddleResult<Event> {
        let result = match self.make_event(form).await {
            Ok(event) => self.actions.create_event(event).await,
            Err(err) => Err(err),
        };
        *self.errors.borrow_mut() = result
            .as_ref()
            .err()
            .and_then(|err| err.field_errors())
            .cloned()
            .unwrap_or_default();
        result
    }
}
