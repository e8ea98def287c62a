use std::rc::Rc;

pub mod dispatch;
pub use dispatch::{ActionDispatcher, DispatchLoop};

pub mod components;
use components::EventListener;

pub mod state;
pub use state::{AppAction, AppEvent, AppModel, AppState};

mod action_creators;
pub use action_creators::ActionCreators;

#[cfg(test)]
pub mod test_utils;

// Owns the store's write side: folds dispatched actions into the model, then notifies listeners
pub struct App {
    model: Rc<AppModel>,
    listeners: Vec<Box<dyn EventListener>>,
}

impl App {
    pub fn new(model: Rc<AppModel>) -> Self {
        Self {
            model,
            listeners: vec![],
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    pub fn handle(&mut self, action: AppAction) {
        let events = self.model.update_state(action);
        for event in events.iter() {
            for listener in self.listeners.iter_mut() {
                listener.on_event(event);
            }
        }
    }

    pub async fn start(mut self, dispatch_loop: DispatchLoop) {
        dispatch_loop
            .attach(move |action| self.handle(action))
            .await;
    }
}
