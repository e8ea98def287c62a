use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::future;
use futures::stream::StreamExt;

use super::AppAction;

pub trait ActionDispatcher {
    fn dispatch(&self, action: AppAction);
    fn box_clone(&self) -> Box<dyn ActionDispatcher>;
}

#[derive(Clone)]
pub struct ActionDispatcherImpl {
    sender: UnboundedSender<AppAction>,
}

impl ActionDispatcherImpl {
    fn new(sender: UnboundedSender<AppAction>) -> Self {
        Self { sender }
    }
}

impl ActionDispatcher for ActionDispatcherImpl {
    fn dispatch(&self, action: AppAction) {
        if let Err(err) = self.sender.unbounded_send(action) {
            error!("Dropped action, dispatch loop is gone: {:?}", err.into_inner());
        }
    }

    fn box_clone(&self) -> Box<dyn ActionDispatcher> {
        Box::new(self.clone())
    }
}

// Actions are queued and handled one at a time, in dispatch order
pub struct DispatchLoop {
    receiver: UnboundedReceiver<AppAction>,
    sender: UnboundedSender<AppAction>,
}

impl DispatchLoop {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<AppAction>();
        Self { receiver, sender }
    }

    pub fn make_dispatcher(&self) -> Box<dyn ActionDispatcher> {
        Box::new(ActionDispatcherImpl::new(self.sender.clone()))
    }

    pub fn make_stopper(&self) -> DispatchStopper {
        DispatchStopper(self.sender.clone())
    }

    // Runs until every dispatcher has been dropped (or the loop was stopped) and the queue is drained
    pub async fn attach(self, mut handler: impl FnMut(AppAction)) {
        let Self { receiver, sender } = self;
        drop(sender);
        receiver
            .for_each(|action| {
                handler(action);
                future::ready(())
            })
            .await;
    }
}

// Ends the loop even while dispatchers are still alive; actions queued before are still handled
pub struct DispatchStopper(UnboundedSender<AppAction>);

impl DispatchStopper {
    pub fn stop(self) {
        self.0.close_channel();
    }
}

impl Default for DispatchLoop {
    fn default() -> Self {
        Self::new()
    }
}
