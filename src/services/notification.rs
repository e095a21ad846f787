use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub type FlashStore = Arc<Mutex<HashMap<String, Vec<String>>>>;

/// Fire-and-forget success notifications. Dialogs and steps talk to this
/// seam; the console backs it with the per-session flash store.
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Notifier bound to one console session: messages land in the flash
/// store and are drained on the next page render.
pub struct FlashNotifier {
    store: FlashStore,
    session_id: String,
}

impl FlashNotifier {
    pub fn new(store: FlashStore, session_id: &str) -> Self {
        FlashNotifier {
            store,
            session_id: session_id.to_string(),
        }
    }
}

impl Notifier for FlashNotifier {
    fn success(&self, message: &str) {
        self.store
            .lock()
            .unwrap()
            .entry(self.session_id.clone())
            .or_default()
            .push(message.to_string());
    }
}
