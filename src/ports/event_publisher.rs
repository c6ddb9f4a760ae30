use crate::{CreationalError, RecordedEvent, ShowcaseEvent};

pub type EventCallback = Box<dyn Fn(&ShowcaseEvent) + Send + Sync>;

pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: ShowcaseEvent) -> Result<(), CreationalError>;

    fn subscribe(&self, callback: EventCallback) -> Result<String, CreationalError>;

    fn unsubscribe(&self, subscription_id: &str) -> Result<(), CreationalError>;

    fn get_event_history(&self, limit: Option<usize>)
    -> Result<Vec<RecordedEvent>, CreationalError>;

    fn clear_event_history(&self) -> Result<(), CreationalError>;
}
