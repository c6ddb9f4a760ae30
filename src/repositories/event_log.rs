use crate::{
    CreationalError, RecordedEvent, ShowcaseEvent,
    ports::{EventCallback, EventPublisher},
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

type SharedCallback = Arc<dyn Fn(&ShowcaseEvent) + Send + Sync>;

/// Event publisher that keeps published events in memory and fans each
/// one out to the registered subscribers.
///
/// Unbounded by default; with a capacity limit the oldest events are
/// dropped once the limit is reached.
#[derive(Default)]
pub struct InMemoryEventLog {
    history: Mutex<VecDeque<RecordedEvent>>,
    subscribers: Mutex<HashMap<String, SharedCallback>>,
    capacity_limit: Option<usize>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            capacity_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, CreationalError> {
        mutex
            .lock()
            .map_err(|e| CreationalError::event(format!("event log lock poisoned: {}", e)))
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: ShowcaseEvent) -> Result<(), CreationalError> {
        // Snapshot the callbacks so a subscriber may publish without deadlocking.
        let callbacks: Vec<SharedCallback> =
            Self::lock(&self.subscribers)?.values().cloned().collect();

        for callback in &callbacks {
            callback(&event);
        }

        let mut history = Self::lock(&self.history)?;
        history.push_back(RecordedEvent::now(event));
        if let Some(limit) = self.capacity_limit {
            while history.len() > limit {
                history.pop_front();
            }
        }
        Ok(())
    }

    fn subscribe(&self, callback: EventCallback) -> Result<String, CreationalError> {
        let subscription_id = Uuid::new_v4().to_string();
        Self::lock(&self.subscribers)?.insert(subscription_id.clone(), Arc::from(callback));
        Ok(subscription_id)
    }

    fn unsubscribe(&self, subscription_id: &str) -> Result<(), CreationalError> {
        match Self::lock(&self.subscribers)?.remove(subscription_id) {
            Some(_) => Ok(()),
            None => Err(CreationalError::event(format!(
                "unknown subscription: {}",
                subscription_id
            ))),
        }
    }

    fn get_event_history(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<RecordedEvent>, CreationalError> {
        let history = Self::lock(&self.history)?;
        let skip = limit
            .map(|limit| history.len().saturating_sub(limit))
            .unwrap_or(0);
        Ok(history.iter().skip(skip).cloned().collect())
    }

    fn clear_event_history(&self) -> Result<(), CreationalError> {
        Self::lock(&self.history)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CarBrand, Driver};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn started(driver: Driver) -> ShowcaseEvent {
        ShowcaseEvent::DriverStarted { driver }
    }

    #[test]
    fn test_history_keeps_publish_order() {
        let log = InMemoryEventLog::new();
        log.publish(started(Driver::AbstractFactory)).unwrap();
        log.publish(started(Driver::FactoryMethod)).unwrap();
        log.publish(started(Driver::Prototype)).unwrap();

        let events: Vec<_> = log
            .get_event_history(None)
            .unwrap()
            .into_iter()
            .map(|recorded| recorded.event)
            .collect();
        assert_eq!(
            events,
            vec![
                started(Driver::AbstractFactory),
                started(Driver::FactoryMethod),
                started(Driver::Prototype),
            ]
        );
    }

    #[test]
    fn test_limit_returns_most_recent() {
        let log = InMemoryEventLog::new();
        log.publish(started(Driver::AbstractFactory)).unwrap();
        log.publish(ShowcaseEvent::CarFactorySwapped {
            brand: CarBrand::Rhino,
        })
        .unwrap();

        let recent = log.get_event_history(Some(1)).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(
            recent[0].event,
            ShowcaseEvent::CarFactorySwapped {
                brand: CarBrand::Rhino
            }
        );
        assert_eq!(log.get_event_history(Some(10)).unwrap().len(), 2);
    }

    #[test]
    fn test_subscribers_until_unsubscribed() {
        let log = InMemoryEventLog::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        let id = log
            .subscribe(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        log.publish(started(Driver::Prototype)).unwrap();
        log.unsubscribe(&id).unwrap();
        log.publish(started(Driver::Prototype)).unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert!(log.unsubscribe(&id).is_err());
    }

    #[test]
    fn test_capacity_limit_drops_oldest() {
        let log = InMemoryEventLog::with_capacity_limit(2);
        log.publish(started(Driver::AbstractFactory)).unwrap();
        log.publish(started(Driver::FactoryMethod)).unwrap();
        log.publish(started(Driver::Prototype)).unwrap();

        let events: Vec<_> = log
            .get_event_history(None)
            .unwrap()
            .into_iter()
            .map(|recorded| recorded.event)
            .collect();
        assert_eq!(log.capacity_limit(), Some(2));
        assert_eq!(
            events,
            vec![started(Driver::FactoryMethod), started(Driver::Prototype)]
        );
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let log = InMemoryEventLog::with_capacity_limit(0);
        log.publish(started(Driver::Prototype)).unwrap();
        assert!(log.get_event_history(None).unwrap().is_empty());
    }

    #[test]
    fn test_clear_history() {
        let log = InMemoryEventLog::new();
        log.publish(started(Driver::FactoryMethod)).unwrap();
        log.clear_event_history().unwrap();
        assert!(log.get_event_history(None).unwrap().is_empty());
    }
}
