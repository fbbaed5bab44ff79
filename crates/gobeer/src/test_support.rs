//! Test doubles for the ports

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::adapters::InMemoryStorage;
use crate::domain::{Beer, DomainError, Review};
use crate::ports::{AddingRepository, ListingRepository, Notifier, ReviewingRepository};

/// In-memory storage that records every call and can be told to fail
#[derive(Default)]
pub struct CountingStorage {
    pub inner: InMemoryStorage,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
    stale_exists: AtomicBool,
}

impl CountingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the named operation fail with a repository error
    pub fn fail_on(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    /// Make `beer_exists` always answer false, as if another writer
    /// inserted the beer between the check and the insert
    pub fn stale_existence_check(&self) {
        self.stale_exists.store(true, Ordering::SeqCst);
    }

    pub fn calls_to(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, op: &'static str) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(op) {
            return Err(DomainError::Repository(format!("{op} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl AddingRepository for CountingStorage {
    async fn create_beer(&self, beer: &Beer) -> Result<(), DomainError> {
        self.record("create_beer")?;
        self.inner.create_beer(beer).await
    }

    async fn beer_exists(&self, name: &str, brewery: &str) -> Result<bool, DomainError> {
        self.record("beer_exists")?;
        if self.stale_exists.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.beer_exists(name, brewery).await
    }
}

#[async_trait]
impl ListingRepository for CountingStorage {
    async fn list_beers(&self) -> Result<Vec<Beer>, DomainError> {
        self.record("list_beers")?;
        self.inner.list_beers().await
    }

    async fn list_reviews(&self, beer_id: Uuid) -> Result<Vec<Review>, DomainError> {
        self.record("list_reviews")?;
        self.inner.list_reviews(beer_id).await
    }
}

#[async_trait]
impl ReviewingRepository for CountingStorage {
    async fn get_beer(&self, id: Uuid) -> Result<Beer, DomainError> {
        self.record("get_beer")?;
        self.inner.get_beer(id).await
    }

    async fn create_review(&self, review: &Review) -> Result<(), DomainError> {
        self.record("create_review")?;
        self.inner.create_review(review).await
    }
}

/// Notifier that remembers who it notified
#[derive(Default)]
pub struct RecordingNotifier {
    notified: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            notified: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn notified(&self) -> Vec<String> {
        self.notified.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, user_id: &str) -> Result<(), DomainError> {
        self.notified.lock().unwrap().push(user_id.to_string());
        if self.fail {
            return Err(DomainError::Notification("status code: 503".to_string()));
        }
        Ok(())
    }
}
