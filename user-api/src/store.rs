//! In-memory user storage.
//!
//! `Users` holds the records in insertion order together with the next id to
//! hand out. `UserStore` shares one `Users` between handlers behind an async
//! `RwLock`; reads take the read lock, mutations take the write lock, so
//! concurrent requests never interleave inside a single operation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{User, UserInput};

/// Ordered user records plus the id counter.
///
/// The counter only ever moves forward, so an id is never handed out twice
/// even after the record carrying it is deleted.
#[derive(Clone, Debug)]
pub struct Users {
    records: Vec<User>,
    next_id: i64,
}

impl Users {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// The three sample records present at startup; the counter starts at 4.
    pub fn seeded() -> Self {
        let records = vec![
            User::new(1, "Taro Tanaka", "tanaka@example.com", 25),
            User::new(2, "Hanako Sato", "sato@example.com", 30),
            User::new(3, "Ichiro Suzuki", "suzuki@example.com", 28),
        ];
        let next_id = records.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    pub fn list(&self) -> &[User] {
        &self.records
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.records.iter().find(|u| u.id == id)
    }

    pub fn insert(&mut self, candidate: UserInput) -> User {
        let user = candidate.into_user(self.next_id);
        self.next_id += 1;
        self.records.push(user.clone());
        user
    }

    /// Overwrites the record with `id` in place. Returns `None` if absent.
    pub fn replace_by_id(&mut self, id: i64, candidate: UserInput) -> Option<User> {
        let slot = self.records.iter_mut().find(|u| u.id == id)?;
        *slot = candidate.into_user(id);
        Some(slot.clone())
    }

    /// Removes the record with `id`, keeping the order of the rest.
    pub fn delete_by_id(&mut self, id: i64) -> bool {
        match self.records.iter().position(|u| u.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for Users {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Shared handle to the user collection.
#[derive(Clone, Debug, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Users>>,
}

impl UserStore {
    pub fn new(users: Users) -> Self {
        Self {
            inner: Arc::new(RwLock::new(users)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Users::seeded())
    }

    pub fn empty() -> Self {
        Self::new(Users::empty())
    }

    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.list().to_vec()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        self.inner.read().await.find_by_id(id).cloned()
    }

    pub async fn insert(&self, candidate: UserInput) -> User {
        let user = self.inner.write().await.insert(candidate);
        debug!(id = user.id, "user created");
        user
    }

    pub async fn replace_by_id(&self, id: i64, candidate: UserInput) -> Option<User> {
        let user = self.inner.write().await.replace_by_id(id, candidate);
        if user.is_some() {
            debug!(id, "user replaced");
        }
        user
    }

    pub async fn delete_by_id(&self, id: i64) -> bool {
        let deleted = self.inner.write().await.delete_by_id(id);
        if deleted {
            debug!(id, "user deleted");
        }
        deleted
    }
}
