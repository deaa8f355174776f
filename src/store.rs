use std::{collections::BTreeMap, sync::{Arc, Mutex, MutexGuard}};

use thiserror::Error;

use crate::{expenses::models::ExpenseModel, users::models::UserModel};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("In-memory store is unavailable: a previous request panicked while holding it")]
    Poisoned,
}

///
/// Records and id counters for both resources.
/// Ids are handed out sequentially from 1, per resource.
///
#[derive(Default)]
pub struct Tables {
    pub users: BTreeMap<i64, UserModel>,
    pub expenses: BTreeMap<i64, ExpenseModel>,
    user_counter: i64,
    expense_counter: i64,
}

impl Tables {
    pub fn next_user_id(&mut self) -> i64 {
        self.user_counter += 1;
        self.user_counter
    }

    pub fn next_expense_id(&mut self) -> i64 {
        self.expense_counter += 1;
        self.expense_counter
    }
}

///
/// Process-local storage shared by every service. All reads and writes go
/// through [`MemoryStore::lock`], so a check-then-insert sequence performed
/// under one guard is atomic with respect to other requests.
///
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[cfg(test)]
pub(crate) fn poison(store: &MemoryStore) {
    let store = store.clone();
    let _ = std::thread::spawn(move || {
        let _guard = store.tables.lock().unwrap();
        panic!("poisoning store for test");
    })
    .join();
}
