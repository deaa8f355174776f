use axum_macros::FromRef;

use crate::{expenses::{DynExpenseService, MemoryExpenseService}, store::MemoryStore, users::{DynUserService, MemoryUserService}};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub user_svc: DynUserService,
    pub expense_svc: DynExpenseService,
}

impl AppState {
    ///
    /// Both services backed by one fresh, empty store.
    ///
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            user_svc: MemoryUserService::new_dyn(store.clone()),
            expense_svc: MemoryExpenseService::new_dyn(store),
        }
    }
}
