use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use mockall::automock;

use crate::store::MemoryStore;

use {error::*, models::*};

pub mod error;
pub mod models;
pub mod routes;

pub type DynExpenseService = Arc<dyn ExpenseService + Send + Sync>;


#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExpenseService {
    ///
    /// Stores a new expense for an existing user. Fails with
    /// `UserNotFound` before `NonPositiveAmount`; nothing is written on failure.
    ///
    async fn create_expense(&self, req: CreateExpenseRequestModel) -> Result<ExpenseModel>;

    async fn get_expenses(&self, params: GetExpensesQueryParams) -> Result<Vec<ExpenseModel>>;
}

pub struct MemoryExpenseService {
    store: MemoryStore,
}

impl MemoryExpenseService {
    pub fn new_dyn(store: MemoryStore) -> DynExpenseService {
        Arc::new(Self { store })
    }
}

#[async_trait]
impl ExpenseService for MemoryExpenseService {
    async fn create_expense(&self, req: CreateExpenseRequestModel) -> Result<ExpenseModel> {
        // Existence check and insert share one guard
        let mut tables = self.store.lock()?;

        if !tables.users.contains_key(&req.user_id) {
            return Err(Error::UserNotFound(req.user_id));
        }
        if !(req.amount.is_finite() && req.amount > 0.0) {
            return Err(Error::NonPositiveAmount(req.amount));
        }

        let new_id = tables.next_expense_id();
        let new_expense = ExpenseModel::new(new_id, req);
        tables.expenses.insert(new_id, new_expense.clone());

        debug!("Created expense {} for user {}", new_id, new_expense.user_id);
        Ok(new_expense)
    }

    async fn get_expenses(&self, params: GetExpensesQueryParams) -> Result<Vec<ExpenseModel>> {
        let tables = self.store.lock()?;

        Ok(
            tables.expenses.values()
                .filter(|expense| params.matches(expense))
                .cloned()
                .collect()
        )
    }
}
