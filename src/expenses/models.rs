use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseRequestModel {
    pub title: String,
    pub amount: f64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: DateTime<Utc>,
    pub category: String,
    pub user_id: i64,
}

///
/// Model representing a single stored expense
///
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpenseModel {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub category: String,
    pub user_id: i64,
}

impl ExpenseModel {
    pub fn new(id: i64, req: CreateExpenseRequestModel) -> Self {
        Self {
            id,
            title: req.title,
            amount: req.amount,
            date: req.date,
            category: req.category,
            user_id: req.user_id,
        }
    }
}

///
/// Optional constraints for listing expenses. Every supplied field must hold
/// for an expense to be returned; date bounds are inclusive.
///
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetExpensesQueryParams {
    pub user_id: Option<i64>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
}

pub trait ExpenseFilter {
    fn matches(&self, expense: &ExpenseModel) -> bool;
}

impl ExpenseFilter for GetExpensesQueryParams {
    fn matches(&self, expense: &ExpenseModel) -> bool {
        self.user_id.map_or(true, |id| expense.user_id == id)
            && self.category.as_ref().map_or(true, |cat| expense.category == *cat)
            && self.start_date.map_or(true, |start| expense.date >= start)
            && self.end_date.map_or(true, |end| expense.date <= end)
    }
}
