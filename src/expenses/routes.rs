use axum::{extract::State, routing::post, Json, Router};

use crate::{extract::{AppJson, AppQuery}, state::AppState};

use super::{error::Result, models::{CreateExpenseRequestModel, ExpenseModel, GetExpensesQueryParams}, DynExpenseService};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/expenses/", post(create_expense).get(get_expenses))
        .route("/expenses", post(create_expense).get(get_expenses))
        .with_state(app_state)
}

pub async fn create_expense(
    State(expense_svc): State<DynExpenseService>,
    AppJson(body): AppJson<CreateExpenseRequestModel>,
) -> Result<Json<ExpenseModel>> {
    Ok(Json(expense_svc.create_expense(body).await?))
}

pub async fn get_expenses(
    State(expense_svc): State<DynExpenseService>,
    AppQuery(params): AppQuery<GetExpensesQueryParams>,
) -> Result<Json<Vec<ExpenseModel>>> {
    Ok(Json(expense_svc.get_expenses(params).await?))
}
