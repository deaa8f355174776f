use axum::{extract::State, routing::post, Json, Router};

use crate::{extract::AppJson, state::AppState};

use super::{error::Result, models::{CreateUserRequestModel, UserModel}, DynUserService};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/users/", post(create_user).get(get_users))
        .route("/users", post(create_user).get(get_users))
        .with_state(app_state)
}

pub async fn create_user(
    State(user_svc): State<DynUserService>,
    AppJson(body): AppJson<CreateUserRequestModel>,
) -> Result<Json<UserModel>> {
    Ok(Json(user_svc.create_user(body).await?))
}

pub async fn get_users(
    State(user_svc): State<DynUserService>,
) -> Result<Json<Vec<UserModel>>> {
    Ok(Json(user_svc.get_users().await?))
}
