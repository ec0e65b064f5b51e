use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Goal, GoalList, MessageResponse, NewGoal},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/v1/goals",
    responses((status = 200, body = GoalList))
)]
pub async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalList>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(GoalList {
        goals: goals.into_iter().map(Goal::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/goals/{name}",
    params(("name" = String, Path, description = "Goal name")),
    responses((status = 200, body = Goal), (status = 404, description = "Goal not found"))
)]
pub async fn get_goal(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(&name)?;
    Ok(Json(goal.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/goals",
    request_body = NewGoal,
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, description = "Goal already exists")
    )
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let g = state.goal_service.create_goal(goal.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Goal {} created successfully",
            g.name
        ))),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{name}", get(get_goal))
}
