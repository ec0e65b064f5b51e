use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{MessageResponse, NewDonation, NewPerson, PeopleList, Person},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/v1/people",
    responses((status = 200, body = PeopleList))
)]
pub async fn get_people(State(state): State<Arc<AppState>>) -> ApiResult<Json<PeopleList>> {
    let people = state.person_service.get_people()?;
    Ok(Json(PeopleList {
        people: people.into_iter().map(Person::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/people/{name}",
    params(("name" = String, Path, description = "Person name")),
    responses((status = 200, body = Person), (status = 404, description = "Person not found"))
)]
pub async fn get_person(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.get_person(&name)?;
    Ok(Json(person.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/people",
    request_body = NewPerson,
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, description = "Person already exists"),
        (status = 404, description = "Goal not found")
    )
)]
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(person): Json<NewPerson>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let p = state.person_service.create_person(person.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Person {} created successfully",
            p.name
        ))),
    ))
}

/// Adds the amount to the donor and to the donor's goal.
#[utoipa::path(
    post,
    path = "/api/v1/donate",
    request_body = NewDonation,
    responses(
        (status = 200, body = MessageResponse),
        (status = 404, description = "Person not found"),
        (status = 422, description = "Donation would overflow a total")
    )
)]
pub async fn donate(
    State(state): State<Arc<AppState>>,
    Json(donation): Json<NewDonation>,
) -> ApiResult<Json<MessageResponse>> {
    let receipt = state.person_service.donate(donation.into()).await?;
    Ok(Json(MessageResponse::new(format!(
        "Donation of {} made by {}",
        receipt.amount, receipt.person_name
    ))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/people", get(get_people).post(create_person))
        .route("/people/{name}", get(get_person))
        .route("/donate", post(donate))
}
