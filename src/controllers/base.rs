use axum::Json;

use crate::data::service_status::ServiceStatus;

pub async fn root() -> Json<ServiceStatus<'static>> {
    Json(ServiceStatus::running())
}

pub async fn health() -> &'static str {
    "OK"
}
