use actix_web::{HttpResponse, Responder, get, web};
use log::error;

use crate::domain::student::StudentSortField;
use crate::dto::api::ApiError;
use crate::listing::ListQuery;
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/students")]
pub async fn api_v1_students(
    params: web::Query<ListQuery<StudentSortField>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_students(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(ApiError::new(message)),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ApiError::new("Not found"))
        }
        Err(ServiceError::Conflict(message)) => {
            HttpResponse::Conflict().json(ApiError::new(message))
        }
        Err(ServiceError::Repository(RepositoryError::ConnectionError(_))) => {
            HttpResponse::ServiceUnavailable().json(ApiError::new("Database unavailable"))
        }
        Err(err) => {
            error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("Internal server error"))
        }
    }
}
