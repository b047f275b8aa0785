use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::course::{Course, CourseSortField};
use crate::dto::listing::ListingPage;
use crate::forms::courses::{AddCourseForm, DeleteCourseForm, SaveCourseForm};
use crate::listing::ListQuery;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, courses as courses_service};

#[get("/courses")]
pub async fn courses(
    params: web::Query<ListQuery<CourseSortField>>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let mut context = base_context(&flash_messages, "courses");
    context.insert("load_error", &false);

    match courses_service::load_courses_page(repo.get_ref(), query.clone()) {
        Ok(listing) => {
            context.insert("courses", &listing);
        }
        Err(err) => {
            log::error!("Failed to list courses: {err}");
            let placeholder = ListingPage::<Course, CourseSortField>::unavailable(query);
            context.insert("courses", &placeholder);
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "courses/index.html", &context)
}

#[post("/courses/add")]
pub async fn add_course(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCourseForm>,
) -> impl Responder {
    match courses_service::add_course(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Course added.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("A course with this code already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to add a course: {err}");
            FlashMessage::error("Failed to add the course").send();
        }
    }
    redirect("/courses")
}

#[post("/courses/save")]
pub async fn save_course(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCourseForm>,
) -> impl Responder {
    match courses_service::save_course(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Course updated.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("A course with this code already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to update the course: {err}");
            FlashMessage::error("Failed to update the course").send();
        }
    }
    redirect("/courses")
}

#[post("/courses/delete")]
pub async fn delete_course(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteCourseForm>,
) -> impl Responder {
    match courses_service::delete_course(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Course removed.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Course not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the course: {err}");
            FlashMessage::error("Failed to delete the course").send();
        }
    }
    redirect("/courses")
}
