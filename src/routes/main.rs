use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::student::{Student, StudentSortField};
use crate::dto::listing::ListingPage;
use crate::forms::students::{AddStudentForm, UploadStudentsForm};
use crate::listing::ListQuery;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, main as main_service, students as students_service};

#[get("/")]
pub async fn show_index(
    params: web::Query<ListQuery<StudentSortField>>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let mut context = base_context(&flash_messages, "index");
    context.insert("load_error", &false);

    match main_service::load_index_page(repo.get_ref(), query.clone()) {
        Ok(data) => {
            context.insert("students", &data.listing);
            context.insert("counts", &data.counts);
        }
        Err(err) => {
            log::error!("Failed to load the student roster: {err}");
            let placeholder = ListingPage::<Student, StudentSortField>::unavailable(query);
            context.insert("students", &placeholder);
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "main/index.html", &context)
}

#[post("/students/add")]
pub async fn add_student(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddStudentForm>,
) -> impl Responder {
    match students_service::add_student(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Student added.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("A student with this email already exists.").send();
        }
        Err(err) => {
            log::error!("Failed to add a student: {err}");
            FlashMessage::error("Failed to add the student").send();
        }
    }
    redirect("/")
}

#[post("/students/upload")]
pub async fn students_upload(
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadStudentsForm>,
) -> impl Responder {
    match students_service::upload_students(repo.get_ref(), &mut form) {
        Ok(created) => {
            FlashMessage::success(format!("{created} students imported.")).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("The file duplicates an existing student email.").send();
        }
        Err(err) => {
            log::error!("Failed to import students: {err}");
            FlashMessage::error("Failed to import students").send();
        }
    }
    redirect("/")
}
