use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::students::{DeleteStudentForm, SaveStudentForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, students as students_service};

#[get("/student/{student_id}")]
pub async fn show_student(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::load_student_page(repo.get_ref(), student_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("student", &data.student);
            context.insert("parents", &data.parents);
            context.insert("available_parents", &data.available_parents);
            render_template(&tera, "students/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load the student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/student/save")]
pub async fn save_student(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveStudentForm>,
) -> impl Responder {
    let student_id = form.id;
    match students_service::save_student(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Student updated.").send();
            redirect(&format!("/student/{student_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/student/{student_id}"))
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("A student with this email already exists.").send();
            redirect(&format!("/student/{student_id}"))
        }
        Err(err) => {
            log::error!("Failed to update the student: {err}");
            FlashMessage::error("Failed to update the student").send();
            redirect(&format!("/student/{student_id}"))
        }
    }
}

#[post("/student/delete")]
pub async fn delete_student(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteStudentForm>,
) -> impl Responder {
    match students_service::delete_student(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Student removed.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the student: {err}");
            FlashMessage::error("Failed to delete the student").send();
        }
    }
    redirect("/")
}

#[post("/student/parents")]
pub async fn assign_parents(
    repo: web::Data<DieselRepository>,
    body: web::Bytes,
) -> impl Responder {
    match students_service::assign_parents(repo.get_ref(), body.as_ref()) {
        Ok(student_id) => {
            FlashMessage::success("Parents updated.").send();
            redirect(&format!("/student/{student_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to assign parents: {err}");
            FlashMessage::error("Failed to update the parents").send();
            redirect("/")
        }
    }
}
