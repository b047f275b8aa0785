use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::parent::{Parent, ParentSortField};
use crate::dto::listing::ListingPage;
use crate::forms::parents::{AddParentForm, DeleteParentForm, SaveParentForm};
use crate::listing::ListQuery;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, parents as parents_service};

#[get("/parents")]
pub async fn parents(
    params: web::Query<ListQuery<ParentSortField>>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let mut context = base_context(&flash_messages, "parents");
    context.insert("load_error", &false);

    match parents_service::load_parents_page(repo.get_ref(), query.clone()) {
        Ok(listing) => {
            context.insert("parents", &listing);
        }
        Err(err) => {
            log::error!("Failed to list parents: {err}");
            let placeholder = ListingPage::<Parent, ParentSortField>::unavailable(query);
            context.insert("parents", &placeholder);
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "parents/index.html", &context)
}

#[get("/parent/{parent_id}")]
pub async fn show_parent(
    parent_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match parents_service::load_parent_page(repo.get_ref(), parent_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "parents");
            context.insert("parent", &data.parent);
            context.insert("students", &data.students);
            render_template(&tera, "parents/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Parent not found.").send();
            redirect("/parents")
        }
        Err(err) => {
            log::error!("Failed to load the parent: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/parents/add")]
pub async fn add_parent(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddParentForm>,
) -> impl Responder {
    match parents_service::add_parent(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Parent added.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a parent: {err}");
            FlashMessage::error("Failed to add the parent").send();
        }
    }
    redirect("/parents")
}

#[post("/parents/save")]
pub async fn save_parent(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveParentForm>,
) -> impl Responder {
    match parents_service::save_parent(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Parent updated.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Parent not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update the parent: {err}");
            FlashMessage::error("Failed to update the parent").send();
        }
    }
    redirect("/parents")
}

#[post("/parents/delete")]
pub async fn delete_parent(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteParentForm>,
) -> impl Responder {
    match parents_service::delete_parent(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Parent removed.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Parent not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the parent: {err}");
            FlashMessage::error("Failed to delete the parent").send();
        }
    }
    redirect("/parents")
}
