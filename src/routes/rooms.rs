use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::room::{Room, RoomSortField};
use crate::dto::listing::ListingPage;
use crate::forms::rooms::{
    AddRoomForm, AddScheduleSlotForm, DeleteRoomForm, DeleteScheduleSlotForm, SaveRoomForm,
};
use crate::listing::ListQuery;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, rooms as rooms_service};

#[get("/rooms")]
pub async fn rooms(
    params: web::Query<ListQuery<RoomSortField>>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.into_inner();
    let mut context = base_context(&flash_messages, "rooms");
    context.insert("load_error", &false);

    match rooms_service::load_rooms_page(repo.get_ref(), query.clone()) {
        Ok(listing) => {
            context.insert("rooms", &listing);
        }
        Err(err) => {
            log::error!("Failed to list rooms: {err}");
            let placeholder = ListingPage::<Room, RoomSortField>::unavailable(query);
            context.insert("rooms", &placeholder);
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "rooms/index.html", &context)
}

#[get("/room/{room_id}")]
pub async fn show_room(
    room_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match rooms_service::load_room_page(repo.get_ref(), room_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "rooms");
            context.insert("room", &data.room);
            context.insert("schedule", &data.schedule);
            render_template(&tera, "rooms/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Room not found.").send();
            redirect("/rooms")
        }
        Err(err) => {
            log::error!("Failed to load the room: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/rooms/add")]
pub async fn add_room(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddRoomForm>,
) -> impl Responder {
    match rooms_service::add_room(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Room added.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a room: {err}");
            FlashMessage::error("Failed to add the room").send();
        }
    }
    redirect("/rooms")
}

#[post("/rooms/save")]
pub async fn save_room(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveRoomForm>,
) -> impl Responder {
    match rooms_service::save_room(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Room updated.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Room not found.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update the room: {err}");
            FlashMessage::error("Failed to update the room").send();
        }
    }
    redirect("/rooms")
}

#[post("/rooms/delete")]
pub async fn delete_room(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteRoomForm>,
) -> impl Responder {
    match rooms_service::delete_room(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Room removed.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Room not found.").send();
        }
        Err(ServiceError::Conflict(_)) => {
            FlashMessage::error("The room still has schedule slots. Remove them first.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the room: {err}");
            FlashMessage::error("Failed to delete the room").send();
        }
    }
    redirect("/rooms")
}

#[post("/room/schedule/add")]
pub async fn add_schedule_slot(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddScheduleSlotForm>,
) -> impl Responder {
    let room_id = form.room_id;
    match rooms_service::add_schedule_slot(repo.get_ref(), form) {
        Ok(()) => {
            FlashMessage::success("Schedule slot added.").send();
            redirect(&format!("/room/{room_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Room not found.").send();
            redirect("/rooms")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/room/{room_id}"))
        }
        Err(err) => {
            log::error!("Failed to add a schedule slot: {err}");
            FlashMessage::error("Failed to add the schedule slot").send();
            redirect(&format!("/room/{room_id}"))
        }
    }
}

#[post("/room/schedule/delete")]
pub async fn delete_schedule_slot(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DeleteScheduleSlotForm>,
) -> impl Responder {
    let room_id = form.room_id;
    match rooms_service::delete_schedule_slot(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Schedule slot removed.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Schedule slot not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete the schedule slot: {err}");
            FlashMessage::error("Failed to delete the schedule slot").send();
        }
    }
    redirect(&format!("/room/{room_id}"))
}
