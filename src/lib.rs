#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_students;
#[cfg(feature = "server")]
use crate::routes::courses::{add_course, courses, delete_course, save_course};
#[cfg(feature = "server")]
use crate::routes::main::{add_student, show_index, students_upload};
#[cfg(feature = "server")]
use crate::routes::parents::{add_parent, delete_parent, parents, save_parent, show_parent};
#[cfg(feature = "server")]
use crate::routes::rooms::{
    add_room, add_schedule_slot, delete_room, delete_schedule_slot, rooms, save_room, show_room,
};
#[cfg(feature = "server")]
use crate::routes::students::{assign_parents, delete_student, save_student, show_student};

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod listing;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Key and store for signed flash message cookies.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let assets_dir = server_config.assets_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", assets_dir.clone()))
            .service(web::scope("/api").service(api_v1_students))
            .service(show_index)
            .service(add_student)
            .service(students_upload)
            .service(show_student)
            .service(save_student)
            .service(delete_student)
            .service(assign_parents)
            .service(courses)
            .service(add_course)
            .service(save_course)
            .service(delete_course)
            .service(rooms)
            .service(show_room)
            .service(add_room)
            .service(save_room)
            .service(delete_room)
            .service(add_schedule_slot)
            .service(delete_schedule_slot)
            .service(parents)
            .service(show_parent)
            .service(add_parent)
            .service(save_parent)
            .service(delete_parent)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
