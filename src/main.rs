use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wanderai_api::db::users::{InMemoryUserStore, UserRepository};
use wanderai_api::middleware::{auth::AuthMiddleware, role_auth::RequireRole};
use wanderai_api::routes;
use wanderai_api::services::itinerary_generation_service::ItineraryGenerator;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    println!("Environment status:");
    println!(
        "- GOOGLE_MAPS_API_KEY: {}",
        if std::env::var("GOOGLE_MAPS_API_KEY").is_ok() {
            "configured"
        } else {
            "not configured"
        }
    );
    println!(
        "- DEEPSEEK_API_KEY: {}",
        if std::env::var("DEEPSEEK_API_KEY").is_ok() {
            "configured"
        } else {
            "not configured"
        }
    );

    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::with_demo_users());
    let repo_data = web::Data::new(repo);

    let generator_data = web::Data::new(ItineraryGenerator::from_env());

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(repo_data.clone())
            .app_data(generator_data.clone())
            .route("/", web::get().to(|| async { "WanderAI API is running" }))
            .service(
                web::scope("/api")
                    // Public routes
                    .route("/health", web::get().to(routes::health::health_check))
                    .route("/city/{city}", web::get().to(routes::itinerary::city_info))
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(routes::auth::signup))
                            .route("/login", web::post().to(routes::auth::login))
                            .service(
                                web::scope("/verify")
                                    .wrap(AuthMiddleware)
                                    .route("", web::get().to(routes::auth::verify)),
                            )
                            .service(
                                web::scope("/users")
                                    .wrap(RequireRole::admin())
                                    .wrap(AuthMiddleware)
                                    .route("", web::get().to(routes::auth::list_users)),
                            ),
                    )
                    .service(
                        web::scope("/config")
                            .wrap(RequireRole::admin())
                            .wrap(AuthMiddleware)
                            .route("", web::get().to(routes::health::api_config)),
                    )
                    // Protected routes
                    .service(
                        web::scope("/itinerary")
                            .wrap(AuthMiddleware)
                            .route("/generate", web::post().to(routes::itinerary::generate))
                            .route("/export", web::post().to(routes::itinerary::export)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
