use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use wanderai_api::db::users::{InMemoryUserStore, UserRepository};
use wanderai_api::middleware::auth::{jwt_secret, AuthMiddleware, Claims};
use wanderai_api::middleware::role_auth::RequireRole;
use wanderai_api::routes;
use wanderai_api::services::curated::CuratedCatalog;
use wanderai_api::services::currency_service::ExchangeRates;
use wanderai_api::services::itinerary_generation_service::ItineraryGenerator;
use wanderai_api::services::place_service::PlaceService;

/// Test harness around the real route tree: in-memory users, offline place
/// provider (curated + generic tiers only) and no narrative service, so no
/// test ever leaves the process.
pub struct TestApp {
    pub repo: web::Data<Arc<dyn UserRepository>>,
    pub generator: web::Data<ItineraryGenerator>,
}

impl TestApp {
    pub fn new() -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::with_demo_users());
        let generator = ItineraryGenerator::new(
            PlaceService::new(None, CuratedCatalog::default()),
            None,
            ExchangeRates::default(),
        );

        Self {
            repo: web::Data::new(repo),
            generator: web::Data::new(generator),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(self.repo.clone())
            .app_data(self.generator.clone())
            .route("/", web::get().to(|| async { "WanderAI API is running" }))
            .service(
                web::scope("/api")
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
                    .service(
                        web::scope("/itinerary")
                            .wrap(AuthMiddleware)
                            .route("/generate", web::post().to(routes::itinerary::generate))
                            .route("/export", web::post().to(routes::itinerary::export)),
                    ),
            )
    }

    /// Bearer token for the seeded admin account.
    pub fn admin_token(&self) -> String {
        self.token_for("admin@wanderai.com")
    }

    /// Bearer token for the seeded non-admin account.
    pub fn user_token(&self) -> String {
        self.token_for("user@wanderai.com")
    }

    fn token_for(&self, email: &str) -> String {
        let user = self
            .repo
            .find_by_email(email)
            .expect("seeded test user missing");
        let now = Utc::now();
        let claims = Claims {
            sub: user.email.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(1)).timestamp() as usize,
            user_id: user.id.clone(),
            role: user.role.as_str().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(jwt_secret().as_ref()),
        )
        .expect("token encoding failed")
    }

    /// Expired token, for exercising the 401 reason codes.
    pub fn expired_token(&self) -> String {
        let user = self
            .repo
            .find_by_email("user@wanderai.com")
            .expect("seeded test user missing");
        let past = Utc::now() - Duration::hours(3);
        let claims = Claims {
            sub: user.email.clone(),
            iat: past.timestamp() as usize,
            exp: (past + Duration::hours(1)).timestamp() as usize,
            user_id: user.id.clone(),
            role: user.role.as_str().to_string(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(jwt_secret().as_ref()),
        )
        .expect("token encoding failed")
    }
}
