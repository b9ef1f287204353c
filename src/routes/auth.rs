use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::users::{UserRepository, UserStoreError};
use crate::middleware::auth::{jwt_secret, Claims};
use crate::models::user::{PublicUser, User};

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/*
    POST /api/auth/signup
*/
pub async fn signup(
    repo: web::Data<Arc<dyn UserRepository>>,
    input: web::Json<SignupRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let issues = validate_signup(&request);
    if !issues.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Invalid input data",
            "details": issues,
        }));
    }

    let hash = match bcrypt::hash(&request.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(err) => {
            eprintln!("Password hashing failed: {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Internal server error",
            }));
        }
    };

    match repo.create(request.name.trim(), &request.email, &hash) {
        Ok(user) => match generate_token(&user) {
            Ok(token) => HttpResponse::Created().json(json!({
                "success": true,
                "user": PublicUser::from(&user),
                "token": token,
                "message": "Account created successfully",
            })),
            Err(err) => {
                eprintln!("Token generation failed: {}", err);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": "Token generation failed",
                }))
            }
        },
        Err(UserStoreError::DuplicateEmail) => HttpResponse::Conflict().json(json!({
            "success": false,
            "error": "An account with this email already exists",
        })),
        Err(err) => {
            eprintln!("Failed to create user: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to create user",
            }))
        }
    }
}

/*
    POST /api/auth/login
*/
pub async fn login(
    repo: web::Data<Arc<dyn UserRepository>>,
    input: web::Json<LoginRequest>,
) -> impl Responder {
    let request = input.into_inner();

    let Some(user) = repo.find_by_email(&request.email) else {
        return invalid_credentials();
    };

    if !bcrypt::verify(&request.password, &user.password_hash).unwrap_or(false) {
        return invalid_credentials();
    }

    match generate_token(&user) {
        Ok(token) => HttpResponse::Ok().json(json!({
            "success": true,
            "user": PublicUser::from(&user),
            "token": token,
            "message": "Login successful",
        })),
        Err(err) => {
            eprintln!("Token generation failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Token generation failed",
            }))
        }
    }
}

/*
    GET /api/auth/verify (requires bearer token)
*/
pub async fn verify(
    claims: web::ReqData<Claims>,
    repo: web::Data<Arc<dyn UserRepository>>,
) -> impl Responder {
    match repo.find_by_id(&claims.user_id) {
        Some(user) => HttpResponse::Ok().json(json!({
            "success": true,
            "user": PublicUser::from(&user),
        })),
        None => HttpResponse::Unauthorized().json(json!({
            "success": false,
            "error": "User not found",
        })),
    }
}

/*
    GET /api/auth/users (admin only)
*/
pub async fn list_users(repo: web::Data<Arc<dyn UserRepository>>) -> impl Responder {
    let users: Vec<PublicUser> = repo.list().iter().map(PublicUser::from).collect();
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": users,
        "total": users.len(),
    }))
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "success": false,
        "error": "Invalid email or password",
    }))
}

fn validate_signup(request: &SignupRequest) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if request.name.trim().len() < 2 {
        issues.push(FieldIssue {
            field: "name",
            message: "Name must be at least 2 characters",
        });
    }
    if !is_valid_email(&request.email) {
        issues.push(FieldIssue {
            field: "email",
            message: "Invalid email format",
        });
    }
    if request.password.len() < 8 {
        issues.push(FieldIssue {
            field: "password",
            message: "Password must be at least 8 characters",
        });
    } else {
        if !request.password.chars().any(|c| c.is_ascii_uppercase()) {
            issues.push(FieldIssue {
                field: "password",
                message: "Password must contain an uppercase letter",
            });
        }
        if !request.password.chars().any(|c| c.is_ascii_lowercase()) {
            issues.push(FieldIssue {
                field: "password",
                message: "Password must contain a lowercase letter",
            });
        }
        if !request.password.chars().any(|c| c.is_ascii_digit()) {
            issues.push(FieldIssue {
                field: "password",
                message: "Password must contain a number",
            });
        }
    }
    if request.password != request.confirm_password {
        issues.push(FieldIssue {
            field: "confirmPassword",
            message: "Passwords do not match",
        });
    }

    issues
}

fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.map(|re| re.is_match(email)).unwrap_or(false)
}

fn generate_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: user.email.clone(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        user_id: user.id.clone(),
        role: user.role.as_str().to_string(),
    };

    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_ref()),
    )
}
