use std::fmt;
use std::sync::Mutex;

use chrono::Utc;

use crate::models::user::{User, UserRole};

#[derive(Debug)]
pub enum UserStoreError {
    DuplicateEmail,
    Internal(String),
}

impl fmt::Display for UserStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStoreError::DuplicateEmail => write!(f, "email is already registered"),
            UserStoreError::Internal(msg) => write!(f, "user store error: {}", msg),
        }
    }
}

impl std::error::Error for UserStoreError {}

/// Capability set the auth layer depends on. Backed by an in-memory store
/// here; a real datastore can be swapped in without touching the handlers.
pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<User>;
    fn find_by_id(&self, id: &str) -> Option<User>;
    fn create(&self, name: &str, email: &str, password_hash: &str)
        -> Result<User, UserStoreError>;
    fn list(&self) -> Vec<User>;
}

/// Process-local user store. The mutex makes it safe under the multi-worker
/// server model; contents do not survive a restart.
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Seeds the demo admin/user accounts when the store is empty.
    pub fn with_demo_users() -> Self {
        let store = Self::new();
        store.seed(
            "Admin User",
            "admin@wanderai.com",
            "admin123",
            UserRole::Admin,
        );
        store.seed(
            "Demo User",
            "user@wanderai.com",
            "password123",
            UserRole::User,
        );
        store
    }

    fn seed(&self, name: &str, email: &str, password: &str, role: UserRole) {
        let hash = match bcrypt::hash(password, bcrypt::DEFAULT_COST) {
            Ok(hash) => hash,
            Err(err) => {
                eprintln!("Failed to hash seed password for {}: {}", email, err);
                return;
            }
        };

        let mut users = self.users.lock().unwrap();
        let id = (users.len() + 1).to_string();
        users.push(User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash: hash,
            created_at: Utc::now(),
        });
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserStore {
    fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn find_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.lock().unwrap();
        users.iter().find(|u| u.id == id).cloned()
    }

    fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = User {
            id: (users.len() + 1).to_string(),
            email: email.to_lowercase(),
            name: name.to_string(),
            role: UserRole::User,
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    fn list(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find_user() {
        let store = InMemoryUserStore::new();
        let created = store.create("Test User", "Test@Example.com", "hash").unwrap();
        assert_eq!(created.email, "test@example.com");
        assert_eq!(created.role, UserRole::User);

        let by_email = store.find_by_email("test@example.com").unwrap();
        assert_eq!(by_email.id, created.id);

        // Lookup is case-insensitive on email.
        assert!(store.find_by_email("TEST@EXAMPLE.COM").is_some());
        assert!(store.find_by_id(&created.id).is_some());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store.create("One", "dup@example.com", "hash").unwrap();
        let err = store.create("Two", "DUP@example.com", "hash").unwrap_err();
        assert!(matches!(err, UserStoreError::DuplicateEmail));
    }

    #[test]
    fn test_demo_users_seeded() {
        let store = InMemoryUserStore::with_demo_users();
        let admin = store.find_by_email("admin@wanderai.com").unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert!(bcrypt::verify("admin123", &admin.password_hash).unwrap());

        let user = store.find_by_email("user@wanderai.com").unwrap();
        assert_eq!(user.role, UserRole::User);
    }
}
