pub mod auth_dto;
pub mod auth_handlers;
pub mod auth_service;
pub mod password;

pub use auth_dto::{AuthResponse, LoginRequest, LoginResponse, LogoutRequest, RegisterRequest};
pub use auth_handlers::{login, logout, register};
pub use auth_service::AuthService;
pub use password::{hash_password, verify_password};
