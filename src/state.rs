use crate::auth::auth_service::AuthService;
use crate::task::task_service::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub task_service: TaskService,
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}
