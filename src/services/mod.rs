pub mod auth;
pub mod hashmap_user_store;
pub mod token_codec;
pub mod token_service;

pub use auth::AuthService;
pub use hashmap_user_store::HashmapUserStore;
pub use token_service::{TokenError, TokenService};
