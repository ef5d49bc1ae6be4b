pub mod data_stores;
pub mod login_request;
pub mod me_response;
pub mod refresh_request;
pub mod register_request;
pub mod register_response;
pub mod request_identity;
pub mod token_pair;
pub mod token_payload;
mod user;
pub mod user_response;

pub use data_stores::*;
pub use login_request::*;
pub use me_response::*;
pub use refresh_request::*;
pub use register_request::*;
pub use register_response::*;
pub use request_identity::*;
pub use token_pair::*;
pub use token_payload::*;
pub use user::*;
pub use user_response::*;
