mod login;
mod refresh_token;
mod register;

pub use login::*;
pub use refresh_token::*;
pub use register::*;
