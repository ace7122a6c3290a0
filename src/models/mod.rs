//! Data records exchanged with views and API clients.

pub mod dto;
pub mod product;
pub mod user;

pub use dto::{ParamDto, ParamMixDto, UserDto};
pub use product::Product;
pub use user::User;
