/// User records returned by the API
pub mod user;

pub use user::User;
