/// User service interface
pub mod user;
