pub mod chat;
pub mod home;
pub mod login;
pub mod market;
pub mod not_found;
pub mod profile;
