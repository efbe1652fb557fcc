pub mod categories;
pub mod colors;
pub mod login;
pub mod settings;
pub mod show;
