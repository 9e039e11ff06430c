pub mod contact;
pub mod gallery;
pub mod game;
pub mod navbar;
