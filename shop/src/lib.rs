pub mod catalog;
pub mod contact;
pub mod game;
pub mod theme;
