pub mod article;
pub mod catalog;
pub mod health;
