pub mod client;
pub mod dto;
pub mod export;
pub mod handler;
pub mod prompt;
pub mod service;
pub mod session;

pub use client::{GenerationClient, GenerationClientTrait, OpenRouterClient};
pub use dto::{Article, Depth, GenerateArticleRequest};
pub use service::GenerationService;
pub use session::SessionStore;
