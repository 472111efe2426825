//! Domain entities

pub mod credentials;
pub mod post;

pub use credentials::{BearerToken, ConsumerCredentials};
pub use post::Post;
