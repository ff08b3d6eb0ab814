pub mod client;
pub mod queries;

pub use client::create_client;
pub use queries::*;
