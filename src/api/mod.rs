pub mod client;

pub use client::{api_call, set_silent, ApiError};
