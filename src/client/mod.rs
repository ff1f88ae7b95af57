pub mod middleware;
pub mod request;
