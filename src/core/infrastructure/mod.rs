pub mod api_client;
pub mod session_store;
pub mod transport;
