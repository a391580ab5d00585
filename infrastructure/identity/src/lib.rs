pub mod client;
pub mod session_exchanger;
