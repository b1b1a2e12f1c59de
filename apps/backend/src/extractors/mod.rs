pub mod session_key;
