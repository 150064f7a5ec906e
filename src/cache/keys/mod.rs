pub mod session_keys;
