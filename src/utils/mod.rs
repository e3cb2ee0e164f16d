pub mod constants;
pub mod get_env;
