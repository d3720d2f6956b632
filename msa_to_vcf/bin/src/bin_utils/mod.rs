pub mod convert;
pub mod get_args;
