pub mod environment;
pub mod terminal;
pub mod text;

pub use environment::{CONFIG_ENV_VAR, get_config_path};
pub use terminal::strip_control_sequences;
pub use text::{canonical_name, contains_ignore_case, format_price};
