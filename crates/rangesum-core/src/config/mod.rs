pub mod resolve;
pub mod types;

pub use resolve::{find_config_file, home_dir, load_config};
pub use types::{OutputFormat, RangesumConfig};
