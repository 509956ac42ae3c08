pub mod generate;
pub mod list;
pub mod print;

pub use generate::{GenConfig, generate_code};
pub use list::list_paths;
pub use print::print_value;
