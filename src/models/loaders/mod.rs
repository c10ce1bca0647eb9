pub mod seed_loader;

pub use seed_loader::{load_seed_file, load_seed_or_default};
