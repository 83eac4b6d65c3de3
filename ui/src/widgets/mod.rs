mod version;
pub mod users;

pub use version::version_label;
