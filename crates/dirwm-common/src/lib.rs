pub mod errors;
pub mod types;

pub use errors::{ConfigError, DirwmError, FsError, UiError};
pub use types::{CellRect, Scope, WindowId};

pub type Result<T> = std::result::Result<T, DirwmError>;
