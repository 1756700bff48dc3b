mod errors;

pub use errors::{PatchError, Result};
