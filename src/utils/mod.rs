pub mod alert;
pub mod extractor;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{PatchContentType, SafeIDI64};
pub use parameter_error_handler::json_error_handler;
pub use validate::{IdViolation, validate_new_id, validate_update_id};
