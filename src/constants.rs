// Response messages shared by the handlers and the validation rules.

pub const EMAIL_EMPTY: &str = "Email must be not empty";
pub const EMAIL_INVALID: &str = "Email must be a valid email address";
pub const NAME_EMPTY: &str = "Name must be not empty";
pub const ROLE_INVALID: &str = "Role must be one of 'USER', 'ADMIN', or 'SUPERADMIN'";
pub const TITLE_EMPTY: &str = "Title must be not empty";
pub const USER_UUID_EMPTY: &str = "User uuid must be not empty";

pub const BODY_NOT_JSON: &str = "Request body must be valid JSON";
pub const BODY_INVALID_SHAPE: &str = "Request body has an invalid shape";

pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";
pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_DELETED: &str = "User deleted successfully";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

// Body key used for errors that do not belong to a single field.
pub const REQUEST_FIELD: &str = "request";
