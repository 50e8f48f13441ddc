pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod login_response;
pub(crate) mod session_handle;

pub use client::ApiClient;
pub use error::{ClientError, ErrorKind, Result as ApiResult};
pub use login_response::LoginResponse;
pub use session_handle::{Navigator, SessionHandle};
