//! Presentation helpers for backend errors and list rows

pub mod body;
pub mod delete;
pub mod http;
pub mod message;
pub mod request;
pub mod template;
pub mod translation;
pub mod value;

pub use body::{get_error_body, ErrorBody, ErrorData};
pub use delete::{get_delete_result, DeleteFields, DeleteResult};
pub use http::{HttpClientError, HttpResponse, RequestConfig};
pub use message::{get_http_error_message, ErrorSource, HttpErrorMessage};
pub use request::{get_http_req_message, RequestSummary, RequestSummaryError};
pub use translation::{ErrorTranslationEntry, TranslationError, TranslationTable};
