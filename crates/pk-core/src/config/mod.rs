//! Page configuration DTOs.
//!
//! Only presentation is configurable: labels, messages, notice timing,
//! optional affordances and the log filter. The accepted MIME types, the
//! size limit and the phone digit cap are fixed in code.

mod page_config;

pub use page_config::{LoggingConfig, MessagesConfig, NoticesConfig, PageConfig, UploadLabels};
