mod toast;

pub use toast::{ToastEvent, ToastNotifier};
