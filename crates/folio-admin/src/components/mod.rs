//! Reusable UI components for the admin console.

pub mod error_banner;
pub mod form_field;
pub mod layout;
pub mod spinner;

pub use error_banner::*;
pub use form_field::*;
pub use layout::*;
pub use spinner::*;
