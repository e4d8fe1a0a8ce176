//! Page components for each route of the console.

pub mod appointments;
pub mod content;
pub mod crud;
pub mod login;
pub mod overview;
pub mod site_settings;

pub use appointments::*;
pub use content::*;
pub use crud::*;
pub use login::*;
pub use overview::*;
pub use site_settings::*;
