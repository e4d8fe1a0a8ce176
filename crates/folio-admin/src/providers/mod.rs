//! Services shared by every screen.

pub mod api;
