//! Page components for the Folio desktop app.

mod home;

pub use home::Home;
