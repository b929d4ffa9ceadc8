//! Reusable UI pieces shared by the pages: the error page, the header with the
//! signed-in user, and the loading indicator.

pub mod error_template;
pub mod header;
pub mod loader;
