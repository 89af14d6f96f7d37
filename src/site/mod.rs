//! Static-ish public pages: home, contact, and the pricing quote form.

pub mod handlers;
pub mod templates;
