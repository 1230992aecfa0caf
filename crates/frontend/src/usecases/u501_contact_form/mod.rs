//! Contact form: inline input filtering, message counter, and a log of
//! failed submit attempts carried in a hidden field.

pub mod validation;
mod view;

pub use view::ContactForm;
