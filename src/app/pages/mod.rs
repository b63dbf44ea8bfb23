//! Routed page components.

mod about;
mod contact;
mod faqs;
mod home;
mod support;

pub use about::About;
pub use contact::Contact;
pub use faqs::Faqs;
pub use home::Home;
pub use support::Support;
