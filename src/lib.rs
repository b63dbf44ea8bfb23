//! Intovah marketing site
//!
//! Static content routes rendered with Dioxus, plus the two pieces of real
//! behaviour the site has:
//! - Light/dark theming with a persisted preference and OS-preference following
//! - Contact and support lead forms delivered through EmailJS, and a
//!   newsletter sign-up posted to the site's mail endpoint

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (routes, layout, theme toggle, lead forms)
pub mod app;

pub mod config;
pub mod forms;
pub mod notify;
pub mod subscription;
pub mod theme;
