//! Factory-pattern localizers.
//!
//! `i18n::get_localizer` picks a localizer implementation from a language
//! name; callers only ever see the `Localizer` trait.

pub mod config;
pub mod demo;
pub mod i18n;
