// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Locale resolution order: CLI flag, config file, OS locale, then the
//! built-in `en-US` fallback.

pub mod fluent;

pub use fluent::I18n;
