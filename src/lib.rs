// SPDX-License-Identifier: MPL-2.0
//! TasteReel: a swipeable restaurant-review feed.
//!
//! The crate is split into the domain state machines ([`domain`]), the
//! in-memory data layer ([`data`]), the Iced UI components ([`ui`]), and
//! the application shell ([`app`]) that wires them together.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
