// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

pub mod catalog;
pub mod config;
pub mod currencies;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use catalog::{CurrencyCatalog, LookupOptions};
pub use error::CurrencyError;
pub use models::{Currency, CurrencyCode};
