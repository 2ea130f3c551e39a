// src/lib.rs

#[macro_use]
mod macros;

pub mod c_api;
pub mod calendar;
pub mod config;
pub mod core;
pub mod logging;

pub use crate::calendar::{
    calculate_age, convert_ad_to_bs, convert_bs_to_ad, format_date_display, CalendarDate, CalendarSystem, DateField,
    DateView,
};
pub use crate::core::converter::Transliterator;
pub use crate::core::engine::LocalizationEngine;
pub use crate::core::table::{DigitTable, PhoneticTable};
