//! Binding between an editable text field and [`money_format::LocaleFormatter`].
//!
//! [`AmountField`] reformats whatever the user types into the locale's form, keeps the caret next
//! to the digit being edited, flags malformed text through the `data-error` attribute and reports
//! the amount in cents to the host application on change and blur.
//!
//! The field itself is abstract: anything implementing [`HostField`] can be driven, and
//! [`MemoryField`] is an in-memory implementation for tests and tooling.

mod caret;
mod config;
mod field;
mod host;

pub use crate::config::{AmountFieldConfig, ConfigError, DEFAULT_INPUT_TYPE, DEFAULT_LOCALE};
pub use crate::field::{AmountCallback, AmountField};
pub use crate::host::{FieldEvent, FieldEventKind, HostField, MemoryField, ERROR_ATTRIBUTE};

pub use money_format::{AmountValue, LocaleFormatter};
