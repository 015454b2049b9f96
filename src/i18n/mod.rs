// SPDX-License-Identifier: MPL-2.0
//! Localized labels using Fluent.
//!
//! Locale resolution: `--lang`, then `[general] language`, then the OS
//! locale, then en-US. Missing keys fall back to en-US.

pub mod fluent;
