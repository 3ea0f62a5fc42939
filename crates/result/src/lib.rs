// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Data exchanged with an out-of-process user validator.
//!
//! [`ValidationRecord`] is the input handed to the validator and
//! [`ValidationResult`] is the structured answer read back from it.

mod record;
mod result;

pub use record::{FieldValue, ValidationRecord};
pub use result::ValidationResult;
