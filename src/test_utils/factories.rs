//! Test data factories.
//!
//! Each factory starts from the default record; use the closure to override fields.

use crate::domain::entities::account_record::AccountRecord;

/// Create an account record from the defaults.
pub fn create_test_record(overrides: impl FnOnce(&mut AccountRecord)) -> AccountRecord {
    let mut record = AccountRecord::default();
    overrides(&mut record);
    record
}
