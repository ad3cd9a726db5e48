pub mod control;
pub mod delay;
pub mod key_value_store;
pub mod navigator;
