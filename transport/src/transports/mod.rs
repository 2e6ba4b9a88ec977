// Licensed under the Apache-2.0 license

//! Transport implementations

pub mod i2c;
