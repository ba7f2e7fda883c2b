//! Game implementations on top of `RulesEngine`.

pub mod linear;
