#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate grebe_diagnostics;

#[macro_use]
extern crate lazy_static;

pub mod fs;
pub mod rand;
