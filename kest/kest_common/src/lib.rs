#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[cfg(debug_assertions)]
#[macro_use]
extern crate lazy_static;

pub mod colors;
#[macro_use]
pub mod stringid;
