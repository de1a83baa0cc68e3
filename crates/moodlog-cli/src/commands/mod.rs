//! Command handlers, one module per command family.

pub mod clear;
pub mod entries;
pub mod init;
pub mod migrate;
pub mod misc;
pub mod passwd;
pub mod views;
