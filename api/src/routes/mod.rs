//! Route handlers

pub mod customers;
