//! # Customer Management API
//!
//! HTTP surface of the customer management backend, built on actix-web.
//! Exposes the customer CRUD, credential and activation endpoints under
//! `/api/v1/customers` and wires the service layer into request handlers.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
