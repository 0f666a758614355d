//! # Padron Server
//!
//! HTTP API over the padron client registry.
//!
//! ## Overview
//!
//! - **Registry routes**: list/create/get/delete over clients, provinces,
//!   cities, and departments, all driven by one generic CRUD component.
//! - **Auth gate**: cookie/JWT login flow with an argon2 credential check,
//!   HS256 token issuance with a two-hour expiry, and a token-check guard
//!   for protected routes.
//!
//! ## Architecture
//!
//! The server is built on Axum and uses PostgreSQL (via sqlx) for all
//! durable state. Configuration comes from the environment at startup and is
//! injected through [`infra::app_state::AppState`]; nothing global is
//! mutated after boot.

pub mod auth;
pub mod infra;
pub mod registry;
pub mod routes;
