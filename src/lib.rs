//! # Product Catalog Backend
//!
//! Minimal in-memory product catalog exposed as a REST API.
//!
//! This crate provides a small catalog service for CRUD experiments and
//! integration testing: products live in a single in-memory list, the HTTP
//! layer is an Axum server, and nothing survives a restart. The storage
//! layer sits behind a repository trait so a persistent backend can be
//! swapped in later.
//!
//! ## Features
//!
//! - **Product CRUD**: Create, read, update and delete catalog entries
//! - **Statistics**: Average, max and min over price and quantity
//! - **Strict Validation**: Request bodies are checked field by field
//! - **HTTP API**: RESTful endpoints with JSON request/response bodies
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Catalog record and aggregate types
//! - [`store`]: Repository trait and the in-memory implementation
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
