//! Wanderlust: server-rendered listings with nested reviews.
//!
//! Requests flow through [`method_override`], the route table in [`api`],
//! [`validation`] for anything that writes, and the [`db::Database`] store.
//! Pages are leptos components rendered on the server ([`app`]); every
//! failure is an [`error::AppError`] rendered as the error page.
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod method_override;
pub mod models;
pub mod payload;
pub mod validation;
