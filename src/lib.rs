//! Helpdesk web client.
//!
//! A client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly and talks to the helpdesk backend over HTTP. All business
//! logic lives server-side; this crate is presentation plus thin API glue.

pub mod api;
pub mod app;
pub mod auth;
pub mod dto;
pub mod guard;
pub mod pages;
