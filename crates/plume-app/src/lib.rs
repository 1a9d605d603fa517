//! Blog front-end shell: the concrete route table, page identifiers and
//! configuration that the `plume` binary wires into a navigation controller.

pub mod config;
pub mod pages;
pub mod routes;
