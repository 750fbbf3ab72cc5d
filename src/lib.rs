//! roomstay - A small room-listing REST service
//!
//! Serves CRUD and search endpoints for room listings, with
//! ownership-based authorization on mutations.

pub mod auth;
pub mod cli;
pub mod config;
pub mod model;
pub mod observability;
pub mod rest;
