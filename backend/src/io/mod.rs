//! # IO Module
//!
//! Adapter layer between clients and the domain logic: translates HTTP
//! requests into domain commands and formats domain results for
//! consumption by a presentation layer. The presentation layer itself
//! lives outside this repo and talks to the REST API.

pub mod rest;
