//! # REST API Interface Layer
//!
//! HTTP endpoints for the goal tracker. This layer handles request and
//! response serialization, translation of domain errors to HTTP status
//! codes, and request logging; all business logic stays in the domain
//! layer.

pub mod goal_apis;
pub mod mappers;
