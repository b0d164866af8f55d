//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod document_fixtures;
pub mod kml_assertions;
