//! Test fixtures for route-approx.
//!
//! Provides:
//! - Synthetic and recorded tracks (straight lines, a Vallee de Chevreuse loop)
//! - Mock routing oracles with scripted or geometric behaviour

#![allow(dead_code, unused_imports)]

pub mod oracles;
pub mod tracks;

pub use oracles::*;
pub use tracks::*;
