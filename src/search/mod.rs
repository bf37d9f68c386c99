//! Search support for the greedy move selector
//!
//! Contains:
//! - Candidate generation restricted to the neighbourhood of existing stones

pub mod candidates;

pub use candidates::{generate_candidates, has_neighbor, NEIGHBOR_RADIUS};
