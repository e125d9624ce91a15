//! Scores a resume against a job description by embedding similarity and
//! rewrites it with a text-generation model until it reaches a target score.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
