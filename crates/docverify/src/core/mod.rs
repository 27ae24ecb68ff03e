//! Core service plumbing: configuration loading and discovery.

pub mod config;
