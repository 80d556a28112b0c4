//! Core build pipeline for vitae.
//!
//! This crate reads the CV data files, annotates each row per category,
//! orders the lists, and renders them into the static HTML page
//! (see [`pipeline::build_site`]).

pub mod aggregate;
pub mod categories;
pub mod dates;
pub mod loaders;
pub mod pipeline;
pub mod reader;
pub mod render;
