//! Utility helpers that keep browser and environment concerns out of
//! component logic.

pub mod color_scheme;
