pub mod catalog;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod image_slot;
pub mod layout;
pub mod raster;
pub mod registry;
pub mod render;
pub mod state;
