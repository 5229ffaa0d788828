//! Fullscreen-quad raytracing demo driven by a first-person camera.
//!
//! The host side owns the camera math and feeds the live camera to the
//! shader each frame; all ray/scene work happens on the GPU.

pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod float;
pub mod input;
pub mod raytracer;
pub mod uniforms;
pub mod util;
pub mod vertex;

pub use crate::float::Float;
