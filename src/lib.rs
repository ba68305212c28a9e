//! Rotation core for a draggable roulette wheel.
//!
//! The host owns the window and the pixels. This crate owns what happens
//! between input and paint: the disk angle and its wraparound, classifying a
//! mouse drag into a spin, running that spin as an eased background
//! animation, nudging from the arrow keys, and mapping the angle to the number
//! under the marker for each redraw.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`wheel`] | Input-event façade over the rotation core |
//! | [`angle`] | Disk angle, fold arithmetic, shared angle cell |
//! | [`sector`] | Angle to roulette number mapping |
//! | [`gesture`] | Drag classification (dead zone, quadrant predicates) |
//! | [`spin`] | Ease-out spin schedule and the spin worker |
//! | [`input`] | Keys, keyboard nudge, pointer drag state |
//! | [`geometry`] | Points, disk bounds, board geometry |
//! | [`render`] | Render port, JSON-lines renderer, redraw task |
//! | [`config`] | Environment configuration |
//! | [`command`] | Text commands for the headless driver |
//! | [`consts`] | Shared numeric constants |

pub mod angle;
pub mod command;
pub mod config;
pub mod consts;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod render;
pub mod sector;
pub mod spin;
pub mod wheel;
