//! Sensor size visualization for the browser.
//!
//! This crate is compiled to WebAssembly and drawn into a `<canvas>` owned by
//! the client UI. It turns a sensor's physical width and height into a scaled
//! rectangle with a diagonal overlay and dimension/area annotations. Everything
//! except [`render`] and [`engine::Engine`] is plain arithmetic and runs on
//! native targets for testing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `SensorGeometry::compute`: mm to display pixels, diagonal, area |
//! | [`input`] | Parse-and-validate boundary from form strings to dimensions |
//! | [`format`] | Annotation texts (`4.8mm`, `6.00mm`, `S = 0.17cm²`) |
//! | [`layout`] | Placement of rectangle, diagonal and labels in a viewport |
//! | [`render`] | Canvas 2D drawing of a layout |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`consts`] | Shared layout and style constants |

pub mod consts;
pub mod engine;
pub mod format;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
