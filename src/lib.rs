// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pointer-driven view roll for 3D viewports.
//!
//! Drag the pointer around a fixed screen pivot and the view rolls about
//! its forward axis by the angle the pointer swept. When the viewport is
//! looking through a scene camera the camera itself is rolled; otherwise
//! the free-navigation orientation is.
//!
//! # Key entry points
//!
//! - [`engine::ViewRollEngine`] - owns a viewport and routes input into
//!   rotation sessions
//! - [`rotation::RotationController`] - the session state machine
//! - [`rotation::RotationTarget`] - camera and free-view targets with
//!   capture/apply/restore
//! - [`options::Options`] - HUD, trigger gesture and key binding
//!   preferences
//!
//! # Session lifecycle
//!
//! A bound gesture (Ctrl+Alt+right-click by default) starts a session:
//! the target is captured, a pivot is fixed and the pointer direction at
//! that moment becomes the reference. Every pointer move re-applies the
//! angle from that reference to the captured snapshot. Releasing a button
//! keeps the result; Escape restores the snapshot.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod overlay;
pub mod rotation;

pub use engine::{ViewRollCommand, ViewRollEngine};
pub use error::ViewRollError;
pub use rotation::OperatorStatus;
