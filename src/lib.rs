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
// Complexity limits
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

//! Scroll-synchronized camera path for decorative 3D scenes.
//!
//! A normalized scroll progress value drives a camera around a closed
//! elliptical track. The camera looks slightly ahead along its direction of
//! travel and banks into the curve. Rendering, scene construction and
//! scroll events belong to the host; this crate supplies the pose and the
//! plumbing that delivers it to each frame.
//!
//! # Key entry points
//!
//! - [`camera::compute_pose`] - pure progress-to-pose mapping
//! - [`camera::ScrollCameraController`] - holds the latest pose
//! - [`progress::ScrollTimeline`] - scroll offsets to progress
//! - [`session::SceneSession`] - owns camera, controller and timeline
//! - [`frame_loop::FrameLoop`] - cooperative frame loop with a stop handle
//! - [`options::Options`] - TOML configuration
//!
//! # Data flow
//!
//! Scroll offsets enter through [`session::SceneSession::scroll_to`],
//! become progress in the timeline, and replace the controller's pose.
//! Each frame tick applies the most recent pose to the camera and passes it
//! to a [`session::FrameRenderer`]. Scroll updates are never queued; the
//! last one before a frame wins.

pub mod camera;
pub mod error;
pub mod frame_loop;
pub mod options;
pub mod progress;
pub mod session;
pub mod util;

pub use camera::{compute_pose, CameraPose, PathParameters};
pub use error::OrbitError;
pub use session::{SceneSession, Viewport};
