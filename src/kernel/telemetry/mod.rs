//! Turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (controller, classifier, selector).
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (message text, transcripts).
//! Only tags (intent, emotion, state), ids and durations are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
