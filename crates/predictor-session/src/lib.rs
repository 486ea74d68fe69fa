//! Synchronous single-model inference sessions.
//!
//! The crate is a thin lifecycle layer over `burn`:
//! 1. Implement [`ForwardModel`] for a network (or use the shipped
//!    [`LinearPredictor`], loadable from a recorded-weights artifact via
//!    [`InitModel`]).
//! 2. Build a [`PredictorSession`] with a [`SessionConfig`] and a
//!    [`PresentationSink`], then call `initialize` to spawn the worker.
//! 3. Each [`PredictorSession::predict`] call generates synthetic input, runs
//!    one blocking forward pass, and presents the input/output values as text
//!    blocks through the sink.
//! 4. Call `release` (or drop the session) to join the worker; release is
//!    idempotent.
//!
//! Sessions are single-threaded: `predict` takes `&mut self`, so overlapping
//! calls on one session cannot be expressed.

mod error;
mod host;
mod lease;
mod linear;
mod model;
mod rng;
mod session;
mod sink;


pub use error::{LoadError, SessionError};
pub use host::{ModelAccessor, ModelHost};
pub use lease::{LeaseTracker, TensorLease};
pub use linear::{LinearPredictor, LinearPredictorArtifact, LinearPredictorConfig};
pub use model::{ForwardModel, InitModel};
pub use rng::{EntropySource, RandomSource, SeededSource};
pub use session::{OutputSelection, PredictorSession, SessionConfig};
pub use sink::{BufferSink, LogSink, PresentationSink};
