//! The interaction engine seam.
//!
//! [`InteractionEngine`] is the extension point for computing a reply from
//! a clicked coordinate and a state token. The shipped [`GridEngine`]
//! performs no computation: it echoes the token and answers with a fixed
//! point group. The token stays opaque; nothing here may interpret it.

use protocol::{InteractRequest, InteractResponse, Point};

/// Computes an interaction reply from a request.
///
/// Implementations are shared across concurrently running request
/// handlers and must not rely on per-call mutable state.
pub trait InteractionEngine: Send + Sync {
    /// Produces the reply for a single interaction.
    fn interact(&self, request: InteractRequest) -> InteractResponse;
}

/// The placeholder engine: echoes the state token and always replies with
/// the four corners of the unit square, regardless of the clicked
/// coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEngine;

impl GridEngine {
    /// Creates the engine. It holds no state.
    pub fn new() -> Self {
        Self
    }
}

impl InteractionEngine for GridEngine {
    fn interact(&self, request: InteractRequest) -> InteractResponse {
        InteractResponse {
            state: request.state,
            points_list: vec![vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1),
            ]],
        }
    }
}
