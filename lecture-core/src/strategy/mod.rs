//! Interchangeable algorithms behind a single-operation interface.
//!
//! A [`Context`] owns exactly one active strategy and forwards every call to
//! it. The context has no opinion about *which* algorithm runs; callers pick
//! one at construction time and may swap it at any point afterwards.
//!
//! Three strategy kinds are provided:
//! - [`TextWrapStrategy`] for fitting text into a fixed width ([`TextWrapper`])
//! - [`PredictionStrategy`] for predicting the next value of a series ([`Predictor`])
//! - [`PublishingStrategy`] for rendering content for publication ([`Publisher`])
//!
//! Every kind accepts both named types implementing the trait and plain
//! functions or closures with the matching signature.
//!
//! ```
//! use lecture_core::strategy::{LastValue, MeanValue, Predictor};
//!
//! let mut predictor = Predictor::new(Box::new(MeanValue));
//! assert_eq!(predictor.predict(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
//!
//! predictor.set_strategy(Box::new(LastValue));
//! assert_eq!(predictor.predict(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
//! ```

pub mod predict;
pub mod publish;
pub mod wrap;

pub use predict::{last_value, mean, LastValue, MeanValue, PredictError, PredictionStrategy};
pub use publish::{ContentKind, ContentKindError, FullPublishing, PublishingStrategy, SummaryPublishing};
pub use wrap::{
    break_anywhere, break_on_space, truncate_lines, BreakAnywhere, BreakOnSpace,
    BreakOnSpaceOptimal, TextWrapStrategy, Truncation, WrapError,
};

use std::fmt;

/// Holds the active strategy of kind `S` and delegates to it.
///
/// `S` is normally a trait object such as `dyn TextWrapStrategy`; see the
/// [`TextWrapper`], [`Predictor`] and [`Publisher`] aliases.
pub struct Context<S: ?Sized> {
    strategy: Box<S>,
}

impl<S: ?Sized> Context<S> {
    /// Create a context configured with `strategy`.
    pub fn new(strategy: Box<S>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy, returning the one it replaces.
    pub fn set_strategy(&mut self, strategy: Box<S>) -> Box<S> {
        std::mem::replace(&mut self.strategy, strategy)
    }

    /// The currently active strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

/// Debug output names the active strategy rather than its internals.
macro_rules! impl_context_debug {
    ($($kind:ident),* $(,)?) => {
        $(
            impl fmt::Debug for Context<dyn $kind> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct("Context")
                        .field("strategy", &self.strategy.name())
                        .finish()
                }
            }
        )*
    };
}

// ============================================================================
// Instantiations
// ============================================================================

/// Context over text-wrapping strategies.
pub type TextWrapper = Context<dyn TextWrapStrategy>;

/// Context over prediction strategies.
pub type Predictor = Context<dyn PredictionStrategy>;

/// Context over publishing strategies.
pub type Publisher = Context<dyn PublishingStrategy>;

impl_context_debug!(TextWrapStrategy, PredictionStrategy, PublishingStrategy);

impl TextWrapper {
    /// Wrap `text` into lines of at most `width` characters using the
    /// active strategy.
    pub fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        tracing::trace!(strategy = self.strategy.name(), width, "wrapping text");
        self.strategy.wrap(text, width)
    }
}

impl Predictor {
    /// Predict the next value of `values` using the active strategy.
    pub fn predict(&self, values: &[f64]) -> Result<f64, PredictError> {
        tracing::trace!(strategy = self.strategy.name(), len = values.len(), "predicting");
        self.strategy.predict(values)
    }
}

impl Default for Predictor {
    /// Mean-value prediction, the default in the course material.
    fn default() -> Self {
        Self::new(Box::new(MeanValue))
    }
}

impl Publisher {
    /// Render `content` for publication using the active strategy.
    pub fn publish(&self, content: &str) -> String {
        tracing::trace!(strategy = self.strategy.name(), "publishing");
        self.strategy.publish(content)
    }
}

impl From<ContentKind> for Publisher {
    fn from(kind: ContentKind) -> Self {
        Self::new(kind.strategy())
    }
}
