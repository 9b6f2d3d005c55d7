//! Design-pattern demonstrations for a software-design course.
//!
//! This crate provides:
//! - The Strategy pattern: swappable text-wrapping, prediction and
//!   publishing algorithms behind a common [`Context`]
//! - The Command pattern: a turn-based adventure where players select and
//!   perform [`Action`]s
//! - Small test-driven exercises (prime factors, arithmetic, minesweeper)
//!
//! # Quick Start
//!
//! ```
//! use lecture_core::blog::Blog;
//! use lecture_core::strategy::{BreakOnSpace, Truncation};
//!
//! let mut blog = Blog::new(Box::new(Truncation));
//! blog.add_post("John Doe", "My first post", "This is my first post. ".repeat(8));
//! let truncated = blog.render(40).unwrap();
//!
//! blog.set_strategy(Box::new(BreakOnSpace));
//! assert_ne!(truncated, blog.render(40).unwrap());
//! ```

pub mod adventure;
pub mod blog;
pub mod exercises;
pub mod strategy;
pub mod testing;

// Primary public API
pub use adventure::{Action, AdventureConfig, Game, Player, PolicyKind, TurnError, WorldFactory};
pub use blog::{Blog, BlogPost};
pub use strategy::{Context, Predictor, Publisher, TextWrapper};
pub use testing::{ScriptedPolicy, TestHarness};
