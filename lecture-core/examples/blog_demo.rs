//! Lay out the same blog with every text-wrapping strategy.

use lecture_core::strategy::{BreakAnywhere, BreakOnSpace, BreakOnSpaceOptimal, Truncation, WrapError};
use lecture_core::Blog;

fn main() -> Result<(), WrapError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut blog = Blog::new(Box::new(Truncation));
    blog.add_post("John Doe", "My first post", "This is my first post. ".repeat(8));
    blog.add_post("Jane Doe", "My second post", "This is my second post. ".repeat(12));

    println!("=== Truncation ===");
    blog.print(40)?;

    println!("\n=== Break anywhere ===");
    blog.set_strategy(Box::new(BreakAnywhere));
    blog.print(40)?;

    println!("\n=== Break on space ===");
    blog.set_strategy(Box::new(BreakOnSpace));
    blog.print(40)?;

    println!("\n=== Break on space (least ragged) ===");
    blog.set_strategy(Box::new(BreakOnSpaceOptimal));
    blog.print(40)?;

    Ok(())
}
