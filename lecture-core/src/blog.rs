//! A blog whose post layout is delegated to a text-wrapping strategy.

use crate::strategy::{TextWrapStrategy, TextWrapper, WrapError};
use serde::{Deserialize, Serialize};

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub author: String,
    pub title: String,
    pub text: String,
}

impl BlogPost {
    pub fn new(author: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A list of posts laid out by the active wrapping strategy.
#[derive(Debug)]
pub struct Blog {
    posts: Vec<BlogPost>,
    wrapper: TextWrapper,
}

impl Blog {
    pub fn new(strategy: Box<dyn TextWrapStrategy>) -> Self {
        Self {
            posts: Vec::new(),
            wrapper: TextWrapper::new(strategy),
        }
    }

    /// Replace the wrapping strategy, returning the previous one.
    pub fn set_strategy(&mut self, strategy: Box<dyn TextWrapStrategy>) -> Box<dyn TextWrapStrategy> {
        tracing::debug!(from = self.strategy().name(), to = strategy.name(), "swapping wrap strategy");
        self.wrapper.set_strategy(strategy)
    }

    pub fn strategy(&self) -> &dyn TextWrapStrategy {
        self.wrapper.strategy()
    }

    pub fn add_post(&mut self, author: impl Into<String>, title: impl Into<String>, text: impl Into<String>) {
        self.posts.push(BlogPost::new(author, title, text));
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Lay out every post for a console of `width` columns.
    ///
    /// Each post is framed by a rule of `width` dashes and shows its title,
    /// author and wrapped text.
    pub fn render(&self, width: usize) -> Result<String, WrapError> {
        let rule = "-".repeat(width);
        let mut out = String::new();

        for post in &self.posts {
            out.push_str(&format!("{rule}\n"));
            out.push_str(&format!("Title: {}\n", post.title));
            out.push_str(&format!("Author: {}\n", post.author));
            for line in self.wrapper.wrap(&post.text, width)? {
                out.push_str(&line);
                out.push('\n');
            }
            out.push_str(&format!("{rule}\n"));
        }

        Ok(out)
    }

    /// Print [`Blog::render`] to stdout.
    pub fn print(&self, width: usize) -> Result<(), WrapError> {
        print!("{}", self.render(width)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BreakAnywhere, BreakOnSpace, Truncation};

    fn sample_blog() -> Blog {
        let mut blog = Blog::new(Box::new(Truncation));
        blog.add_post("John Doe", "My first post", "This is my first post. ".repeat(8));
        blog.add_post("Jane Doe", "My second post", "This is my second post. ".repeat(12));
        blog
    }

    #[test]
    fn test_render_frames_each_post() {
        let blog = sample_blog();
        let rendered = blog.render(40).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        // rule, title, author, one truncated line, rule per post
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "-".repeat(40));
        assert_eq!(lines[1], "Title: My first post");
        assert_eq!(lines[2], "Author: John Doe");
        assert!(lines[3].ends_with("..."));
        assert_eq!(lines[3].chars().count(), 40);
        assert_eq!(lines[4], "-".repeat(40));
        assert_eq!(lines[6], "Title: My second post");
    }

    #[test]
    fn test_swapping_strategy_changes_layout() {
        let mut blog = sample_blog();
        let truncated = blog.render(40).unwrap();

        let previous = blog.set_strategy(Box::new(BreakAnywhere));
        assert_eq!(previous.name(), "truncate");
        let broken = blog.render(40).unwrap();
        assert_ne!(truncated, broken);

        blog.set_strategy(Box::new(BreakOnSpace));
        let spaced = blog.render(40).unwrap();
        for line in spaced.lines() {
            assert!(line.chars().count() <= 40);
            assert!(!line.ends_with(' '));
        }
    }

    #[test]
    fn test_render_propagates_strategy_errors() {
        let mut blog = sample_blog();
        blog.set_strategy(Box::new(BreakAnywhere));
        assert_eq!(blog.render(0), Err(WrapError::InvalidWidth(0)));
    }

    #[test]
    fn test_empty_blog_renders_nothing() {
        let blog = Blog::new(Box::new(Truncation));
        assert_eq!(blog.render(40).unwrap(), "");
        assert!(blog.posts().is_empty());
    }
}
