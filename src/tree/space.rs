use std::fmt;

use super::markers::{Marker, Markers, kinds};

/// Whitespace and comments between two tokens.
///
/// `whitespace` holds the blank text before the first comment; each comment
/// owns the blank text that follows it as its `suffix`. Comment delimiters never
/// appear in `whitespace` or in a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Space {
    pub comments: Vec<Comment>,
    pub whitespace: String,
}

/// The closed set of comment shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    Text(TextComment),
}

/// A `// line` or `/* block */` comment. `text` excludes the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComment {
    pub multiline: bool,
    pub text: String,
    pub suffix: String,
    pub markers: Markers,
}

impl Space {
    pub const EMPTY: Space = Space {
        comments: Vec::new(),
        whitespace: String::new(),
    };

    /// Whitespace without comments.
    pub fn whitespace(whitespace: impl Into<String>) -> Space {
        Space {
            comments: Vec::new(),
            whitespace: whitespace.into(),
        }
    }

    pub fn single_space() -> Space {
        Space::whitespace(" ")
    }

    /// Splits raw formatting text into whitespace and comments.
    ///
    /// A block comment missing its closing `*/` runs to the end of the input.
    pub fn format(formatting: &str) -> Space {
        let mut space = Space::default();
        let mut rest = formatting;

        while !rest.is_empty() {
            let Some(start) = next_comment_start(rest) else {
                space.push_blank(rest);
                break;
            };
            space.push_blank(&rest[..start]);

            let body = &rest[start + 2..];
            if rest[start..].starts_with("//") {
                let end = body.find('\n').unwrap_or(body.len());
                space.comments.push(Comment::line(&body[..end]));
                rest = &body[end..];
            } else {
                match body.find("*/") {
                    Some(end) => {
                        space.comments.push(Comment::block(&body[..end]));
                        rest = &body[end + 2..];
                    }
                    None => {
                        space.comments.push(Comment::unterminated_block(body));
                        rest = "";
                    }
                }
            }
        }

        space
    }

    fn push_blank(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.comments.last_mut() {
            Some(Comment::Text(comment)) => comment.suffix.push_str(text),
            None => self.whitespace.push_str(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.whitespace.is_empty()
    }

    /// The whitespace that follows the last comment, or the leading whitespace
    /// when there are no comments.
    pub fn indent(&self) -> &str {
        let trailing = match self.comments.last() {
            Some(Comment::Text(comment)) => comment.suffix.as_str(),
            None => self.whitespace.as_str(),
        };
        match trailing.rfind('\n') {
            Some(newline) => &trailing[newline + 1..],
            None => trailing,
        }
    }

    pub fn with_whitespace(&self, whitespace: impl Into<String>) -> Space {
        Space {
            comments: self.comments.clone(),
            whitespace: whitespace.into(),
        }
    }

    pub fn with_comments(&self, comments: Vec<Comment>) -> Space {
        Space {
            comments,
            whitespace: self.whitespace.clone(),
        }
    }
}

fn next_comment_start(text: &str) -> Option<usize> {
    match (text.find("//"), text.find("/*")) {
        (Some(line), Some(block)) => Some(line.min(block)),
        (line, block) => line.or(block),
    }
}

impl Comment {
    pub fn line(text: &str) -> Comment {
        Comment::Text(TextComment {
            multiline: false,
            text: text.to_owned(),
            suffix: String::new(),
            markers: Markers::EMPTY,
        })
    }

    pub fn block(text: &str) -> Comment {
        Comment::Text(TextComment {
            multiline: true,
            text: text.to_owned(),
            suffix: String::new(),
            markers: Markers::EMPTY,
        })
    }

    /// A block comment printed without its closing `*/`.
    pub fn unterminated_block(text: &str) -> Comment {
        Comment::Text(TextComment {
            multiline: true,
            text: text.to_owned(),
            suffix: String::new(),
            markers: Markers::EMPTY.add(Marker::new(kinds::UNTERMINATED)),
        })
    }

    pub fn suffix(&self) -> &str {
        match self {
            Comment::Text(comment) => &comment.suffix,
        }
    }

    pub fn markers(&self) -> &Markers {
        match self {
            Comment::Text(comment) => &comment.markers,
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comment::Text(comment) if comment.multiline => {
                if comment.markers.find(kinds::UNTERMINATED).is_some() {
                    write!(f, "/*{}{}", comment.text, comment.suffix)
                } else {
                    write!(f, "/*{}*/{}", comment.text, comment.suffix)
                }
            }
            Comment::Text(comment) => write!(f, "//{}{}", comment.text, comment.suffix),
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.whitespace)?;
        for comment in &self.comments {
            write!(f, "{}", comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_whitespace() {
        let space = Space::format("\n    ");
        assert!(space.comments.is_empty());
        assert_eq!(space.whitespace, "\n    ");
        assert_eq!(space.indent(), "    ");
    }

    #[test]
    fn test_format_separates_comments() {
        let text = "  // one\n  /* two */ \n\t";
        let space = Space::format(text);
        assert_eq!(space.whitespace, "  ");
        assert_eq!(space.comments.len(), 2);
        assert_eq!(space.comments[0], {
            let mut c = Comment::line(" one");
            if let Comment::Text(t) = &mut c {
                t.suffix = "\n  ".into();
            }
            c
        });
        assert_eq!(space.comments[1].suffix(), " \n\t");
        assert_eq!(space.to_string(), text);
    }

    #[test]
    fn test_format_unterminated_block() {
        let space = Space::format(" /* open");
        assert_eq!(space.whitespace, " ");
        assert_eq!(space.comments.len(), 1);
        let Comment::Text(comment) = &space.comments[0];
        assert!(comment.multiline);
        assert_eq!(comment.text, " open");
        assert!(comment.markers.find(kinds::UNTERMINATED).is_some());
        assert_eq!(space.to_string(), " /* open");

        let nested = Space::format("\n/* a */ // b\n/* c");
        assert_eq!(nested.to_string(), "\n/* a */ // b\n/* c");
        assert!(nested.comments[0].markers().find(kinds::UNTERMINATED).is_none());
    }

    #[test]
    fn test_empty_space() {
        assert!(Space::EMPTY.is_empty());
        assert!(Space::format("").is_empty());
        assert!(!Space::single_space().is_empty());
    }
}
