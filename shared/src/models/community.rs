use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// News item on the home page General tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub rating: u32,
}

impl PostAuthor {
    /// Two-letter badge shown in place of an avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Thread on the home page Community tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u32,
    pub title: String,
    pub author: PostAuthor,
    pub date: NaiveDate,
    pub content: String,
    pub replies: u32,
    pub likes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_author_initials() {
        let author = PostAuthor {
            name: "Magnus J.".to_string(),
            rating: 2145,
        };
        assert_eq!(author.initials(), "MJ");

        let single = PostAuthor {
            name: "emma".to_string(),
            rating: 950,
        };
        assert_eq!(single.initials(), "E");
    }
}
