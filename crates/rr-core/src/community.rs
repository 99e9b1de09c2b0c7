//! Groups, posts, comments and the like/dislike toggle.

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Comment, Group, Post, Reaction};

impl Group {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.contains(user_id)
    }

    /// Returns `true` if the user was not already a member.
    pub fn join(&mut self, user_id: &str) -> bool {
        self.members.insert(user_id.to_string())
    }

    /// Returns `true` if the user was a member.
    pub fn leave(&mut self, user_id: &str) -> bool {
        self.members.remove(user_id)
    }

    /// Inserts at the front so the feed stays newest-first.
    pub fn add_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn post_mut(&mut self, post_id: &str) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| AppError::not_found("Post", post_id))
    }
}

impl Post {
    pub fn new(id: String, author_id: &str, author_name: &str, content: &str, now: DateTime<Utc>) -> Self {
        Self {
            id,
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            content: content.to_string(),
            created_at: now,
            likes: Default::default(),
            dislikes: Default::default(),
            comments: Vec::new(),
        }
    }

    /// Likes and dislikes are mutually exclusive per user; repeating the same
    /// reaction withdraws it.
    pub fn toggle_reaction(&mut self, user_id: &str, reaction: Reaction) {
        let (target, opposite) = match reaction {
            Reaction::Like => (&mut self.likes, &mut self.dislikes),
            Reaction::Dislike => (&mut self.dislikes, &mut self.likes),
        };
        opposite.remove(user_id);
        if !target.remove(user_id) {
            target.insert(user_id.to_string());
        }
    }

    pub fn reaction_of(&self, user_id: &str) -> Option<Reaction> {
        if self.likes.contains(user_id) {
            Some(Reaction::Like)
        } else if self.dislikes.contains(user_id) {
            Some(Reaction::Dislike)
        } else {
            None
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post() -> Post {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        Post::new("p1".into(), "u9", "Cy", "Sourdough starter help?", now)
    }

    #[test]
    fn dislike_then_like_moves_user() {
        let mut p = post();
        p.toggle_reaction("u1", Reaction::Dislike);
        assert!(p.dislikes.contains("u1"));
        assert!(p.likes.is_empty());

        p.toggle_reaction("u1", Reaction::Like);
        assert!(p.likes.contains("u1"));
        assert!(p.dislikes.is_empty());
    }

    #[test]
    fn like_twice_withdraws() {
        let mut p = post();
        p.toggle_reaction("u1", Reaction::Like);
        p.toggle_reaction("u1", Reaction::Like);
        assert!(p.likes.is_empty());
        assert_eq!(p.reaction_of("u1"), None);
    }

    #[test]
    fn alternating_never_in_both_sets() {
        let mut p = post();
        let sequence = [
            Reaction::Like,
            Reaction::Dislike,
            Reaction::Dislike,
            Reaction::Like,
            Reaction::Like,
            Reaction::Dislike,
        ];
        for r in sequence {
            p.toggle_reaction("u1", r);
            assert!(!(p.likes.contains("u1") && p.dislikes.contains("u1")));
        }
        assert_eq!(p.reaction_of("u1"), Some(Reaction::Dislike));
    }

    #[test]
    fn other_users_reactions_are_independent() {
        let mut p = post();
        p.toggle_reaction("u1", Reaction::Like);
        p.toggle_reaction("u2", Reaction::Dislike);
        p.toggle_reaction("u1", Reaction::Dislike);
        assert_eq!(p.reaction_of("u2"), Some(Reaction::Dislike));
        assert_eq!(p.dislikes.len(), 2);
        assert!(p.likes.is_empty());
    }

    #[test]
    fn comments_are_newest_first() {
        let mut p = post();
        let at = p.created_at;
        for (i, text) in ["first", "second"].iter().enumerate() {
            p.add_comment(Comment {
                id: format!("c{i}"),
                author_id: "u1".into(),
                author_name: "Al".into(),
                content: text.to_string(),
                created_at: at,
            });
        }
        assert_eq!(p.comments[0].content, "second");
    }
}
