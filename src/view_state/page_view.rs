//! Page view state
//!
//! Projects a loaded [`Document`] into the cards the page shows. The
//! projection is a pure function of the document: same input, same cards,
//! same keys, same order.

use std::fmt;

use crate::models::{truncate_excerpt, Category, Document, EntityId, Post, User, EXCERPT_CHARS};

// ============================================================================
// Render keys
// ============================================================================

/// Which collection a card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Post,
    Category,
}

impl EntityKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Author => "user",
            EntityKind::Post => "post",
            EntityKind::Category => "category",
        }
    }
}

/// Identity of a rendered card: the entity kind plus its id.
///
/// The kind keeps a user and a post with the same id from sharing a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl RenderKey {
    pub fn new(kind: EntityKind, id: &EntityId) -> Self {
        Self {
            kind,
            id: id.clone(),
        }
    }
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.prefix(), self.id)
    }
}

// ============================================================================
// Cards
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorCard<'a> {
    pub key: RenderKey,
    pub name: &'a str,
    pub username: &'a str,
    pub bio: &'a str,
    pub avatar: &'a str,
}

impl<'a> AuthorCard<'a> {
    pub fn from_user(user: &'a User) -> Self {
        Self {
            key: RenderKey::new(EntityKind::Author, &user.id),
            name: &user.name,
            username: &user.username,
            bio: &user.bio,
            avatar: &user.avatar,
        }
    }

    /// `@username` as shown under the name.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostCard<'a> {
    pub key: RenderKey,
    pub title: &'a str,
    /// Content cut to the excerpt length, always ending in `...`
    pub excerpt: String,
    /// Tags in source order, duplicates kept
    pub tags: Vec<&'a str>,
    pub cover_image: &'a str,
    pub published_at: &'a str,
    pub likes: i64,
}

impl<'a> PostCard<'a> {
    pub fn from_post(post: &'a Post) -> Self {
        Self {
            key: RenderKey::new(EntityKind::Post, &post.id),
            title: &post.title,
            excerpt: truncate_excerpt(&post.content, EXCERPT_CHARS),
            tags: post.tags.iter().map(String::as_str).collect(),
            cover_image: &post.cover_image,
            published_at: &post.published_at,
            likes: post.likes,
        }
    }

    pub fn published_label(&self) -> String {
        format!("Published: {}", self.published_at)
    }

    pub fn likes_label(&self) -> String {
        format!("{} Likes", self.likes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChip<'a> {
    pub key: RenderKey,
    pub name: &'a str,
}

impl<'a> CategoryChip<'a> {
    pub fn from_category(category: &'a Category) -> Self {
        Self {
            key: RenderKey::new(EntityKind::Category, &category.id),
            name: &category.name,
        }
    }
}

// ============================================================================
// PageView
// ============================================================================

/// Everything the ready page draws, borrowed from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub authors: Vec<AuthorCard<'a>>,
    pub posts: Vec<PostCard<'a>>,
    pub categories: Vec<CategoryChip<'a>>,
}

impl<'a> PageView<'a> {
    /// One card per entity, in document order.
    pub fn project(document: &'a Document) -> Self {
        Self {
            authors: document.users.iter().map(AuthorCard::from_user).collect(),
            posts: document.posts.iter().map(PostCard::from_post).collect(),
            categories: document
                .categories
                .iter()
                .map(CategoryChip::from_category)
                .collect(),
        }
    }

    /// Keys of every card, section by section.
    pub fn keys(&self) -> Vec<&RenderKey> {
        self.authors
            .iter()
            .map(|c| &c.key)
            .chain(self.posts.iter().map(|c| &c.key))
            .chain(self.categories.iter().map(|c| &c.key))
            .collect()
    }

    pub fn card_count(&self) -> usize {
        self.authors.len() + self.posts.len() + self.categories.len()
    }
}
