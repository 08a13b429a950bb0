//! Threaded comments: parent checks and reply-tree assembly.
//!
//! Comments reference their parent by id only. A reply tree is built in
//! memory from the flat list of an article's comments; ownership never
//! follows the parent link.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Anything that can be placed in a reply tree.
pub trait ThreadItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// One comment together with its direct replies.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub replies: Vec<ThreadNode<T>>,
}

/// Assemble a reply tree from a flat list of comments of one article.
///
/// Roots are comments without a parent, or whose parent is not in `items`.
/// Siblings are ordered by id. Items caught in a parent cycle cannot be
/// reached from any root; they are returned as reply-less roots after the
/// regular ones.
pub fn build_thread<T: ThreadItem>(mut items: Vec<T>) -> Vec<ThreadNode<T>> {
    items.sort_by_key(ThreadItem::id);
    let present: HashSet<DbId> = items.iter().map(ThreadItem::id).collect();

    let mut roots = Vec::new();
    let mut children: HashMap<DbId, Vec<T>> = HashMap::new();
    for item in items {
        match item.parent_id() {
            Some(parent) if present.contains(&parent) => {
                children.entry(parent).or_default().push(item);
            }
            _ => roots.push(item),
        }
    }

    let mut tree: Vec<ThreadNode<T>> = roots
        .into_iter()
        .map(|root| attach(root, &mut children))
        .collect();

    let mut stranded: Vec<T> = children.into_values().flatten().collect();
    stranded.sort_by_key(ThreadItem::id);
    tree.extend(stranded.into_iter().map(|item| ThreadNode {
        item,
        replies: Vec::new(),
    }));
    tree
}

fn attach<T: ThreadItem>(item: T, children: &mut HashMap<DbId, Vec<T>>) -> ThreadNode<T> {
    let replies = children
        .remove(&item.id())
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach(child, children))
        .collect();
    ThreadNode { item, replies }
}

/// The stored facts about a proposed parent comment.
#[derive(Debug, Clone, Copy)]
pub struct ParentRef {
    pub id: DbId,
    pub article_id: DbId,
}

/// Check that `parent` may become the parent of a comment on `article_id`.
///
/// `comment_id` is `None` for a comment being created. `parent_ancestors`
/// lists every comment above `parent` in its chain.
pub fn check_parent(
    comment_id: Option<DbId>,
    article_id: DbId,
    parent: ParentRef,
    parent_ancestors: &[DbId],
) -> Result<(), CoreError> {
    if parent.article_id != article_id {
        return Err(CoreError::field(
            "parent",
            "Parent comment belongs to a different article.",
        ));
    }
    if let Some(id) = comment_id {
        if parent.id == id {
            return Err(CoreError::field(
                "parent",
                "A comment cannot be its own parent.",
            ));
        }
        if parent_ancestors.contains(&id) {
            return Err(CoreError::field(
                "parent",
                "Parent would make the comment a reply to its own reply.",
            ));
        }
    }
    Ok(())
}
