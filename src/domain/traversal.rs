//! Depth-first and breadth-first walks over the category tree.
//!
//! Both walks are lazy iterators borrowing the tree; they never mutate it and
//! can be restarted by creating a new iterator.

use std::collections::VecDeque;
use std::fmt;

use crate::domain::entities::PlaceId;
use crate::domain::tree::{CategoryNode, CategoryTree, SubcategoryNode};

/// One emitted `(category, subcategory, place)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub category: &'a str,
    pub subcategory: &'a str,
    pub place: PlaceId,
}

/// Which walk to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    Dfs,
    Bfs,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Dfs => write!(f, "depth-first"),
            TraversalOrder::Bfs => write!(f, "breadth-first"),
        }
    }
}

/// Start a walk of `tree` in the given order.
pub fn traverse(
    tree: &CategoryTree,
    order: TraversalOrder,
) -> Box<dyn Iterator<Item = Visit<'_>> + '_> {
    match order {
        TraversalOrder::Dfs => Box::new(DepthFirst::new(tree)),
        TraversalOrder::Bfs => Box::new(BreadthFirst::new(tree)),
    }
}

enum Frame<'a> {
    Category(&'a CategoryNode),
    Bucket(&'a CategoryNode, &'a SubcategoryNode),
    Place(&'a CategoryNode, &'a SubcategoryNode, PlaceId),
}

/// Stack based depth-first walk.
///
/// Visiting a category pushes its subcategories, visiting a subcategory pushes
/// its places. Children are pushed in reverse so they pop in insertion order.
pub struct DepthFirst<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> DepthFirst<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        let stack = tree.nodes().iter().rev().map(Frame::Category).collect();
        Self { stack }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Category(category) => {
                    for bucket in category.subcategories.iter().rev() {
                        self.stack.push(Frame::Bucket(category, bucket));
                    }
                }
                Frame::Bucket(category, bucket) => {
                    for &place in bucket.places.iter().rev() {
                        self.stack.push(Frame::Place(category, bucket, place));
                    }
                }
                Frame::Place(category, bucket, place) => {
                    return Some(Visit {
                        category: &category.name,
                        subcategory: &bucket.name,
                        place,
                    });
                }
            }
        }
        None
    }
}

/// Queue based walk over categories.
///
/// Each dequeued category is expanded completely (subcategories, then their
/// places) before the next category is taken from the queue. It is layered at
/// the category level only, not a level-order walk of the whole tree.
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a CategoryNode>,
    pending: VecDeque<Visit<'a>>,
}

impl<'a> BreadthFirst<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self {
            queue: tree.nodes().iter().collect(),
            pending: VecDeque::new(),
        }
    }

    fn expand(&mut self, category: &'a CategoryNode) {
        for bucket in &category.subcategories {
            for &place in &bucket.places {
                self.pending.push_back(Visit {
                    category: &category.name,
                    subcategory: &bucket.name,
                    place,
                });
            }
        }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(visit) = self.pending.pop_front() {
                return Some(visit);
            }
            let category = self.queue.pop_front()?;
            self.expand(category);
        }
    }
}
