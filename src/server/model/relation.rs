//! Paired forward/reverse indexes for bidirectional associations.
//!
//! Each index owns both directions of one association and only exposes mutations
//! that update the two directions together, so a link can never be visible from one
//! side and missing from the other. The in-memory store composes these indexes instead
//! of storing references between records.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// Many-to-many association, e.g. beers and their categories.
#[derive(Debug, Clone)]
pub struct ManyToMany<L, R> {
    forward: HashMap<L, HashSet<R>>,
    reverse: HashMap<R, HashSet<L>>,
}

impl<L, R> Default for ManyToMany<L, R> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }
}

impl<L, R> ManyToMany<L, R>
where
    L: Copy + Eq + Hash,
    R: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `left` and `right`. Returns false when they were already linked.
    pub fn link(&mut self, left: L, right: R) -> bool {
        let inserted = self.forward.entry(left).or_default().insert(right);
        self.reverse.entry(right).or_default().insert(left);
        inserted
    }

    /// Removes the link between `left` and `right`. Returns false when none existed.
    pub fn unlink(&mut self, left: L, right: R) -> bool {
        let removed = remove_from(&mut self.forward, &left, &right);
        remove_from(&mut self.reverse, &right, &left);
        removed
    }

    pub fn contains(&self, left: &L, right: &R) -> bool {
        self.forward
            .get(left)
            .is_some_and(|rights| rights.contains(right))
    }

    /// Values linked to `left`.
    pub fn rights_of(&self, left: &L) -> Vec<R> {
        self.forward
            .get(left)
            .map(|rights| rights.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Values linked to `right`.
    pub fn lefts_of(&self, right: &R) -> Vec<L> {
        self.reverse
            .get(right)
            .map(|lefts| lefts.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Drops every link of `left` from both directions.
    pub fn remove_left(&mut self, left: &L) {
        if let Some(rights) = self.forward.remove(left) {
            for right in rights {
                remove_from(&mut self.reverse, &right, left);
            }
        }
    }

    /// Drops every link of `right` from both directions.
    pub fn remove_right(&mut self, right: &R) {
        if let Some(lefts) = self.reverse.remove(right) {
            for left in lefts {
                remove_from(&mut self.forward, &left, right);
            }
        }
    }
}

/// One-to-many association where each child has at most one parent,
/// e.g. a customer and its orders.
#[derive(Debug, Clone)]
pub struct OneToMany<P, C> {
    children: HashMap<P, HashSet<C>>,
    parent: HashMap<C, P>,
}

impl<P, C> Default for OneToMany<P, C> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            parent: HashMap::new(),
        }
    }
}

impl<P, C> OneToMany<P, C>
where
    P: Copy + Eq + Hash,
    C: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `parent` to `child`, moving the child out of its previous parent's set.
    ///
    /// Returns the previous parent when it differs from the new one.
    pub fn set_parent(&mut self, child: C, parent: P) -> Option<P> {
        let previous = self.parent.insert(child, parent);

        if let Some(old) = previous {
            if old == parent {
                return None;
            }
            remove_from(&mut self.children, &old, &child);
        }

        self.children.entry(parent).or_default().insert(child);
        previous
    }

    pub fn parent_of(&self, child: &C) -> Option<P> {
        self.parent.get(child).copied()
    }

    pub fn children_of(&self, parent: &P) -> Vec<C> {
        self.children
            .get(parent)
            .map(|children| children.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self, parent: &P) -> bool {
        self.children
            .get(parent)
            .is_some_and(|children| !children.is_empty())
    }

    /// Detaches `child` from its parent.
    pub fn remove_child(&mut self, child: &C) -> Option<P> {
        let parent = self.parent.remove(child)?;
        remove_from(&mut self.children, &parent, child);
        Some(parent)
    }

    /// Detaches every child of `parent` and returns them.
    pub fn remove_parent(&mut self, parent: &P) -> Vec<C> {
        let children: Vec<C> = self
            .children
            .remove(parent)
            .map(|children| children.into_iter().collect())
            .unwrap_or_default();

        for child in &children {
            self.parent.remove(child);
        }

        children
    }
}

/// One-to-one association, e.g. an order and its shipment.
#[derive(Debug, Clone)]
pub struct OneToOne<A, B> {
    forward: HashMap<A, B>,
    reverse: HashMap<B, A>,
}

impl<A, B> Default for OneToOne<A, B> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }
}

impl<A, B> OneToOne<A, B>
where
    A: Copy + Eq + Hash,
    B: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `a` and `b`, releasing any earlier partner of either side.
    pub fn link(&mut self, a: A, b: B) {
        if let Some(old_b) = self.forward.insert(a, b) {
            self.reverse.remove(&old_b);
        }
        if let Some(old_a) = self.reverse.insert(b, a) {
            if old_a != a {
                self.forward.remove(&old_a);
            }
        }
    }

    pub fn right_of(&self, a: &A) -> Option<B> {
        self.forward.get(a).copied()
    }

    pub fn left_of(&self, b: &B) -> Option<A> {
        self.reverse.get(b).copied()
    }

    /// Removes `a` and its partner link. Returns the released partner.
    pub fn remove_left(&mut self, a: &A) -> Option<B> {
        let b = self.forward.remove(a)?;
        self.reverse.remove(&b);
        Some(b)
    }
}

fn remove_from<K, V>(map: &mut HashMap<K, HashSet<V>>, key: &K, value: &V) -> bool
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    let Some(set) = map.get_mut(key) else {
        return false;
    };
    let removed = set.remove(value);
    if set.is_empty() {
        map.remove(key);
    }
    removed
}
