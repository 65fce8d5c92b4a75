//! Rooted tree with integer-keyed children
//!
//! Every node stores an id, an optional value and its children ordered by id.
//! The root has id 0 and no value.

use std::collections::BTreeMap;
use std::fmt;

/// A node and its ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<E> {
    pub id: usize,
    pub value: Option<E>,
    children: BTreeMap<usize, TreeNode<E>>,
}

impl<E> TreeNode<E> {
    fn new(id: usize, value: Option<E>) -> Self {
        Self {
            id,
            value,
            children: BTreeMap::new(),
        }
    }

    /// Adds child `id`; returns false and leaves it untouched if present
    pub fn add(&mut self, id: usize, value: E) -> bool {
        if self.children.contains_key(&id) {
            return false;
        }
        self.children.insert(id, TreeNode::new(id, Some(value)));
        true
    }

    /// Detaches child `id` together with its subtree
    pub fn remove(&mut self, id: usize) -> Option<TreeNode<E>> {
        self.children.remove(&id)
    }

    pub fn contains(&self, id: usize) -> bool {
        self.children.contains_key(&id)
    }

    /// Value of child `id`
    pub fn get(&self, id: usize) -> Option<&E> {
        self.children.get(&id)?.value.as_ref()
    }

    /// Replaces the value of child `id`, returning the old one
    ///
    /// Does nothing if there is no such child.
    pub fn set(&mut self, id: usize, value: E) -> Option<E> {
        self.children
            .get_mut(&id)
            .and_then(|child| child.value.replace(value))
    }

    pub fn child(&self, id: usize) -> Option<&TreeNode<E>> {
        self.children.get(&id)
    }

    pub fn child_mut(&mut self, id: usize) -> Option<&mut TreeNode<E>> {
        self.children.get_mut(&id)
    }

    /// Children in ascending id order
    pub fn children(&self) -> impl Iterator<Item = &TreeNode<E>> + '_ {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A rooted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<E> {
    pub root: TreeNode<E>,
}

impl<E> Tree<E> {
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(0, None),
        }
    }

    /// Walks from the root along `path`, creating missing nodes
    ///
    /// Existing nodes keep their values. Returns the node at the end of the path.
    pub fn insert_path<I>(&mut self, path: I) -> &mut TreeNode<E>
    where
        I: IntoIterator<Item = (usize, E)>,
    {
        let mut node = &mut self.root;
        for (id, value) in path {
            node = node
                .children
                .entry(id)
                .or_insert_with(|| TreeNode::new(id, Some(value)));
        }
        node
    }

    /// Follows `ids` from the root
    pub fn find(&self, ids: &[usize]) -> Option<&TreeNode<E>> {
        ids.iter().try_fold(&self.root, |node, id| node.child(*id))
    }

    pub fn find_mut(&mut self, ids: &[usize]) -> Option<&mut TreeNode<E>> {
        ids.iter()
            .try_fold(&mut self.root, |node, id| node.child_mut(*id))
    }
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn write_node<E: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &TreeNode<E>,
    depth: usize,
) -> fmt::Result {
    if depth > 0 {
        writeln!(f)?;
    }
    write!(f, "{:indent$}{}(", "", node.id, indent = 4 * depth)?;
    match &node.value {
        Some(value) => write!(f, "{})", value)?,
        None => write!(f, "-)")?,
    }
    for child in node.children.values() {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}

/// Depth-first dump, four spaces per level, children in id order
impl<E: fmt::Display> fmt::Display for Tree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Tree<char> {
        let mut tree = Tree::new();
        for word in ["abc", "ijk", "ijpq", "xyz"] {
            tree.insert_path(word.chars().map(|c| (c as usize - 'a' as usize, c)));
        }
        tree
    }

    #[test]
    fn test_insert_paths() {
        let tree = letters();
        assert_eq!(tree.root.children().count(), 3);

        let j = tree.find(&[8, 9]).unwrap();
        assert_eq!(j.value, Some('j'));
        assert!(j.contains(10));
        assert!(j.contains(15));
        assert_eq!(tree.find(&[23]).unwrap().get(24), Some(&'y'));
        assert!(tree.find(&[1]).is_none());
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = letters();
        let j = tree.find_mut(&[8, 9]).unwrap();
        let removed = j.remove(15).unwrap();
        assert_eq!(removed.get(16), Some(&'q'));
        assert!(!j.contains(15));
        assert!(j.remove(15).is_none());
    }

    #[test]
    fn test_add_and_set() {
        let mut tree = letters();
        let i = tree.find_mut(&[8]).unwrap();
        assert!(!i.add(9, 'z'));
        assert_eq!(i.get(9), Some(&'j'));

        assert_eq!(i.set(9, 'p'), Some('j'));
        assert_eq!(i.get(9), Some(&'p'));
        assert_eq!(i.set(3, 'd'), None);
        assert!(!i.contains(3));
    }

    #[test]
    fn test_display() {
        let mut tree = Tree::new();
        tree.insert_path([(1, 'b'), (2, 'c')]);
        tree.insert_path([(0, 'a')]);
        assert_eq!(tree.to_string(), "0(-)\n    0(a)\n    1(b)\n        2(c)");
    }
}
