//! Tree queries over element markup
//!
//! All searches walk the tree in pre-order (an element before its children,
//! children in document order) and only consider descendants of the element
//! they start from. The first match in that order wins even when a shallower
//! match exists in a later sibling subtree.

use crate::element::{Element, ElementId};

/// Child indices leading from a root element to one of its descendants
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    /// Path of the root element itself
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Find the first descendant carrying `class` in pre-order
pub fn find_first_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    let path = path_of_first_by_class(root, class)?;
    element_at(root, &path)
}

/// Like [`find_first_by_class`] but returns the path to the match
pub fn path_of_first_by_class(root: &Element, class: &str) -> Option<ElementPath> {
    let mut path = Vec::new();
    if find_recursive(root, class, &mut path) {
        Some(ElementPath(path))
    } else {
        None
    }
}

fn find_recursive(element: &Element, class: &str, path: &mut Vec<usize>) -> bool {
    for (idx, child) in element.children.iter().enumerate() {
        path.push(idx);
        if child.has_class(class) || find_recursive(child, class, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Resolve a path to an element
pub fn element_at<'a>(root: &'a Element, path: &ElementPath) -> Option<&'a Element> {
    path.0
        .iter()
        .try_fold(root, |element, &idx| element.children.get(idx))
}

/// Resolve a path to a mutable element
pub fn element_at_mut<'a>(root: &'a mut Element, path: &ElementPath) -> Option<&'a mut Element> {
    path.0
        .iter()
        .try_fold(root, |element, &idx| element.children.get_mut(idx))
}

/// Find the path of the element with the given id (root included)
pub fn path_of_id(root: &Element, id: &ElementId) -> Option<ElementPath> {
    fn walk(element: &Element, id: &ElementId, path: &mut Vec<usize>) -> bool {
        if element.id() == Some(id) {
            return true;
        }
        for (idx, child) in element.children.iter().enumerate() {
            path.push(idx);
            if walk(child, id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(ElementPath(path))
}

/// Give every element without an id a fresh one, in pre-order
///
/// Ids are drawn from `next_id`, which the caller keeps across calls so an id
/// is never handed out twice, even after elements are removed or reordered.
/// Listeners target elements by id, so this must run before an element without
/// an explicit id can receive element listeners.
pub fn assign_auto_ids(root: &mut Element, next_id: &mut u64) {
    if root.id().is_none() {
        root.set_auto_id(ElementId::new(format!("__auto_{}", next_id)));
        *next_id += 1;
    }

    for child in &mut root.children {
        assign_auto_ids(child, next_id);
    }
}
