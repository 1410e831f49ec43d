//! Element abstraction and ancestor search used by the click router.
//!
//! The search is written against [`DomNode`] rather than `web_sys::Element`
//! so it runs (and is tested) without a live page.

/// The slice of element behaviour the router needs.
pub trait DomNode: Sized {
    /// Parent element, `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;
    fn has_class(&self, class: &str) -> bool;
    /// Case-insensitive tag comparison (`"tr"` matches `<TR>`).
    fn tag_is(&self, tag: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn same_node(&self, other: &Self) -> bool;
}

/// Walks from `target` (inclusive) towards `root` (inclusive) and returns the
/// first node accepted by `pred`. Never looks above `root`; the router passes
/// `<html>` so the walk matches `Element.closest`.
pub fn find_ancestor<N, F>(target: &N, root: &N, pred: F) -> Option<N>
where
    N: DomNode + Clone,
    F: Fn(&N) -> bool,
{
    let mut cur = Some(target.clone());
    while let Some(node) = cur {
        if pred(&node) {
            return Some(node);
        }
        if node.same_node(root) {
            return None;
        }
        cur = node.parent();
    }
    None
}

/// Nearest node at or above `target` tagged with the `marker` class.
pub fn find_marked_ancestor<N: DomNode + Clone>(target: &N, root: &N, marker: &str) -> Option<N> {
    find_ancestor(target, root, |n| n.has_class(marker))
}

/// Nearest node at or above `node` with the given tag name.
pub fn find_enclosing<N: DomNode + Clone>(node: &N, root: &N, tag: &str) -> Option<N> {
    find_ancestor(node, root, |n| n.tag_is(tag))
}

impl DomNode for web_sys::Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn tag_is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn same_node(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other;
        self.is_same_node(Some(other))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DomNode;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct Inner {
        tag: String,
        classes: Vec<String>,
        attrs: HashMap<String, String>,
        parent: Option<FakeNode>,
    }

    /// Tiny immutable element tree for exercising the search.
    #[derive(Clone)]
    pub struct FakeNode(Rc<Inner>);

    impl FakeNode {
        pub fn root(tag: &str) -> Self {
            Self::build(tag, &[], &[], None)
        }

        pub fn child(&self, tag: &str, classes: &[&str], attrs: &[(&str, &str)]) -> Self {
            Self::build(tag, classes, attrs, Some(self.clone()))
        }

        fn build(tag: &str, classes: &[&str], attrs: &[(&str, &str)], parent: Option<FakeNode>) -> Self {
            FakeNode(Rc::new(Inner {
                tag: tag.to_string(),
                classes: classes.iter().map(|c| c.to_string()).collect(),
                attrs: attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                parent,
            }))
        }

        pub fn tag(&self) -> &str {
            &self.0.tag
        }
    }

    impl std::fmt::Debug for FakeNode {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "<{} class={:?}>", self.0.tag, self.0.classes)
        }
    }

    impl DomNode for FakeNode {
        fn parent(&self) -> Option<Self> {
            self.0.parent.clone()
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.classes.iter().any(|c| c == class)
        }

        fn tag_is(&self, tag: &str) -> bool {
            self.0.tag.eq_ignore_ascii_case(tag)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.attrs.get(name).cloned()
        }

        fn same_node(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }
}
