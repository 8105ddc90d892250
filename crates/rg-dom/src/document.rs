//! Document: element tree plus pointer event listeners
//!
//! Listeners are registered either on the document itself or on an element.
//! Element listeners only see targeted events ([`PointerEvent::Press`] and
//! [`PointerEvent::Click`]) whose position hits the element or one of its
//! descendants; they run deepest first, like a bubbling DOM event. Document
//! listeners see every event of their kind after the element listeners ran.
//!
//! Every registration returns a [`ListenerHandle`]. Removing a handle removes
//! exactly that listener, so several widgets can share one document.

use crate::element::{Element, ElementId};
use crate::event::{EventKind, PointerEvent};
use crate::hit_test::hit_test_point;
use crate::primitives::Rect;
use crate::query::{assign_auto_ids, element_at, ElementPath};

/// Callback invoked for a dispatched event, with mutable access to the markup
pub type ListenerFn = Box<dyn FnMut(&PointerEvent, &mut Element)>;

/// Where a listener is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerTarget {
    Document,
    Element(ElementId),
}

/// Handle returned by listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

struct Listener {
    handle: ListenerHandle,
    target: ListenerTarget,
    kind: EventKind,
    callback: ListenerFn,
}

/// Owns the markup tree and its listeners
pub struct Document {
    root: Element,
    listeners: Vec<Listener>,
    next_handle: u64,
    next_auto_id: u64,
}

impl Document {
    /// Create a document around `root`, assigning ids to elements without one
    pub fn new(mut root: Element) -> Self {
        let mut next_auto_id = 0;
        assign_auto_ids(&mut root, &mut next_auto_id);
        Self {
            root,
            listeners: Vec::new(),
            next_handle: 0,
            next_auto_id,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the markup
    ///
    /// Call [`Document::compute_layout`] afterwards if sizes changed.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Run a layout pass over the whole tree
    pub fn compute_layout(&mut self, viewport: Rect) {
        assign_auto_ids(&mut self.root, &mut self.next_auto_id);
        self.root.compute_layout(viewport);
    }

    /// Id of the element at `path`, if it exists
    ///
    /// Elements added through [`Document::root_mut`] get their auto id here.
    /// Ids stay with their element when siblings are removed or inserted.
    pub fn element_id(&mut self, path: &ElementPath) -> Option<ElementId> {
        assign_auto_ids(&mut self.root, &mut self.next_auto_id);
        element_at(&self.root, path).and_then(|element| element.id().cloned())
    }

    /// Register a listener and return its handle
    pub fn add_listener(
        &mut self,
        target: ListenerTarget,
        kind: EventKind,
        callback: impl FnMut(&PointerEvent, &mut Element) + 'static,
    ) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("add listener {:?} on {:?} for {:?}", handle, target, kind);
        self.listeners.push(Listener {
            handle,
            target,
            kind,
            callback: Box::new(callback),
        });
        handle
    }

    /// Remove a listener, returning whether it was still registered
    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.handle != handle);
        let removed = self.listeners.len() != before;
        if removed {
            log::debug!("removed listener {:?}", handle);
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners attached to the document itself
    pub fn document_listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.target == ListenerTarget::Document)
            .count()
    }

    /// Detach the subtree at `path` together with every listener targeting it
    ///
    /// The root itself cannot be removed.
    pub fn remove_element(&mut self, path: &ElementPath) -> Option<Element> {
        let (&last, parent_indices) = path.indices().split_last()?;
        let parent_path = ElementPath::new(parent_indices.to_vec());
        let parent = crate::query::element_at_mut(&mut self.root, &parent_path)?;
        if last >= parent.children.len() {
            return None;
        }
        let removed = parent.children.remove(last);

        let mut ids = Vec::new();
        collect_ids(&removed, &mut ids);
        self.listeners.retain(|l| match &l.target {
            ListenerTarget::Element(id) => !ids.contains(id),
            ListenerTarget::Document => true,
        });
        Some(removed)
    }

    /// Dispatch an event and return how many listeners ran
    pub fn dispatch(&mut self, event: &PointerEvent) -> usize {
        let kind = event.kind();

        // Deepest element first
        let chain: Vec<ElementId> = if event.is_targeted() {
            hit_test_point(&self.root, event.position())
                .into_iter()
                .rev()
                .collect()
        } else {
            Vec::new()
        };

        let Self {
            root, listeners, ..
        } = self;
        let mut invoked = 0;

        for id in &chain {
            for listener in listeners.iter_mut().filter(|l| {
                l.kind == kind
                    && matches!(&l.target, ListenerTarget::Element(target) if target == id)
            }) {
                (listener.callback)(event, &mut *root);
                invoked += 1;
            }
        }

        for listener in listeners
            .iter_mut()
            .filter(|l| l.kind == kind && l.target == ListenerTarget::Document)
        {
            (listener.callback)(event, &mut *root);
            invoked += 1;
        }

        invoked
    }
}

fn collect_ids(element: &Element, ids: &mut Vec<ElementId>) {
    if let Some(id) = element.id() {
        ids.push(id.clone());
    }
    for child in &element.children {
        collect_ids(child, ids);
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
