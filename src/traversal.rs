//! Generic tree traversal
//!
//!     Walks any node type given a root and a child accessor, visiting every reachable node
//!     once. Breadth-first keeps a FIFO queue of pending nodes, depth-first a LIFO stack.
//!     Both are explicit containers rather than recursion, so deeply nested documents cannot
//!     exhaust the call stack.
//!
//!     Sibling order: depth-first pushes a node's children in reverse so that they pop left
//!     to right. Both orders therefore visit siblings in document order.
//!
//!     Laziness: a node's children are requested only when the iterator advances past that
//!     node. An action run on the yielded node (see [apply_to_all]) happens before its
//!     children are queried, and a failing accessor leaves already yielded nodes yielded.
//!
//!     There are two entry points:
//!         - [traverse] / [traverse_many] / [apply_to_all] take a fallible closure and work on
//!           any `T: Clone` (typically `&Node`, an `Rc`, or an arena index).
//!         - [HasChildren] is for trees whose nodes own their children; its provided methods
//!           cannot fail.
//!
//!     Shared nodes and cycles are the accessor's responsibility: the engine keeps no
//!     visited set. A node reported as a child of two parents is visited once per parent,
//!     and an accessor that reports an ancestor as a child makes the walk unbounded.

use crate::error::{BoxError, TraversalError};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Visitation strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Level by level, via a queue
    #[default]
    BreadthFirst,
    /// Pre-order, via a stack
    DepthFirst,
}

/// Pending nodes: popped from the front as a queue, or from the back as a stack
#[derive(Debug)]
struct Frontier<T> {
    order: TraversalOrder,
    pending: VecDeque<T>,
    scratch: Vec<T>,
}

impl<T> Frontier<T> {
    fn new(order: TraversalOrder, roots: impl IntoIterator<Item = T>) -> Self {
        let mut frontier = Frontier {
            order,
            pending: VecDeque::new(),
            scratch: Vec::new(),
        };
        frontier.push_all(roots);
        frontier
    }

    fn pop(&mut self) -> Option<T> {
        match self.order {
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
            TraversalOrder::DepthFirst => self.pending.pop_back(),
        }
    }

    fn push_all(&mut self, nodes: impl IntoIterator<Item = T>) {
        match self.order {
            TraversalOrder::BreadthFirst => self.pending.extend(nodes),
            TraversalOrder::DepthFirst => {
                // Reverse so the first child is on top of the stack
                self.scratch.extend(nodes);
                self.pending.extend(self.scratch.drain(..).rev());
            }
        }
    }

    fn len(&self) -> usize {
        self.pending.len()
    }
}

/// Lazy traversal driven by a fallible child accessor
///
/// Yields `Ok(node)` for every visited node. After the first error the iterator is
/// exhausted.
pub struct Traverse<T, F, I, E> {
    frontier: Frontier<T>,
    children: F,
    /// Last yielded node, whose children have not been requested yet
    expand: Option<T>,
    failed: bool,
    _accessor: PhantomData<fn() -> (I, E)>,
}

/// Walk the tree under `root`
///
/// `children` maps a node to its ordered children; `Ok(None)` means the node has none.
/// Fails with [TraversalError::InvalidArgument] when no accessor is supplied, before any
/// node is visited.
pub fn traverse<T, F, I, E>(
    root: T,
    children: Option<F>,
    order: TraversalOrder,
) -> Result<Traverse<T, F, I, E>, TraversalError>
where
    F: FnMut(&T) -> Result<Option<I>, E>,
    I: IntoIterator<Item = T>,
{
    traverse_many(std::iter::once(root), children, order)
}

/// Walk several trees in sequence, seeding the queue/stack with every root in order
pub fn traverse_many<T, F, I, E>(
    roots: impl IntoIterator<Item = T>,
    children: Option<F>,
    order: TraversalOrder,
) -> Result<Traverse<T, F, I, E>, TraversalError>
where
    F: FnMut(&T) -> Result<Option<I>, E>,
    I: IntoIterator<Item = T>,
{
    let children = children.ok_or(TraversalError::InvalidArgument("children"))?;
    let frontier = Frontier::new(order, roots);
    tracing::debug!(?order, roots = frontier.len(), "starting traversal");

    Ok(Traverse {
        frontier,
        children,
        expand: None,
        failed: false,
        _accessor: PhantomData,
    })
}

impl<T, F, I, E> Iterator for Traverse<T, F, I, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<I>, E>,
    I: IntoIterator<Item = T>,
    E: Into<BoxError>,
{
    type Item = Result<T, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(parent) = self.expand.take() {
            match (self.children)(&parent) {
                Ok(Some(children)) => self.frontier.push_all(children),
                Ok(None) => {}
                Err(err) => {
                    self.failed = true;
                    self.frontier.pending.clear();
                    return Some(Err(TraversalError::Children(err.into())));
                }
            }
        }

        let node = self.frontier.pop()?;
        tracing::trace!(pending = self.frontier.len(), "visiting node");
        self.expand = Some(node.clone());
        Some(Ok(node))
    }
}

impl<T, F, I, E> FusedIterator for Traverse<T, F, I, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<I>, E>,
    I: IntoIterator<Item = T>,
    E: Into<BoxError>,
{
}

/// Run `action` on every node under `root`, in traversal order
///
/// Returns the number of nodes visited. The first failure, from either the accessor or the
/// action, stops the walk; side effects of earlier actions are not undone.
pub fn apply_to_all<T, F, I, E, A, AE>(
    root: T,
    children: Option<F>,
    order: TraversalOrder,
    mut action: A,
) -> Result<usize, TraversalError>
where
    T: Clone,
    F: FnMut(&T) -> Result<Option<I>, E>,
    I: IntoIterator<Item = T>,
    E: Into<BoxError>,
    A: FnMut(&T) -> Result<(), AE>,
    AE: Into<BoxError>,
{
    let mut visited = 0;
    for node in traverse(root, children, order)? {
        let node = node?;
        action(&node).map_err(|err| TraversalError::Action(err.into()))?;
        visited += 1;
    }
    Ok(visited)
}

/// A node that owns its ordered children
///
/// Implementing the single `children` accessor gives a node type infallible walks in
/// either order.
pub trait HasChildren: Sized {
    fn children(&self) -> &[Self];

    /// Lazily visit this node and all its descendants
    fn walk(&self, order: TraversalOrder) -> Nodes<'_, Self> {
        Nodes {
            frontier: Frontier::new(order, std::iter::once(self)),
        }
    }

    /// Apply `action` to every node, breadth-first
    fn apply_recursive<A: FnMut(&Self)>(&self, action: A) {
        self.walk(TraversalOrder::BreadthFirst).for_each(action);
    }

    /// Apply `action` to every node, depth-first
    fn apply_recursive_depth_first<A: FnMut(&Self)>(&self, action: A) {
        self.walk(TraversalOrder::DepthFirst).for_each(action);
    }
}

/// Iterator returned by [HasChildren::walk]
pub struct Nodes<'a, N> {
    frontier: Frontier<&'a N>,
}

impl<'a, N: HasChildren> Iterator for Nodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        let node = self.frontier.pop()?;
        self.frontier.push_all(node.children());
        Some(node)
    }
}

impl<N: HasChildren> FusedIterator for Nodes<'_, N> {}
