//! Reference cells and reference maps.

use super::{Element, TagId};
use crate::error::{Error, Result};
use crate::tag::Tag;
use indexmap::IndexMap;
use std::cell::OnceCell;
use std::fmt;
use std::ops::Index;
use std::panic::Location;
use std::rc::{Rc, Weak};

struct Cell {
    tag: TagId,
    label: Option<String>,
    origin: &'static Location<'static>,
    element: OnceCell<Element>,
}

/// A single-assignment slot bound to one tag.
///
/// A reference starts unassigned and accepts exactly one element whose
/// category and name match the bound tag. Clones share the same slot.
#[derive(Clone)]
pub struct Reference(Rc<Cell>);

impl Reference {
    /// Declare an unlabeled reference bound to `tag`.
    #[track_caller]
    pub fn new(tag: &Tag) -> Self {
        Self::declare_at(tag.id().clone(), None, Location::caller())
    }

    /// Declare a reference bound to `tag` with a debug label.
    #[track_caller]
    pub fn labeled(tag: &Tag, label: impl Into<String>) -> Self {
        Self::declare_at(tag.id().clone(), Some(label.into()), Location::caller())
    }

    pub(crate) fn declare_at(
        tag: TagId,
        label: Option<String>,
        origin: &'static Location<'static>,
    ) -> Self {
        Self(Rc::new(Cell {
            tag,
            label,
            origin,
            element: OnceCell::new(),
        }))
    }

    /// Identifier of the bound tag.
    pub fn tag(&self) -> &TagId {
        &self.0.tag
    }

    /// Debug label, if any.
    pub fn label(&self) -> Option<&str> {
        self.0.label.as_deref()
    }

    /// Source location where the reference was declared.
    pub fn origin(&self) -> &'static Location<'static> {
        self.0.origin
    }

    /// Get the assigned element, if any.
    pub fn get(&self) -> Option<Element> {
        self.0.element.get().cloned()
    }

    /// Check if an element has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.0.element.get().is_some()
    }

    /// Check if this reference is bound to `tag`.
    pub fn is_bound_to(&self, tag: &Tag) -> bool {
        self.0.tag == *tag.id()
    }

    /// Assign an element. Allowed exactly once.
    pub fn assign(&self, element: Element) -> Result<()> {
        if self.is_assigned() {
            return Err(self.already_assigned());
        }

        if !element.is(&self.0.tag) {
            return Err(Error::ReferenceTypeMismatch {
                expected: self.0.tag.name().to_string(),
                found: element.name().to_string(),
                label: self.0.label.clone(),
            });
        }

        log::debug!(
            "Assigning <{}> to reference {}",
            element.name(),
            self.label().unwrap_or("(unlabeled)")
        );

        self.0
            .element
            .set(element)
            .map_err(|_| self.already_assigned())
    }

    /// Read the assigned element for embedding, failing if still unassigned.
    pub fn resolve(&self) -> Result<Element> {
        self.get().ok_or_else(|| Error::UnresolvedReference {
            label: self.0.label.clone(),
        })
    }

    /// Check if both handles share the same cell.
    pub fn ptr_eq(&self, other: &Reference) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Create a non-owning handle to this cell.
    pub fn downgrade(&self) -> WeakReference {
        WeakReference(Rc::downgrade(&self.0))
    }

    fn already_assigned(&self) -> Error {
        Error::ReferenceAlreadyAssigned {
            tag: self.0.tag.name().to_string(),
            label: self.0.label.clone(),
        }
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Reference {}

// The assigned element is left out: a link payload may point back at an
// ancestor of itself.
impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("tag", &self.0.tag)
            .field("label", &self.0.label)
            .field("assigned", &self.is_assigned())
            .finish()
    }
}

/// A non-owning handle to a reference cell.
///
/// Link payloads hold this instead of a [`Reference`] so that a link
/// targeting one of its own ancestors does not keep that ancestor alive.
/// The cell stays reachable as long as some [`Reference`] to it exists,
/// normally the one held by the declaring [`Document`](super::Document).
#[derive(Clone)]
pub struct WeakReference(Weak<Cell>);

impl WeakReference {
    /// Get an owning handle, if the cell is still alive.
    pub fn upgrade(&self) -> Option<Reference> {
        self.0.upgrade().map(Reference)
    }

    /// Check if this handle points at `reference`'s cell.
    pub fn points_to(&self, reference: &Reference) -> bool {
        Weak::ptr_eq(&self.0, &Rc::downgrade(&reference.0))
    }
}

impl fmt::Debug for WeakReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(reference) => f.debug_tuple("WeakReference").field(&reference).finish(),
            None => f.write_str("WeakReference(dropped)"),
        }
    }
}

/// Named reference cells, in declaration order.
///
/// Indexing with `refs["name"]` panics if no reference is declared under
/// that name, like `HashMap` indexing. Use [`References::get`] to look a
/// name up without panicking.
#[derive(Debug, Clone, Default)]
pub struct References {
    cells: IndexMap<String, Reference>,
}

impl References {
    /// Create an empty reference map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one reference per `(name, tag)` entry, labeled with its name.
    ///
    /// A repeated name replaces the earlier declaration.
    #[track_caller]
    pub fn declare<'a, I, N>(declarations: I) -> Self
    where
        I: IntoIterator<Item = (N, &'a Tag)>,
        N: Into<String>,
    {
        let origin = Location::caller();
        let mut references = Self::new();
        for (name, tag) in declarations {
            let name = name.into();
            let reference = Reference::declare_at(tag.id().clone(), Some(name.clone()), origin);
            references.insert(name, reference);
        }
        references
    }

    /// Insert a reference under `name`, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, reference: Reference) -> Option<Reference> {
        self.cells.insert(name.into(), reference)
    }

    /// Get a reference by name.
    pub fn get(&self, name: &str) -> Option<&Reference> {
        self.cells.get(name)
    }

    /// Number of declared references.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no references are declared.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(name, reference)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reference)> {
        self.cells.iter().map(|(name, r)| (name.as_str(), r))
    }

    /// Names of the declared references.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Current element of every reference, in declaration order.
    pub fn elements(&self) -> Vec<Option<Element>> {
        self.cells.values().map(Reference::get).collect()
    }

    /// Names of references that have not been assigned yet.
    pub fn unassigned(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter(|(_, r)| !r.is_assigned())
            .map(|(name, _)| name.as_str())
    }
}

impl Index<&str> for References {
    type Output = Reference;

    /// Panics if no reference is declared under `name`; see [`References::get`].
    fn index(&self, name: &str) -> &Reference {
        match self.cells.get(name) {
            Some(reference) => reference,
            None => panic!("no reference declared under \"{}\"", name),
        }
    }
}

impl<'a> IntoIterator for &'a References {
    type Item = (&'a String, &'a Reference);
    type IntoIter = indexmap::map::Iter<'a, String, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
