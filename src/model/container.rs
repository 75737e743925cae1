//! Ordered container of events functions (the collection a list displays).

use super::function::EventsFunction;
use super::identifiers::{ContainerId, FunctionId, ListKey};
use serde::{Deserialize, Serialize, Serializer};

/// Ordered, host-owned sequence of events functions.
///
/// Serializes as a plain array of functions. Identities (the container's own
/// and those of its functions) are minted on construction and never written
/// out. A clone is a distinct container with an identity of its own.
#[derive(Debug, Deserialize)]
#[serde(from = "Vec<EventsFunction>")]
pub struct EventsFunctionsContainer {
    identity: ContainerId,
    owner: ContainerId,
    next_id: u64,
    items: Vec<EventsFunction>,
}

impl EventsFunctionsContainer {
    /// An empty container that owns itself (no enclosing document).
    pub fn new() -> Self {
        let identity = ContainerId::mint();
        Self {
            identity,
            owner: identity,
            next_id: 1,
            items: Vec::new(),
        }
    }

    /// Identity of this container.
    pub fn identity(&self) -> ContainerId {
        self.identity
    }

    /// Identity of the enclosing document, or its own when standalone.
    pub fn owner(&self) -> ContainerId {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: ContainerId) {
        self.owner = owner;
    }

    /// Key under which a list widget displays this container.
    pub fn list_key(&self) -> ListKey {
        ListKey {
            owner: self.owner,
            container: self.identity,
        }
    }

    /// Append a function, assigning it a fresh identity.
    pub fn push(&mut self, mut function: EventsFunction) -> FunctionId {
        let id = FunctionId::new(self.next_id);
        self.next_id += 1;
        function.id = id;
        self.items.push(function);
        id
    }

    /// Append a new function with the given name.
    pub fn push_new(&mut self, name: impl Into<String>) -> FunctionId {
        self.push(EventsFunction::new(name))
    }

    /// Function with identity `id`.
    pub fn get(&self, id: FunctionId) -> Option<&EventsFunction> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Mutable function with identity `id`.
    pub fn get_mut(&mut self, id: FunctionId) -> Option<&mut EventsFunction> {
        self.items.iter_mut().find(|f| f.id == id)
    }

    /// Function at position `index`.
    pub fn at(&self, index: usize) -> Option<&EventsFunction> {
        self.items.get(index)
    }

    /// Position of `id` in the container.
    pub fn position(&self, id: FunctionId) -> Option<usize> {
        self.items.iter().position(|f| f.id == id)
    }

    /// Whether `id` is still in the container.
    pub fn contains(&self, id: FunctionId) -> bool {
        self.position(id).is_some()
    }

    /// Exact, case-sensitive name lookup.
    pub fn has_function_named(&self, name: &str) -> bool {
        self.items.iter().any(|f| f.name() == name)
    }

    /// Whether a function other than `except` already uses `name`.
    pub fn name_taken_by_other(&self, name: &str, except: FunctionId) -> bool {
        self.items.iter().any(|f| f.id != except && f.name() == name)
    }

    /// Names in container order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|f| f.name())
    }

    /// Remove and return the function with identity `id`.
    pub fn remove(&mut self, id: FunctionId) -> Option<EventsFunction> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Move the function at `from` so it ends up at index `to`.
    ///
    /// Returns false (and leaves the order alone) when either index is out of
    /// range or both are equal.
    pub fn move_function(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let function = self.items.remove(from);
        self.items.insert(to, function);
        true
    }

    /// Functions in container order.
    pub fn iter(&self) -> std::slice::Iter<'_, EventsFunction> {
        self.items.iter()
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no functions.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Clone for EventsFunctionsContainer {
    fn clone(&self) -> Self {
        let identity = ContainerId::mint();
        let owner = if self.owner == self.identity {
            identity
        } else {
            self.owner
        };
        Self {
            identity,
            owner,
            next_id: self.next_id,
            items: self.items.clone(),
        }
    }
}

impl Default for EventsFunctionsContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<EventsFunction>> for EventsFunctionsContainer {
    fn from(functions: Vec<EventsFunction>) -> Self {
        let mut container = Self::new();
        for function in functions {
            container.push(function);
        }
        container
    }
}

impl Serialize for EventsFunctionsContainer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'a> IntoIterator for &'a EventsFunctionsContainer {
    type Item = &'a EventsFunction;
    type IntoIter = std::slice::Iter<'a, EventsFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
