use std::fmt;

/// Identifier handed out by a [`Scene`](super::Scene) when an object is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u64);

impl ObjectId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity shared by every scene element: id, name and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBase {
    id: Option<ObjectId>,
    name: String,
    visible: bool,
}

impl ObjectBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            visible: true,
        }
    }

    /// `None` until the object is owned by a scene
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for ObjectBase {
    fn default() -> Self {
        Self::new("Object")
    }
}
