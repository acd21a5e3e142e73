use log::debug;

use super::base::ObjectId;
use super::object::SceneObject;

/// Owner of the objects placed in a panorama.
///
/// Objects receive an [`ObjectId`] when added and are released when removed
/// or when the scene is dropped. Ids are never reused.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of an object, assigns its id and makes its name unique
    /// within the scene.
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let name = self.ensure_unique_name(object.base().name());
        object.base_mut().set_name(name);
        object.base_mut().assign_id(id);

        debug!("Added object '{}' as {}", object.base().name(), id);
        self.objects.push(object);
        id
    }

    /// Releases an object. The returned object no longer carries an id.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.index_of(id)?;
        let mut object = self.objects.remove(index);
        object.base_mut().clear_id();

        debug!("Removed object '{}' ({})", object.base().name(), id);
        Some(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.index_of(id).map(|index| &self.objects[index])
    }

    /// Mutable access to an object.
    ///
    /// Names are only made unique by [`add_object`](Self::add_object) and
    /// [`rename_object`](Self::rename_object); renaming through
    /// `base_mut().set_name` bypasses that check.
    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let index = self.index_of(id)?;
        self.objects.get_mut(index)
    }

    /// Renames an object, suffixing the name if another object already uses
    /// it. Returns the name actually given, or `None` for an unknown id.
    pub fn rename_object(&mut self, id: ObjectId, name: &str) -> Option<String> {
        let index = self.index_of(id)?;
        if self.objects[index].base().name() == name {
            return Some(name.to_string());
        }

        let unique = self.ensure_unique_name(name);
        self.objects[index].base_mut().set_name(unique.clone());
        debug!("Renamed {} to '{}'", id, unique);
        Some(unique)
    }

    /// First object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|obj| obj.base().name() == name)
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    /// Ids and names for UI display
    pub fn get_object_names(&self) -> Vec<(ObjectId, String)> {
        self.objects
            .iter()
            .filter_map(|obj| obj.base().id().map(|id| (id, obj.base().name().to_string())))
            .collect()
    }

    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Resets every object (rotation and alpha)
    pub fn reset_all(&mut self) {
        for object in &mut self.objects {
            object.reset();
        }
        debug!("Reset {} objects", self.objects.len());
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.base().name() == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            visible_count: self.objects.iter().filter(|obj| obj.base().is_visible()).count(),
            translucent_count: self.objects.iter().filter(|obj| obj.alpha() < 1.0).count(),
        }
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects
            .iter()
            .position(|obj| obj.base().id() == Some(id))
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub visible_count: usize,
    pub translucent_count: usize,
}
