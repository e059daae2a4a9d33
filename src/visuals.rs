//! Ordered label/value collections handed to the logger per call

use crate::raster::ImageSource;

/// Ordered mapping from label to a borrowed image
///
/// Order decides file write order and gallery layout. Inserting an existing
/// label replaces its image without moving it.
#[derive(Default)]
pub struct VisualSet<'a> {
    entries: Vec<(String, &'a dyn ImageSource)>,
}

impl<'a> VisualSet<'a> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace an image
    pub fn insert(&mut self, label: impl Into<String>, image: &'a dyn ImageSource) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = image,
            None => self.entries.push((label, image)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, label: impl Into<String>, image: &'a dyn ImageSource) -> Self {
        self.insert(label, image);
        self
    }

    pub fn get(&self, label: &str) -> Option<&'a dyn ImageSource> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, image)| *image)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a dyn ImageSource)> + '_ {
        self.entries.iter().map(|(l, image)| (l.as_str(), *image))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for VisualSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(l, image)| {
                (l, image.channels(), image.height(), image.width())
            }))
            .finish()
    }
}

/// Ordered mapping from loss name to its current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossSet {
    entries: Vec<(String, f32)>,
}

impl LossSet {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert or replace a loss value
    pub fn insert(&mut self, name: impl Into<String>, value: f32) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: f32) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, f32)> for LossSet {
    fn from_iter<I: IntoIterator<Item = (N, f32)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
