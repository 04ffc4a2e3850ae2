//! The element graph a generator reads from.

use indexmap::IndexMap;

use crate::{Element, ElementKind, standards};

/// A set of elements keyed by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Project {
    elements: IndexMap<String, Element>,
}

impl Project {
    /// An empty project (no standard elements).
    pub fn new() -> Self {
        Self::default()
    }

    /// A project pre-populated with the built-in standard elements.
    pub fn with_standards() -> Self {
        let mut project = Self::new();
        for element in standards::all() {
            project.insert(element);
        }
        project
    }

    /// Insert or replace an element, returning the replaced one.
    pub fn insert(&mut self, element: Element) -> Option<Element> {
        self.elements.insert(element.name.clone(), element)
    }

    /// Builder-style [`Project::insert`].
    pub fn with(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    /// Base element of `element`, if its base type names a known element.
    pub fn base_of(&self, element: &Element) -> Option<&Element> {
        element.base_type().and_then(|name| self.element(name))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn screens(&self) -> impl Iterator<Item = &Element> {
        self.of_kind(ElementKind::Screen)
    }

    pub fn components(&self) -> impl Iterator<Item = &Element> {
        self.of_kind(ElementKind::Component)
    }

    /// Screens and components: the elements code is generated for.
    pub fn generatable(&self) -> impl Iterator<Item = &Element> {
        self.elements().filter(|e| e.kind != ElementKind::Standard)
    }

    fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_standards() {
        let project = Project::with_standards();
        assert!(project.contains("Text"));
        assert!(project.contains("Container"));
        assert_eq!(project.generatable().count(), 0);
    }

    #[test]
    fn test_base_of() {
        let project = Project::with_standards()
            .with(Element::component("Button").with_base("Container"))
            .with(Element::component("Broken").with_base("Missing"));

        let button = project.element("Button").unwrap();
        assert_eq!(project.base_of(button).map(|e| e.name.as_str()), Some("Container"));

        let broken = project.element("Broken").unwrap();
        assert!(project.base_of(broken).is_none());
    }

    #[test]
    fn test_order_is_declaration_order() {
        let project = Project::new()
            .with(Element::screen("B"))
            .with(Element::component("A"))
            .with(Element::screen("C"));

        let names: Vec<_> = project.generatable().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
        let screens: Vec<_> = project.screens().map(|e| e.name.as_str()).collect();
        assert_eq!(screens, ["B", "C"]);
    }
}
