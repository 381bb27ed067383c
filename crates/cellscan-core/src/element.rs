//! Rendered cell elements.

/// The rendered form of one cell: display text and a class list.
///
/// The class list keeps insertion order and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellElement {
    text: String,
    classes: Vec<String>,
}

impl CellElement {
    /// Create an element with the given text and no classes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classes: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        match self.classes.iter().position(|c| c == class) {
            Some(pos) => {
                self.classes.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Replace the class list with the whitespace-separated classes in `class_name`.
    pub fn reset_classes(&mut self, class_name: Option<&str>) {
        self.classes.clear();
        for class in class_name.unwrap_or_default().split_whitespace() {
            self.add_class(class);
        }
    }

    /// The class list as a `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}
