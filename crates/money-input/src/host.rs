use std::collections::BTreeMap;

/// Presentational attribute set while the field shows malformed text.
pub const ERROR_ATTRIBUTE: &str = "data-error";

/// The editable text field an [`crate::AmountField`] drives.
///
/// Caret offsets are counted in `char`s of the field's current value.
pub trait HostField {
    /// Start of the current selection, if the field knows it.
    fn selection_start(&self) -> Option<usize>;

    fn set_value(&mut self, value: &str);

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    fn set_selection_range(&mut self, start: usize, end: usize);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEventKind {
    Change,
    Blur,
}

/// An event delivered by the host field, carrying the field's raw text at that moment.
///
/// The same event is handed back to the application's change/blur callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: FieldEventKind,
    pub value: String,
}

impl FieldEvent {
    pub fn change(value: impl Into<String>) -> Self {
        Self {
            kind: FieldEventKind::Change,
            value: value.into(),
        }
    }

    pub fn blur(value: impl Into<String>) -> Self {
        Self {
            kind: FieldEventKind::Blur,
            value: value.into(),
        }
    }
}

/// In-memory [`HostField`].
///
/// Behaves like a browser text input: assigning a different value moves the caret to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: String,
    attributes: BTreeMap<String, String>,
    selection: Option<(usize, usize)>,
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Simulate the user editing the text so it reads `text` with the caret at `caret`, and
    /// return the change event the field would dispatch.
    pub fn input(&mut self, text: &str, caret: usize) -> FieldEvent {
        self.value = text.to_string();
        let caret = caret.min(text.chars().count());
        self.selection = Some((caret, caret));
        FieldEvent::change(text)
    }

    /// Simulate appending `text` at the end of the current value.
    pub fn append(&mut self, text: &str) -> FieldEvent {
        let typed = format!("{}{text}", self.value);
        let end = typed.chars().count();
        self.input(&typed, end)
    }

    /// The blur event the field would dispatch now.
    pub fn blur(&self) -> FieldEvent {
        FieldEvent::blur(self.value.clone())
    }
}

impl HostField for MemoryField {
    fn selection_start(&self) -> Option<usize> {
        self.selection.map(|(start, _)| start)
    }

    fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            let end = self.value.chars().count();
            self.selection = Some((end, end));
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        self.selection = Some((start, end));
    }
}
