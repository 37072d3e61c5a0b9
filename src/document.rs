use crate::types::RawCell;

/// The two external signals the pipelines react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// Content fully loaded; the cell collection is ready to scan.
    ContentLoaded,
    /// The user selected a file; its text is available via `selected_text`.
    SelectionChanged,
}

/// Callback invoked when a subscribed event fires.
pub type Listener = Box<dyn FnMut(&mut dyn Document)>;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// The document/environment collaborator the pipelines run against.
///
/// Implementations expose candidate cells in document order, hold the
/// selected file's text and the designated output element, and deliver the
/// readiness/selection signals to registered listeners.
pub trait Document {
    /// Candidate cells, in document order.
    fn cells(&self) -> Vec<RawCell>;

    /// Text content of the currently selected file, if any.
    fn selected_text(&self) -> Option<String>;

    /// Replace the content of the designated output element.
    fn write_output(&mut self, text: &str);

    fn add_listener(&mut self, event: DomEvent, listener: Listener) -> ListenerId;

    /// Returns false when the id was not registered (already removed).
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// Undoes one install call. Dropping it without calling `dispose` leaves the
/// listener registered.
#[derive(Debug)]
#[must_use = "dropping a Disposer leaves its listener registered"]
pub struct Disposer {
    id: Option<ListenerId>,
}

impl Disposer {
    pub(crate) fn new(id: ListenerId) -> Self {
        Self { id: Some(id) }
    }

    /// A disposer with nothing to undo.
    pub fn noop() -> Self {
        Self { id: None }
    }

    /// Unregister the listener; returns whether anything was removed.
    pub fn dispose(self, doc: &mut dyn Document) -> bool {
        match self.id {
            Some(id) => doc.remove_listener(id),
            None => false,
        }
    }
}

/// In-memory `Document` over a fixed cell collection.
///
/// Drives the pipelines in tests: `load` plays the content-loaded signal,
/// `select_text` plays a file selection.
#[derive(Default)]
pub struct StaticDocument {
    cells: Vec<RawCell>,
    selected: Option<String>,
    output: String,
    listeners: Vec<(ListenerId, DomEvent, Listener)>,
    next_id: u64,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cells(cells: Vec<RawCell>) -> Self {
        Self {
            cells,
            ..Self::default()
        }
    }

    /// Content of the designated output element.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Signal that the content is fully loaded.
    pub fn load(&mut self) {
        self.fire(DomEvent::ContentLoaded);
    }

    /// Set the selected file's text and signal the change.
    pub fn select_text(&mut self, text: &str) {
        self.selected = Some(text.to_string());
        self.fire(DomEvent::SelectionChanged);
    }

    fn fire(&mut self, event: DomEvent) {
        // Listeners receive `&mut dyn Document`, so the table is taken out for
        // the duration of the dispatch; registrations made from inside a
        // listener land in the fresh table and are merged back afterwards.
        let mut table = std::mem::take(&mut self.listeners);
        for (_, subscribed, listener) in table.iter_mut() {
            if *subscribed == event {
                listener(self);
            }
        }
        table.append(&mut self.listeners);
        self.listeners = table;
    }
}

impl Document for StaticDocument {
    fn cells(&self) -> Vec<RawCell> {
        self.cells.clone()
    }

    fn selected_text(&self) -> Option<String> {
        self.selected.clone()
    }

    fn write_output(&mut self, text: &str) {
        self.output = text.to_string();
    }

    fn add_listener(&mut self, event: DomEvent, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, event, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _, _)| *lid != id);
        self.listeners.len() != before
    }
}
