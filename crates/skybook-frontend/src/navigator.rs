use skybook_core::Section;

/// Tracks which section container is visible.
///
/// Showing a section hides all others first, so at most one section is ever
/// visible. An id outside the UI contract leaves nothing visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    visible: Option<Section>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            visible: Some(Section::Search),
        }
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides every section and reveals the one whose container id is `id`.
    pub fn show_section(&mut self, id: &str) -> Option<Section> {
        self.visible = Section::from_dom_id(id);
        if self.visible.is_none() {
            tracing::warn!(id, "unknown section id; nothing is visible");
        }
        self.visible
    }

    #[must_use]
    pub fn visible(&self) -> Option<Section> {
        self.visible
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible == Some(section)
    }
}
