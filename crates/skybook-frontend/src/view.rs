use std::io;

use skybook_core::Section;

use crate::render::{ConfirmationDetails, Download, ResultsPane};

/// The page surface the controller renders into.
///
/// A browser binding would map these onto the DOM ids of the UI contract
/// (`results`, `details`, the four `*-section` containers); the terminal
/// front end prints them.
pub trait View {
    /// Hide every section, then reveal `visible` if there is one.
    fn show_section(&mut self, visible: Option<Section>);

    /// Replace the contents of the `results` container.
    fn render_results(&mut self, pane: &ResultsPane);

    /// Replace the contents of the `details` container.
    fn render_confirmation(&mut self, details: &ConfirmationDetails);

    /// Blocking user notice.
    fn alert(&mut self, message: &str);

    /// Hand a file to the user.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file could not be delivered.
    fn offer_download(&mut self, download: &Download) -> io::Result<()>;

    /// Full page reload. In-memory page state is discarded by the controller
    /// right after this call.
    fn reload(&mut self);
}
