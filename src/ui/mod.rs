/// UI layer: panels, card grids, and contribution forms.
///
/// Layout:
/// ```text
///   ┌────────────────────────────────────┐
///   │ top_bar   (menu, title, nav)       │
///   ├────────────────────────────────────┤
///   │ error banner (only after failures) │
///   ├────────────────────────────────────┤
///   │                                    │
///   │ central: Overview | Algorithms |   │
///   │          Packages | Contribute |   │
///   │          About                     │
///   │                                    │
///   ├────────────────────────────────────┤
///   │ status_bar (source, counts)        │
///   └────────────────────────────────────┘
/// ```
/// Modals (algorithm detail, example code, submission result) float above
/// the panels.
pub mod cards;
pub mod forms;
pub mod panels;

use std::path::PathBuf;

/// Work a widget requested that needs the app, not just `AppState`:
/// spawning loader or submission threads, or swapping the data source.
/// Widgets return it upward and `McmcAtlasApp::update` dispatches once per
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Load the catalog from a local directory picked in the file dialog.
    OpenFolder(PathBuf),
    /// Fetch the catalog again from the current source.
    Reload,
    /// Package the active contribution draft into an issue link.
    Submit,
}
