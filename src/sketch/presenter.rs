//! User-facing feedback seam.

/// Abstraction over the host UI elements the controller talks back to.
///
/// Every method has a no-op-safe meaning for headless hosts; see [`LogPresenter`].
pub trait Presenter {
    /// Informational message (e.g. the nickname confirmation).
    fn notify(&self, message: &str);

    /// Blocking error notice.
    fn alert(&self, message: &str);

    /// Shows or hides the loading indicator displayed during import.
    fn set_loading(&self, visible: bool);

    /// Resets the import file chooser so the same file can be picked again.
    fn reset_file_input(&self);

    /// Opens the import file chooser.
    fn open_file_chooser(&self);
}

/// Presenter for headless use: routes everything to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }

    fn alert(&self, message: &str) {
        log::error!("{}", message);
    }

    fn set_loading(&self, visible: bool) {
        log::debug!("Loading indicator {}", if visible { "shown" } else { "hidden" });
    }

    fn reset_file_input(&self) {}

    fn open_file_chooser(&self) {
        log::debug!("File chooser requested; no chooser available");
    }
}
