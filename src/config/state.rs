// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Output directory text field; applied to options on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    /// "Add spot" window open
    pub show_create: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 720,
            out_dir_text: s!(),
            out_dir_dirty: false,
            show_create: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            out_dir_text: options.export.out_dir.to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }

    /// Push a dirty output-dir text field into the export options.
    pub fn commit_out_dir(&mut self) {
        if self.gui.out_dir_dirty {
            self.options.export.set_dir(&self.gui.out_dir_text);
            logf!("Export: Out dir set → {}", self.options.export.out_dir.display());
            self.gui.out_dir_dirty = false;
        }
    }
}
