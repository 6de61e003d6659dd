//! Application state and update logic following The Elm Architecture.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use spingen_core::config::types::ResolvedConfig;
use spingen_core::dataset::{load_path, Dataset};
use spingen_core::export::{export_csv_file, DATASET_EXPORT_FILE, SIMPLE_EXPORT_FILE};
use spingen_core::generate::{
    generate_from_dataset, generate_simple, preview, resolve_columns, unresolved_variables,
    Variation,
};
use spingen_core::spintax::{self, Variables};

/// Generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Template expanded a fixed number of times.
    Simple,
    /// Template expanded once per data row.
    Dataset,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Dataset => "dataset",
        }
    }

    /// Editable fields, in Tab order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Simple => &[Field::Template, Field::Count],
            Mode::Dataset => {
                &[Field::Template, Field::DataPath, Field::Columns, Field::Preview]
            }
        }
    }

    fn toggled(self) -> Self {
        match self {
            Mode::Simple => Mode::Dataset,
            Mode::Dataset => Mode::Simple,
        }
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Editor,
    Results,
}

/// An editable input of the editor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Template,
    Count,
    DataPath,
    Columns,
    Preview,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Template => "Template",
            Field::Count => "Variations",
            Field::DataPath => "Data file",
            Field::Columns => "Columns (comma separated, empty = all)",
            Field::Preview => "Preview limit",
        }
    }

    fn numeric(self) -> bool {
        matches!(self, Field::Count | Field::Preview)
    }
}

/// Feedback message to display in status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Editing
    InputChar(char),
    InputNewline,
    InputBackspace,
    NextField,
    PrevField,
    ToggleMode,

    // Actions
    LoadData,
    Generate,
    Export,

    // Results
    SelectNext,
    SelectPrev,
    Back,

    // System
    Quit,
}

/// Main application state.
pub struct App {
    /// Resolved configuration.
    pub config: ResolvedConfig,

    pub mode: Mode,
    pub screen: Screen,
    pub focus: Field,

    pub template: String,
    pub count: String,
    pub data_path: String,
    pub columns: String,
    pub preview_limit: String,

    /// Last successfully loaded data file.
    pub dataset: Option<Dataset>,
    loaded_from: Option<String>,

    /// Every variation of the last run.
    pub variations: Vec<Variation>,
    /// Mode and preview limit the last run was made with.
    results_mode: Mode,
    results_preview: Option<usize>,
    /// Columns written in front of the text on export.
    export_columns: Vec<String>,

    /// Selected index in the results list.
    pub selected: usize,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,

    rng: StdRng,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        App {
            mode: Mode::Simple,
            screen: Screen::Editor,
            focus: Field::Template,
            template: String::new(),
            count: config.count.to_string(),
            data_path: String::new(),
            columns: String::new(),
            preview_limit: config.preview_limit.map(|n| n.to_string()).unwrap_or_default(),
            dataset: None,
            loaded_from: None,
            variations: Vec::new(),
            results_mode: Mode::Simple,
            results_preview: None,
            export_columns: Vec::new(),
            selected: 0,
            status: None,
            should_quit: false,
            rng,
            config,
        }
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::InputChar(c) => {
                if !self.focus.numeric() || c.is_ascii_digit() {
                    self.focused_buffer().push(c);
                }
            }
            Message::InputNewline => match self.focus {
                Field::Template => self.template.push('\n'),
                Field::DataPath => self.load_data(),
                _ => self.update(Message::NextField),
            },
            Message::InputBackspace => {
                self.focused_buffer().pop();
            }
            Message::NextField => self.cycle_focus(1),
            Message::PrevField => self.cycle_focus(-1),
            Message::ToggleMode => {
                self.mode = self.mode.toggled();
                self.focus = Field::Template;
                self.set_info(format!("{} mode", self.mode.label()));
            }
            Message::LoadData => self.load_data(),
            Message::Generate => self.generate(),
            Message::Export => self.export(),
            Message::SelectNext => {
                if self.selected + 1 < self.visible_variations().len() {
                    self.selected += 1;
                }
            }
            Message::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Message::Back => {
                self.screen = Screen::Editor;
            }
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Variations shown in the results list: the preview of the last run.
    pub fn visible_variations(&self) -> &[Variation] {
        match (self.results_mode, self.results_preview) {
            (Mode::Dataset, Some(limit)) => preview(&self.variations, limit),
            _ => &self.variations,
        }
    }

    pub fn selected_variation(&self) -> Option<&Variation> {
        self.visible_variations().get(self.selected)
    }

    /// Text of a field, for rendering.
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Template => &self.template,
            Field::Count => &self.count,
            Field::DataPath => &self.data_path,
            Field::Columns => &self.columns,
            Field::Preview => &self.preview_limit,
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            Field::Template => &mut self.template,
            Field::Count => &mut self.count,
            Field::DataPath => &mut self.data_path,
            Field::Columns => &mut self.columns,
            Field::Preview => &mut self.preview_limit,
        }
    }

    fn cycle_focus(&mut self, step: isize) {
        let fields = self.mode.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = (current as isize + step).rem_euclid(fields.len() as isize) as usize;
        self.focus = fields[next];
    }

    fn selected_columns(&self) -> Vec<String> {
        self.columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn load_data(&mut self) {
        let path = self.data_path.trim().to_string();
        if path.is_empty() {
            self.set_error("enter a data file path first");
            return;
        }

        match load_path(Path::new(&path), &self.config.load_options()) {
            Ok(dataset) => {
                self.set_info(format!(
                    "loaded (rows: {}, columns: {}): {}",
                    dataset.len(),
                    dataset.width(),
                    dataset.columns().join(", ")
                ));
                self.dataset = Some(dataset);
                self.loaded_from = Some(path);
            }
            Err(e) => {
                self.dataset = None;
                self.loaded_from = None;
                self.set_error(e.to_string());
            }
        }
    }

    fn generate(&mut self) {
        let (valid, message) = spintax::validate(&self.template);
        if !valid {
            self.screen = Screen::Editor;
            self.set_error(message);
            return;
        }

        match self.mode {
            Mode::Simple => self.generate_simple(),
            Mode::Dataset => self.generate_dataset(),
        }
    }

    fn generate_simple(&mut self) {
        let count = match self.count.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                self.set_error("variations must be a positive number");
                return;
            }
        };

        match generate_simple(&self.template, &Variables::new(), count, &mut self.rng) {
            Ok(variations) => {
                self.export_columns.clear();
                self.show_results(variations, None);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn generate_dataset(&mut self) {
        if self.loaded_from.as_deref() != Some(self.data_path.trim()) {
            self.load_data();
        }
        let Some(dataset) = self.dataset.as_ref() else {
            if self.status.as_ref().is_none_or(|s| !s.is_error) {
                self.set_error("load a data file first");
            }
            return;
        };

        let columns = match resolve_columns(dataset, &self.selected_columns()) {
            Ok(c) => c,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        match generate_from_dataset(&self.template, dataset, &columns, &mut self.rng) {
            Ok(variations) => {
                let missing = unresolved_variables(&self.template, &columns);
                self.export_columns = columns;
                let note = (!missing.is_empty()).then(|| {
                    let tokens: Vec<String> = missing.iter().map(|m| format!("{{{m}}}")).collect();
                    format!("not provided by any column: {}", tokens.join(", "))
                });
                self.show_results(variations, note);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn show_results(&mut self, variations: Vec<Variation>, note: Option<String>) {
        self.variations = variations;
        self.results_mode = self.mode;
        self.results_preview = self.preview_limit.parse().ok();
        self.selected = 0;
        self.screen = Screen::Results;

        let total = self.variations.len();
        let shown = self.visible_variations().len();
        let mut text = if shown < total {
            format!("generated {total} variations, showing {shown}")
        } else {
            format!("generated {total} variations")
        };
        if let Some(note) = note {
            text.push_str("; ");
            text.push_str(&note);
        }
        self.set_info(text);
    }

    fn export(&mut self) {
        if self.variations.is_empty() {
            self.set_error("nothing to export, generate first");
            return;
        }

        let file = if self.results_mode == Mode::Simple {
            SIMPLE_EXPORT_FILE
        } else {
            DATASET_EXPORT_FILE
        };
        let path = self.config.export_path(file);

        match export_csv_file(&path, &self.variations, &self.export_columns) {
            Ok(()) => self.set_info(format!(
                "exported {} variations to {}",
                self.variations.len(),
                path.display()
            )),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), is_error: false });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage { text: text.into(), is_error: true });
    }
}
