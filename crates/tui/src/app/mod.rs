pub mod form;

use std::{fs, time::Duration};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Currency, EntryId, Ledger, NewEntry, Report, ReportCache, seed};

use crate::{
    config::{AppConfig, DEFAULT_TITLE, SeedMode},
    error::{AppError, Result},
    quick_add,
    ui::{
        self, ThemeMode,
        keymap::{AppAction, map_key},
    },
};

use form::{AddForm, EditForm};

const TICK_RATE: Duration = Duration::from_millis(200);
const TOAST_TICKS: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ledger,
    Analysis,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Ledger, Section::Analysis];

    pub fn label(self) -> &'static str {
        match self {
            Self::Ledger => "Ledger",
            Self::Analysis => "Analysis",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Self::Ledger => '1',
            Self::Analysis => '2',
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Ledger => Self::Analysis,
            Self::Analysis => Self::Ledger,
        }
    }
}

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Adding,
    QuickAdd,
    Editing,
    ConfirmDelete(EntryId),
    EditingTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    ticks_left: u8,
}

#[derive(Debug)]
pub struct AppState {
    pub title: String,
    pub theme: ThemeMode,
    pub currency: Currency,
    pub section: Section,
    pub mode: Mode,
    pub ledger: Ledger,
    report: ReportCache,
    pub selected: usize,
    pub add_form: AddForm,
    pub edit_form: Option<EditForm>,
    pub quick_input: String,
    pub show_help: bool,
    pub toast: Option<ToastState>,
    pub today: NaiveDate,
    should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, ledger: Ledger, today: NaiveDate) -> Self {
        let mut state = Self {
            title: config.title.clone(),
            theme: config.theme,
            currency: config.currency,
            section: Section::Ledger,
            mode: Mode::Browse,
            ledger,
            report: ReportCache::new(),
            selected: 0,
            add_form: AddForm::new(today),
            edit_form: None,
            quick_input: String::new(),
            show_help: false,
            toast: None,
            today,
            should_quit: false,
        };
        state.sync_report();
        state
    }

    /// Summary and category analysis for the current entries.
    pub fn report(&self) -> &Report {
        self.report.last()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick(&mut self) {
        if let Some(toast) = &mut self.toast {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
            if toast.ticks_left == 0 {
                self.toast = None;
            }
        }
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Browse if self.show_help => self.handle_help(action),
            Mode::Browse => self.handle_browse(action),
            Mode::Adding => self.handle_adding(action),
            Mode::QuickAdd => self.handle_quick_add(action),
            Mode::Editing => self.handle_editing(action),
            Mode::ConfirmDelete(id) => self.handle_confirm_delete(id, action),
            Mode::EditingTitle => self.handle_title(action),
        }

        self.sync_report();
    }

    fn sync_report(&mut self) {
        self.report.get(&self.ledger);
        let len = self.ledger.len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }

    fn handle_help(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel | AppAction::Input('?') => self.show_help = false,
            AppAction::Input('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::NextField | AppAction::PrevField => {
                self.section = self.section.toggled();
            }
            AppAction::Input(ch) => self.handle_browse_key(ch),
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, ch: char) {
        match ch {
            'q' => self.should_quit = true,
            '1' => self.section = Section::Ledger,
            '2' => self.section = Section::Analysis,
            'v' => self.section = self.section.toggled(),
            'j' => self.select_next(),
            'k' => self.select_prev(),
            '?' => self.show_help = true,
            't' => {
                self.theme = self.theme.toggled();
                tracing::info!(theme = self.theme.label(), "theme toggled");
            }
            'T' => self.mode = Mode::EditingTitle,
            'a' => {
                self.section = Section::Ledger;
                self.add_form.error = None;
                self.mode = Mode::Adding;
            }
            '+' => {
                self.section = Section::Ledger;
                self.quick_input.clear();
                self.mode = Mode::QuickAdd;
            }
            'e' => self.start_edit(),
            'd' => {
                if let Some(id) = self.selected_id() {
                    self.mode = Mode::ConfirmDelete(id);
                }
            }
            _ => {}
        }
    }

    fn handle_adding(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => {
                self.add_form.error = None;
                self.mode = Mode::Browse;
            }
            AppAction::NextField => self.add_form.next_field(),
            AppAction::PrevField => self.add_form.prev_field(),
            AppAction::Left | AppAction::Down => self.add_form.cycle(false),
            AppAction::Right | AppAction::Up => self.add_form.cycle(true),
            AppAction::Backspace => self.add_form.pop(),
            AppAction::Input(ch) => self.add_form.push(ch),
            AppAction::Submit => match self.add_form.parse(self.currency) {
                Ok(entry) => {
                    if self.add_entry(entry) {
                        self.add_form.reset(self.today);
                    }
                }
                Err(message) => {
                    tracing::warn!(%message, "add form rejected");
                    self.add_form.error = Some(message.clone());
                    self.show_toast(message, ToastLevel::Error);
                }
            },
            AppAction::Quit | AppAction::None => {}
        }
    }

    fn handle_quick_add(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel => {
                self.quick_input.clear();
                self.mode = Mode::Browse;
            }
            AppAction::Backspace => {
                self.quick_input.pop();
            }
            AppAction::Input(ch) => self.quick_input.push(ch),
            AppAction::Submit => {
                match quick_add::parse(&self.quick_input, self.currency, self.today) {
                    Ok(entry) => {
                        if self.add_entry(entry) {
                            self.quick_input.clear();
                            self.mode = Mode::Browse;
                        }
                    }
                    Err(message) => {
                        tracing::warn!(%message, "quick add rejected");
                        self.show_toast(message, ToastLevel::Error);
                    }
                }
            }
            _ => {}
        }
    }

    fn add_entry(&mut self, entry: NewEntry) -> bool {
        match self.ledger.add(entry) {
            Ok(id) => {
                tracing::info!(%id, "entry added");
                self.selected = self.ledger.position(id).unwrap_or(0);
                self.show_toast("Entry added.", ToastLevel::Success);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "entry rejected");
                self.add_form.error = Some(err.to_string());
                self.show_toast(err.to_string(), ToastLevel::Error);
                false
            }
        }
    }

    fn start_edit(&mut self) {
        let Some(entry) = self.ledger.entries().get(self.selected) else {
            return;
        };
        self.edit_form = Some(EditForm::for_entry(entry, self.currency));
        self.section = Section::Ledger;
        self.mode = Mode::Editing;
    }

    fn handle_editing(&mut self, action: AppAction) {
        let Some(form) = self.edit_form.as_mut() else {
            self.mode = Mode::Browse;
            return;
        };

        match action {
            AppAction::Cancel => {
                self.edit_form = None;
                self.mode = Mode::Browse;
            }
            AppAction::NextField | AppAction::Down => form.next_field(),
            AppAction::PrevField | AppAction::Up => form.prev_field(),
            AppAction::Backspace => form.pop(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => {
                let id = form.id;
                let result = form
                    .parse(self.currency)
                    .and_then(|update| self.ledger.update(id, update).map_err(|err| err.to_string()));
                match result {
                    Ok(()) => {
                        tracing::info!(%id, "entry edited");
                        self.edit_form = None;
                        self.mode = Mode::Browse;
                        self.show_toast("Entry updated.", ToastLevel::Success);
                    }
                    Err(message) => {
                        tracing::warn!(%id, %message, "edit rejected");
                        if let Some(form) = self.edit_form.as_mut() {
                            form.error = Some(message.clone());
                        }
                        self.show_toast(message, ToastLevel::Error);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_delete(&mut self, id: EntryId, action: AppAction) {
        self.mode = Mode::Browse;
        if !matches!(action, AppAction::Input('y' | 'Y')) {
            self.show_toast("Delete cancelled.", ToastLevel::Info);
            return;
        }
        match self.ledger.remove(id) {
            Ok(entry) => {
                tracing::info!(%id, text = %entry.text, "entry deleted");
                self.show_toast("Entry deleted.", ToastLevel::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "delete failed");
                self.show_toast(err.to_string(), ToastLevel::Error);
            }
        }
    }

    fn handle_title(&mut self, action: AppAction) {
        match action {
            AppAction::Input(ch) => self.title.push(ch),
            AppAction::Backspace => {
                self.title.pop();
            }
            AppAction::Submit | AppAction::Cancel => {
                let trimmed = self.title.trim();
                self.title = if trimmed.is_empty() {
                    DEFAULT_TITLE.to_string()
                } else {
                    trimmed.to_string()
                };
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.ledger.entries().get(self.selected).map(|entry| entry.id)
    }

    fn select_next(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.ledger.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            ticks_left: TOAST_TICKS,
        });
    }
}

/// Builds the start-up ledger: the seed entries plus an optional import.
pub fn build_ledger(config: &AppConfig) -> Result<Ledger> {
    let mut ledger = match config.seed {
        SeedMode::Demo => Ledger::with_entries(seed::demo_entries()),
        SeedMode::Empty => Ledger::new(),
    };

    if let Some(path) = &config.import {
        let content = fs::read_to_string(path)?;
        let entries: Vec<NewEntry> = serde_json::from_str(&content)?;
        let count = entries.len();
        for entry in entries {
            ledger.add(entry)?;
        }
        tracing::info!(path = %path.display(), count, "entries imported");
    }

    Ok(ledger)
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ledger = build_ledger(&config)?;
        tracing::info!(
            entries = ledger.len(),
            currency = config.currency.code(),
            "ledger ready"
        );
        Ok(Self {
            state: AppState::new(&config, ledger, Local::now().date_naive()),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        while !self.state.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            } else {
                self.state.tick();
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.state.handle_action(map_key(key));
    }
}

#[cfg(test)]
mod tests {
    use engine::{Category, EntryKind, Money};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 23).unwrap()
    }

    fn demo_state() -> AppState {
        let config = AppConfig::default();
        let ledger = build_ledger(&config).unwrap();
        AppState::new(&config, ledger, today())
    }

    fn empty_state() -> AppState {
        let config = AppConfig {
            seed: SeedMode::Empty,
            ..AppConfig::default()
        };
        AppState::new(&config, Ledger::new(), today())
    }

    fn press(state: &mut AppState, actions: &[AppAction]) {
        for action in actions {
            state.handle_action(*action);
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            state.handle_action(AppAction::Input(ch));
        }
    }

    #[test]
    fn demo_seed_feeds_the_report() {
        let state = demo_state();
        assert_eq!(state.ledger.len(), 7);
        assert_eq!(state.report().summary.expense, Money::new(-405_000));
        assert_eq!(state.report().summary.income, Money::new(3_000_000));
        assert_eq!(
            state.report().analysis.pairs[0].category,
            Category::Food
        );
    }

    #[test]
    fn add_form_creates_entry_and_resets() {
        let mut state = empty_state();
        press(&mut state, &[AppAction::Input('a')]);
        assert_eq!(state.mode, Mode::Adding);

        type_text(&mut state, "Lunch");
        press(&mut state, &[AppAction::NextField]);
        type_text(&mut state, "12000");
        press(
            &mut state,
            &[AppAction::NextField, AppAction::NextField, AppAction::Right],
        );
        press(&mut state, &[AppAction::Submit]);

        assert_eq!(state.ledger.len(), 1);
        let entry = &state.ledger.entries()[0];
        assert_eq!(entry.amount, Money::new(-12_000));
        assert_eq!(entry.category, Category::Food);
        assert_eq!(entry.date, today());
        assert_eq!(state.report().summary.total, Money::new(-12_000));
        assert!(state.add_form.text.is_empty());
        assert_eq!(state.add_form.category(), Category::Other);
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Success);
    }

    #[test]
    fn add_form_rejects_missing_amount() {
        let mut state = empty_state();
        press(&mut state, &[AppAction::Input('a')]);
        type_text(&mut state, "Lunch");
        press(&mut state, &[AppAction::Submit]);

        assert!(state.ledger.is_empty());
        assert!(state.add_form.error.is_some());
        assert_eq!(state.add_form.text, "Lunch");
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Error);
    }

    #[test]
    fn quick_add_records_income() {
        let mut state = empty_state();
        press(&mut state, &[AppAction::Input('+')]);
        type_text(&mut state, "+3000000 July salary #salary");
        press(&mut state, &[AppAction::Submit]);

        assert_eq!(state.mode, Mode::Browse);
        let entry = &state.ledger.entries()[0];
        assert_eq!(entry.kind(), EntryKind::Income);
        assert_eq!(entry.category, Category::Salary);
        assert_eq!(state.report().summary.income, Money::new(3_000_000));
    }

    #[test]
    fn edit_keeps_the_original_sign() {
        let mut state = demo_state();
        let id = state.selected_id().unwrap();
        press(&mut state, &[AppAction::Input('e')]);
        assert_eq!(state.mode, Mode::Editing);
        assert_eq!(state.edit_form.as_ref().unwrap().amount, "35000");

        press(&mut state, &[AppAction::NextField]);
        for _ in 0..5 {
            state.handle_action(AppAction::Backspace);
        }
        type_text(&mut state, "-40000");
        press(&mut state, &[AppAction::Submit]);

        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.ledger.get(id).unwrap().amount, Money::new(-40_000));
        assert_eq!(state.report().summary.expense, Money::new(-410_000));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = demo_state();
        let id = state.selected_id().unwrap();

        press(&mut state, &[AppAction::Input('d'), AppAction::Input('n')]);
        assert_eq!(state.mode, Mode::Browse);
        assert_eq!(state.toast.as_ref().unwrap().level, ToastLevel::Info);
        assert!(state.ledger.get(id).is_some());

        press(&mut state, &[AppAction::Input('d')]);
        assert_eq!(state.mode, Mode::ConfirmDelete(id));
        press(&mut state, &[AppAction::Input('y')]);
        assert!(state.ledger.get(id).is_none());
        assert_eq!(state.ledger.len(), 6);
        assert_eq!(state.report().summary.expense, Money::new(-370_000));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = demo_state();
        press(&mut state, &[AppAction::Up, AppAction::Input('k')]);
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            state.handle_action(AppAction::Input('j'));
        }
        assert_eq!(state.selected, 6);

        press(&mut state, &[AppAction::Input('d'), AppAction::Input('y')]);
        assert_eq!(state.selected, 5);
    }

    #[test]
    fn title_edit_falls_back_to_default() {
        let mut state = demo_state();
        press(&mut state, &[AppAction::Input('T')]);
        for _ in 0..DEFAULT_TITLE.len() {
            state.handle_action(AppAction::Backspace);
        }
        type_text(&mut state, "Household");
        press(&mut state, &[AppAction::Cancel]);
        assert_eq!(state.title, "Household");

        press(&mut state, &[AppAction::Input('T')]);
        for _ in 0.."Household".len() {
            state.handle_action(AppAction::Backspace);
        }
        type_text(&mut state, "  ");
        press(&mut state, &[AppAction::Submit]);
        assert_eq!(state.title, DEFAULT_TITLE);
        assert_eq!(state.mode, Mode::Browse);
    }

    #[test]
    fn keys_switch_views_theme_and_help() {
        let mut state = demo_state();
        press(&mut state, &[AppAction::Input('2')]);
        assert_eq!(state.section, Section::Analysis);
        press(&mut state, &[AppAction::Input('v')]);
        assert_eq!(state.section, Section::Ledger);

        press(&mut state, &[AppAction::Input('t')]);
        assert_eq!(state.theme, ThemeMode::Light);

        press(&mut state, &[AppAction::Input('?'), AppAction::Input('2')]);
        assert!(state.show_help);
        assert_eq!(state.section, Section::Ledger);
        press(&mut state, &[AppAction::Cancel]);
        assert!(!state.show_help);
    }

    #[test]
    fn q_is_text_while_typing() {
        let mut state = empty_state();
        press(&mut state, &[AppAction::Input('+')]);
        type_text(&mut state, "q");
        assert!(!state.should_quit());
        assert_eq!(state.quick_input, "q");

        press(&mut state, &[AppAction::Cancel, AppAction::Input('q')]);
        assert!(state.should_quit());
    }

    #[test]
    fn toast_expires_after_ticks() {
        let mut state = empty_state();
        state.show_toast("hello", ToastLevel::Info);
        for _ in 0..TOAST_TICKS {
            assert!(state.toast.is_some());
            state.tick();
        }
        assert!(state.toast.is_none());
    }

    #[test]
    fn import_adds_entries_to_the_seed() {
        let path = std::env::temp_dir().join(format!("pocketbook-import-{}.json", EntryId::new()));
        fs::write(
            &path,
            r#"[{"kind":"expense","text":"Taxi","amount":15000,"category":"transport","date":"2024-07-23"}]"#,
        )
        .unwrap();
        let config = AppConfig {
            seed: SeedMode::Empty,
            import: Some(path.clone()),
            ..AppConfig::default()
        };
        let ledger = build_ledger(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries()[0].amount, Money::new(-15_000));
    }

    #[test]
    fn import_accepts_free_text_categories() {
        let path = std::env::temp_dir().join(format!("pocketbook-import-{}.json", EntryId::new()));
        fs::write(
            &path,
            r#"[
                {"kind":"expense","text":"Bus","amount":1500,"category":"Transport","date":"2024-07-22"},
                {"kind":"expense","text":"Cat food","amount":30000,"category":"pets","date":"2024-07-23"}
            ]"#,
        )
        .unwrap();
        let config = AppConfig {
            seed: SeedMode::Empty,
            import: Some(path.clone()),
            ..AppConfig::default()
        };
        let ledger = build_ledger(&config).unwrap();
        fs::remove_file(&path).unwrap();

        let categories: Vec<&Category> = ledger.entries().iter().map(|e| &e.category).collect();
        assert_eq!(
            categories,
            vec![&Category::Custom("pets".to_string()), &Category::Transport]
        );
    }
}
