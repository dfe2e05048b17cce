//! Application state for the TUI.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use sudsy_core::catalog::TagKind;
use sudsy_core::format::share_line;
use sudsy_core::state::{self, AppState};
use sudsy_core::{ContentOrigin, KeyValueStore, Picker, Thought};

use crate::clipboard::ClipboardSink;
use crate::decor::Decor;

/// An action button that can briefly show a different label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Save,
}

/// A temporary label replacing an action's usual hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub action: Action,
    pub icon: &'static str,
    pub label: &'static str,
    pub remaining: Duration,
}

/// Main application state.
pub struct App {
    /// Persisted preferences and favorites
    state: AppState,
    store: Box<dyn KeyValueStore>,
    picker: Picker<StdRng>,
    clipboard: Box<dyn ClipboardSink>,
    /// Floaters and accent palette
    pub decor: Decor,
    /// Where the thought list came from
    pub origin: ContentOrigin,
    /// Last generated thought
    current: Option<Thought>,
    flash: Option<Flash>,
    /// First saved entry shown in the saved panel
    saved_scroll: usize,
    /// Copy failed: thought text is highlighted for manual selection
    pub selecting: bool,
    /// Whether the app should exit
    pub should_quit: bool,
}

impl App {
    pub fn new(
        picker: Picker<StdRng>,
        state: AppState,
        store: Box<dyn KeyValueStore>,
        clipboard: Box<dyn ClipboardSink>,
        decor: Decor,
        origin: ContentOrigin,
    ) -> Self {
        Self {
            state,
            store,
            picker,
            clipboard,
            decor,
            origin,
            current: None,
            flash: None,
            saved_scroll: 0,
            selecting: false,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current(&self) -> Option<&Thought> {
        self.current.as_ref()
    }

    /// Copy and save only make sense once something was generated.
    pub fn actions_enabled(&self) -> bool {
        self.current.is_some()
    }

    /// Flash currently shown on `action`, if any.
    pub fn flash_for(&self, action: Action) -> Option<&Flash> {
        self.flash.as_ref().filter(|f| f.action == action)
    }

    pub fn saved_scroll(&self) -> usize {
        self.saved_scroll
    }

    pub fn content_count(&self) -> usize {
        self.picker.thoughts().len()
    }

    /// Advance timers by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.decor.tick(dt);

        if let Some(flash) = &mut self.flash {
            flash.remaining = flash.remaining.saturating_sub(dt);
            if flash.remaining.is_zero() {
                self.flash = None;
                self.selecting = false;
            }
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.generate(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.copy_current(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_current(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_category(1),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_category(-1),
            KeyCode::Tab => self.cycle_vibe(1),
            KeyCode::BackTab => self.cycle_vibe(-1),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => self.adjust_spice(1),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => self.adjust_spice(-1),
            KeyCode::Char(c @ '1'..='5') => {
                let level = c as u8 - b'0';
                self.update(|s| s.with_spice_level(level));
            }
            KeyCode::Char('p') => self.decor.shuffle_and_burst(),
            KeyCode::Char('x') => self.clear_saved(),
            KeyCode::Char('j') | KeyCode::PageDown => self.scroll_saved(1),
            KeyCode::Char('k') | KeyCode::PageUp => self.scroll_saved(-1),
            _ => {}
        }
    }

    /// Apply a state transition and persist the result.
    fn update(&mut self, transition: impl FnOnce(AppState) -> AppState) {
        let previous = std::mem::take(&mut self.state);
        self.state = transition(previous);
        state::save_state(self.store.as_ref(), &self.state);
    }

    /// Pick a new thought for the current filters.
    pub fn generate(&mut self) {
        let filter = self.state.filter();
        let thought = self.picker.pick(&filter).clone();
        tracing::debug!(id = %thought.id, "Generated thought");
        self.current = Some(thought);
        self.selecting = false;
        self.decor.pulse();
    }

    /// Copy the current thought to the clipboard, or highlight it for manual
    /// selection when the clipboard is unavailable.
    pub fn copy_current(&mut self) {
        let Some(thought) = &self.current else {
            return;
        };
        let line = share_line(thought);

        match self.clipboard.copy_text(&line) {
            Ok(()) => {
                self.selecting = false;
                self.flash(Action::Copy, "✅", "Copied", Duration::from_millis(900));
            }
            Err(e) => {
                tracing::info!(error = %e, "Clipboard copy failed, falling back to selection");
                self.selecting = true;
                self.flash(Action::Copy, "🖱️", "Select", Duration::from_millis(1100));
            }
        }
    }

    /// Add the current thought to the saved list.
    pub fn save_current(&mut self) {
        let Some(thought) = self.current.clone() else {
            return;
        };
        self.update(|s| state::add_saved(s, &thought));
        self.saved_scroll = 0;
        self.flash(Action::Save, "💾", "Saved", Duration::from_millis(900));
    }

    pub fn toggle_theme(&mut self) {
        self.update(AppState::toggle_theme);
        self.decor.pulse();
    }

    pub fn cycle_category(&mut self, step: isize) {
        let next = TagKind::Category.cycle(&self.state.category_key, step);
        self.update(|s| s.with_category(next));
    }

    pub fn cycle_vibe(&mut self, step: isize) {
        let next = TagKind::Vibe.cycle(&self.state.vibe_key, step);
        self.update(|s| s.with_vibe(next));
    }

    pub fn adjust_spice(&mut self, delta: i8) {
        let level = self.state.spice_level.saturating_add_signed(delta);
        self.update(|s| s.with_spice_level(level));
    }

    pub fn clear_saved(&mut self) {
        self.update(state::clear_saved);
        self.saved_scroll = 0;
    }

    /// Move the saved panel by `delta` entries, stopping at the last one.
    pub fn scroll_saved(&mut self, delta: isize) {
        let max = self.state.saved.len().saturating_sub(1);
        self.saved_scroll = self.saved_scroll.saturating_add_signed(delta).min(max);
    }

    fn flash(&mut self, action: Action, icon: &'static str, label: &'static str, duration: Duration) {
        self.flash = Some(Flash {
            action,
            icon,
            label,
            remaining: duration,
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use sudsy_core::config::AnimationConfig;
    use sudsy_core::content::embedded_thoughts;
    use sudsy_core::state::STORAGE_KEY;
    use sudsy_core::{load_state, MemoryStore, Theme};

    /// Clipboard that records copies, or always fails.
    pub(crate) struct FakeClipboard {
        pub copies: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("headless".into()));
            }
            self.copies.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Store shared between the app under test and the assertions.
    struct SharedStore(Rc<MemoryStore>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> sudsy_core::Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> sudsy_core::Result<()> {
            self.0.set(key, value)
        }
    }

    pub(crate) fn test_app_with(fail_clipboard: bool) -> (App, Rc<MemoryStore>, Rc<RefCell<Vec<String>>>) {
        test_app_from(AppState::default(), fail_clipboard)
    }

    pub(crate) fn test_app_from(
        state: AppState,
        fail_clipboard: bool,
    ) -> (App, Rc<MemoryStore>, Rc<RefCell<Vec<String>>>) {
        let store = Rc::new(MemoryStore::new());
        let copies = Rc::new(RefCell::new(Vec::new()));
        let picker = Picker::with_rng(embedded_thoughts(), StdRng::seed_from_u64(7)).unwrap();
        let decor = Decor::new(&AnimationConfig::default(), StdRng::seed_from_u64(8));
        let app = App::new(
            picker,
            state,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(FakeClipboard {
                copies: Rc::clone(&copies),
                fail: fail_clipboard,
            }),
            decor,
            ContentOrigin::Embedded,
        );
        (app, store, copies)
    }

    pub(crate) fn test_app() -> App {
        test_app_with(false).0
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_actions_disabled_until_generate() {
        let (mut app, store, copies) = test_app_with(false);
        assert!(!app.actions_enabled());

        app.handle_key(key(KeyCode::Char('c')));
        app.handle_key(key(KeyCode::Char('s')));
        assert!(copies.borrow().is_empty());
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
        assert!(app.flash_for(Action::Copy).is_none());
    }

    #[test]
    fn test_generate_respects_filters() {
        let mut app = test_app();
        app.update(|s| s.with_category("tech").with_spice_level(5));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char(' ')));
            let current = app.current().unwrap();
            assert!(current.category.iter().any(|c| c == "tech"));
        }
    }

    #[test]
    fn test_save_persists_and_flashes() {
        let (mut app, store, _) = test_app_with(false);
        app.generate();
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Char('s')));

        assert_eq!(app.state().saved.len(), 1);
        assert_eq!(app.flash_for(Action::Save).unwrap().label, "Saved");
        assert_eq!(load_state(store.as_ref()).saved.len(), 1);

        app.tick(Duration::from_millis(900));
        assert!(app.flash_for(Action::Save).is_none());
    }

    #[test]
    fn test_copy_success() {
        let (mut app, _, copies) = test_app_with(false);
        app.generate();
        app.copy_current();

        let text = app.current().unwrap().text.clone();
        assert_eq!(copies.borrow().len(), 1);
        assert!(copies.borrow()[0].contains(&text));
        assert_eq!(app.flash_for(Action::Copy).unwrap().label, "Copied");
        assert!(!app.selecting);
    }

    #[test]
    fn test_copy_failure_falls_back_to_selection() {
        let (mut app, _, _) = test_app_with(true);
        app.generate();
        app.copy_current();

        assert!(app.selecting);
        assert_eq!(app.flash_for(Action::Copy).unwrap().label, "Select");

        app.tick(Duration::from_millis(1000));
        assert!(app.selecting);
        app.tick(Duration::from_millis(100));
        assert!(!app.selecting);
        assert!(app.flash_for(Action::Copy).is_none());
    }

    #[test]
    fn test_selector_keys_persist_each_change() {
        let (mut app, store, _) = test_app_with(false);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state().category_key, "funny");
        assert_eq!(load_state(store.as_ref()).category_key, "funny");

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.state().vibe_key, "chaos");

        app.handle_key(key(KeyCode::Char('+')));
        app.handle_key(key(KeyCode::Char('+')));
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.state().spice_level, 5);

        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('-')));
        assert_eq!(app.state().spice_level, 1);

        app.handle_key(key(KeyCode::Char('t')));
        let stored = load_state(store.as_ref());
        assert_eq!(stored.theme, Theme::Light);
        assert_eq!(stored.vibe_key, "chaos");
        assert_eq!(stored.spice_level, 1);
    }

    #[test]
    fn test_clear_saved() {
        let mut app = test_app();
        app.generate();
        app.save_current();
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.state().saved.is_empty());
    }

    #[test]
    fn test_saved_scroll_is_clamped_and_reset() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.saved_scroll(), 0);

        for _ in 0..3 {
            app.generate();
            app.save_current();
        }
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.saved_scroll(), 2);
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.saved_scroll(), 1);

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.saved_scroll(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
