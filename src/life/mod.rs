//! Life in Weeks: a lifespan drawn as one cell per week, with the statistics,
//! estimators and checklist derived from a birth date and a life expectancy.

pub mod achievements;
pub mod actions;
pub mod allocation;
pub mod calendar;
pub mod export;
pub mod grid;
pub mod logic;
pub mod quotes;
pub mod render;
pub mod save;
pub mod social;
pub mod state;
pub mod stats;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::time::IntervalTimer;

use achievements::MODULES;
use actions::*;
use quotes::QUOTE_ROTATION_MS;
use save::Storage;
use state::{Field, LifeState, Tab};

/// Expectancy step for `[` / `]` and the header buttons.
const EXPECTANCY_STEP: i32 = 1;
const SOCIAL_AGE_STEP: f64 = 1.0;
const SOCIAL_VISITS_STEP: f64 = 1.0;
const GRID_SCROLL_STEP: i32 = 1;

pub struct LifeApp {
    pub state: LifeState,
    storage: Box<dyn Storage>,
    /// Refreshes the age read-out every frame while a birth date is set.
    ticker: IntervalTimer,
    quote_timer: IntervalTimer,
}

impl LifeApp {
    pub fn new(mut storage: Box<dyn Storage>) -> Self {
        let mut state = LifeState::new();
        logic::restore(&mut state, storage.as_mut());

        let mut quote_timer = IntervalTimer::every_ms(QUOTE_ROTATION_MS);
        quote_timer.start();

        Self {
            state,
            storage,
            ticker: IntervalTimer::every_frame(),
            quote_timer,
        }
    }

    /// Returns true if the event changed anything.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            _ if self.state.editing.is_some() => self.handle_edit_key(event),
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Escape if self.state.confirm_reset => {
                logic::cancel_reset(&mut self.state);
                true
            }
            InputEvent::Backspace | InputEvent::Enter | InputEvent::Escape => false,
        }
    }

    fn handle_edit_key(&mut self, event: &InputEvent) -> bool {
        let storage = self.storage.as_mut();
        match event {
            InputEvent::Key(c) => logic::type_char(&mut self.state, storage, *c),
            InputEvent::Backspace => logic::backspace(&mut self.state, storage),
            InputEvent::Enter | InputEvent::Escape => logic::finish_edit(&mut self.state),
            InputEvent::Click(_) => return false,
        }
        true
    }

    fn handle_key(&mut self, key: char) -> bool {
        if key == 'e' && self.state.tab == Tab::System {
            self.export();
            return true;
        }

        let storage = self.storage.as_mut();
        let state = &mut self.state;

        if let Some(tab) = Tab::all().iter().find(|t| t.key() == key) {
            logic::select_tab(state, *tab);
            return true;
        }

        match (key, state.tab) {
            ('o', _) => logic::begin_edit(state, Field::BirthDate),
            ('[', _) => logic::adjust_life_expectancy(state, storage, -EXPECTANCY_STEP),
            (']', _) => logic::adjust_life_expectancy(state, storage, EXPECTANCY_STEP),
            ('v', _) => logic::toggle_view(state),
            ('l', _) => logic::toggle_language(state, storage),

            ('j', Tab::Grid) => logic::scroll_grid(state, GRID_SCROLL_STEP),
            ('k', Tab::Grid) => logic::scroll_grid(state, -GRID_SCROLL_STEP),

            ('n', Tab::Social) => logic::begin_edit(state, Field::SocialName),
            ('q', Tab::Social) => logic::adjust_their_age(state, -SOCIAL_AGE_STEP),
            ('w', Tab::Social) => logic::adjust_their_age(state, SOCIAL_AGE_STEP),
            ('z', Tab::Social) => logic::adjust_visits(state, -SOCIAL_VISITS_STEP),
            ('x', Tab::Social) => logic::adjust_visits(state, SOCIAL_VISITS_STEP),

            ('m', Tab::Achievements) => logic::cycle_module(state),
            ('a'..='f', Tab::Achievements) => {
                let Some(module) = state.expanded_module else {
                    return false;
                };
                let item = (key as u8 - b'a') as usize;
                if item >= MODULES[module].items.len() {
                    return false;
                }
                logic::toggle_item(state, storage, module, item);
            }

            ('y', Tab::System) if state.confirm_reset => logic::confirm_reset(state, storage),
            ('n', Tab::System) if state.confirm_reset => logic::cancel_reset(state),
            ('r', Tab::System) => logic::request_reset(state),
            _ => return false,
        }
        true
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        // Tapping anywhere else commits the field being edited.
        let keeps_editing = matches!(
            (self.state.editing, action_id),
            (Some(Field::BirthDate), EDIT_BIRTH_DATE) | (Some(Field::SocialName), EDIT_SOCIAL_NAME)
        );
        if !keeps_editing {
            logic::finish_edit(&mut self.state);
        }

        if action_id == EXPORT_LOG {
            self.export();
            return true;
        }

        let storage = self.storage.as_mut();
        let state = &mut self.state;
        match action_id {
            EDIT_BIRTH_DATE => logic::begin_edit(state, Field::BirthDate),
            EXPECTANCY_DOWN => logic::adjust_life_expectancy(state, storage, -EXPECTANCY_STEP),
            EXPECTANCY_UP => logic::adjust_life_expectancy(state, storage, EXPECTANCY_STEP),
            TOGGLE_LANGUAGE => logic::toggle_language(state, storage),
            GRID_SCROLL_UP => logic::scroll_grid(state, -GRID_SCROLL_STEP),
            GRID_SCROLL_DOWN => logic::scroll_grid(state, GRID_SCROLL_STEP),
            TOGGLE_STATS_VIEW => logic::toggle_view(state),
            EDIT_SOCIAL_NAME => logic::begin_edit(state, Field::SocialName),
            SOCIAL_AGE_DOWN => logic::adjust_their_age(state, -SOCIAL_AGE_STEP),
            SOCIAL_AGE_UP => logic::adjust_their_age(state, SOCIAL_AGE_STEP),
            SOCIAL_VISITS_DOWN => logic::adjust_visits(state, -SOCIAL_VISITS_STEP),
            SOCIAL_VISITS_UP => logic::adjust_visits(state, SOCIAL_VISITS_STEP),
            REQUEST_RESET => logic::request_reset(state),
            CONFIRM_RESET => logic::confirm_reset(state, storage),
            CANCEL_RESET => logic::cancel_reset(state),
            id if (TAB_BASE..TAB_BASE + Tab::all().len() as u16).contains(&id) => {
                logic::select_tab(state, Tab::all()[(id - TAB_BASE) as usize]);
            }
            id if (EXPAND_MODULE_BASE..EXPAND_MODULE_BASE + MODULES.len() as u16).contains(&id) => {
                logic::toggle_module(state, (id - EXPAND_MODULE_BASE) as usize);
            }
            id if id >= TOGGLE_ITEM_BASE && id < TOGGLE_ITEM_BASE + MODULES.len() as u16 * ITEM_STRIDE => {
                let offset = id - TOGGLE_ITEM_BASE;
                let module = (offset / ITEM_STRIDE) as usize;
                let item = (offset % ITEM_STRIDE) as usize;
                logic::toggle_item(state, storage, module, item);
            }
            _ => return false,
        }
        true
    }

    fn export(&mut self) {
        let report = logic::export_log(&mut self.state);

        #[cfg(target_arch = "wasm32")]
        if export::download_text(export::EXPORT_FILE_NAME, &report).is_none() {
            crate::console::warn("Life in Weeks: export download failed");
        }
        #[cfg(not(target_arch = "wasm32"))]
        drop(report);
    }

    /// Per-frame update: the age ticker runs only while there is a birth date
    /// to tick from; the quote rotation always runs.
    pub fn tick(&mut self, now_ms: f64) {
        self.state.now_ms = now_ms;

        if self.state.has_birth_date() {
            self.ticker.start();
        } else if self.ticker.is_running() {
            self.ticker.stop();
            self.state.age_years = None;
        }
        if self.ticker.update(now_ms) > 0 {
            logic::refresh_age(&mut self.state);
        }

        let steps = self.quote_timer.update(now_ms);
        logic::rotate_quote(&mut self.state, steps);
    }

    /// Stop every periodic task.
    pub fn teardown(&mut self) {
        self.ticker.stop();
        self.quote_timer.stop();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
