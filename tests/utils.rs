use std::cell::RefCell;
use std::collections::VecDeque;

use interview::backend::{
    ConfirmRunner, ConfirmSpec, MultiSelectRunner, MultiSelectSpec, PasswordRunner,
    PasswordSpec, SelectKeyRunner, SelectRunner, SelectSpec, TextRunner, TextSpec,
};
use interview::error::Result;
use interview::Outcome;

/// Prompt backend that replays scripted outcomes instead of driving a
/// terminal. Each prompt kind pops from its own queue; select and
/// select-by-key share the single-selection queue.
#[derive(Default)]
pub struct ScriptedBackend {
    texts: RefCell<VecDeque<Outcome<String>>>,
    passwords: RefCell<VecDeque<Outcome<String>>>,
    confirms: RefCell<VecDeque<Outcome<bool>>>,
    selections: RefCell<VecDeque<Outcome<usize>>>,
    multi_selections: RefCell<VecDeque<Outcome<Vec<usize>>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, outcome: Outcome<&str>) -> Self {
        self.texts.borrow_mut().push_back(outcome.map(str::to_string));
        self
    }

    pub fn password(self, outcome: Outcome<&str>) -> Self {
        self.passwords.borrow_mut().push_back(outcome.map(str::to_string));
        self
    }

    pub fn confirm(self, outcome: Outcome<bool>) -> Self {
        self.confirms.borrow_mut().push_back(outcome);
        self
    }

    pub fn select(self, outcome: Outcome<usize>) -> Self {
        self.selections.borrow_mut().push_back(outcome);
        self
    }

    pub fn multi_select(self, outcome: Outcome<Vec<usize>>) -> Self {
        self.multi_selections.borrow_mut().push_back(outcome);
        self
    }
}

impl TextRunner for ScriptedBackend {
    fn run_text(&self, _spec: &TextSpec) -> Result<Outcome<String>> {
        Ok(self.texts.borrow_mut().pop_front().expect("no scripted text outcome"))
    }
}

impl PasswordRunner for ScriptedBackend {
    fn run_password(&self, _spec: &PasswordSpec) -> Result<Outcome<String>> {
        Ok(self
            .passwords
            .borrow_mut()
            .pop_front()
            .expect("no scripted password outcome"))
    }
}

impl ConfirmRunner for ScriptedBackend {
    fn run_confirm(&self, _spec: &ConfirmSpec) -> Result<Outcome<bool>> {
        Ok(self.confirms.borrow_mut().pop_front().expect("no scripted confirm outcome"))
    }
}

impl SelectRunner for ScriptedBackend {
    fn run_select(&self, _spec: &SelectSpec) -> Result<Outcome<usize>> {
        Ok(self
            .selections
            .borrow_mut()
            .pop_front()
            .expect("no scripted selection outcome"))
    }
}

impl SelectKeyRunner for ScriptedBackend {
    fn run_select_key(&self, _spec: &SelectSpec) -> Result<Outcome<usize>> {
        Ok(self
            .selections
            .borrow_mut()
            .pop_front()
            .expect("no scripted selection outcome"))
    }
}

impl MultiSelectRunner for ScriptedBackend {
    fn run_multi_select(&self, _spec: &MultiSelectSpec) -> Result<Outcome<Vec<usize>>> {
        Ok(self
            .multi_selections
            .borrow_mut()
            .pop_front()
            .expect("no scripted multi-selection outcome"))
    }
}
