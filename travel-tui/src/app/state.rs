use travel_model::{City, Country, Hotel};

/// Client-side routes: the home search view and one detail view per entity
/// kind, each carrying the id from the search result it was opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Hotel(String),
    Country(String),
    City(String),
}

impl Route {
    /// Display name of the entity kind, used in error messages.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::Hotel(_) => Some("hotel"),
            Route::Country(_) => Some("country"),
            Route::City(_) => Some("city"),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Hotel(id) => format!("/hotels/{}", id),
            Route::Country(id) => format!("/countries/{}", id),
            Route::City(id) => format!("/cities/{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Hotel(Hotel),
    Country(Country),
    City(City),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Detail),
    Failed(String),
}

/// One selectable row of the search dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub label: String,
    pub route: Route,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Move cursor one char to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    /// Move cursor one char to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
