use ratatui::widgets::TableState;
use taskbot_core::{FileTaskStorage, Session};

/// One exchange in the conversation pane.
pub struct Exchange {
    pub input: String,
    pub response: String,
}

pub struct App {
    pub session: Session<FileTaskStorage>,
    pub conversation: Vec<Exchange>,
    pub state: TableState,
    pub input: String,
    pub cursor_position: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session<FileTaskStorage>) -> App {
        let mut conversation = Vec::new();
        if let Some(err) = session.load_error() {
            conversation.push(Exchange {
                input: String::new(),
                response: err.to_string(),
            });
        }

        let mut state = TableState::default();
        if !session.tasks().is_empty() {
            state.select(Some(0));
        }

        App {
            session,
            conversation,
            state,
            input: String::new(),
            cursor_position: 0,
            should_quit: false,
        }
    }

    pub fn next(&mut self) {
        let len = self.session.tasks().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.session.tasks().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }

        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;

        let response = self.session.handle(&input);
        self.should_quit = response.exit;
        self.conversation.push(Exchange {
            input,
            response: response.message,
        });
        self.clamp_selection();
    }

    // Keeps the highlighted row valid after tasks were added or removed.
    fn clamp_selection(&mut self) {
        let len = self.session.tasks().len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }
}
