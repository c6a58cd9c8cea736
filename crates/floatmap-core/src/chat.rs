//! "FloatChat AI" side panel transcript. No backend: replies are canned.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatMode {
    /// Hosted next to the map; answers float questions.
    Map,
    /// Hosted on the dashboard; turns requests into chart cards.
    Dashboard,
}

impl ChatMode {
    pub fn greeting(self) -> &'static str {
        match self {
            ChatMode::Map => "Hello! Ask me about the floats.",
            ChatMode::Dashboard => "Ask me to generate a chart.",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ChatMode::Map => "Ask about a float...",
            ChatMode::Dashboard => "Request a chart...",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            ChatMode::Map => "Send",
            ChatMode::Dashboard => "Generate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// Emitted by a dashboard-mode submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRequest {
    pub id: u64,
    pub title: String,
}

pub struct Chat {
    mode: ChatMode,
    messages: Vec<Message>,
}

impl Chat {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            mode,
            messages: vec![Message {
                sender: Sender::Bot,
                text: mode.greeting().to_string(),
            }],
        }
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append the user's message and the canned reply. Blank input is
    /// dropped. `next_id` runs only when a dashboard-mode request is emitted.
    pub fn submit(
        &mut self,
        input: &str,
        next_id: impl FnOnce() -> u64,
    ) -> Option<ChartRequest> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(Message {
            sender: Sender::User,
            text: input.to_string(),
        });
        match self.mode {
            ChatMode::Map => {
                self.messages.push(Message {
                    sender: Sender::Bot,
                    text: format!("Searching for: \"{input}\"... (Backend not connected)"),
                });
                None
            }
            ChatMode::Dashboard => {
                let id = next_id();
                self.messages.push(Message {
                    sender: Sender::Bot,
                    text: format!("Generating chart for: \"{input}\"..."),
                });
                log::info!("[chat] chart requested id={}", id);
                Some(ChartRequest {
                    id,
                    title: format!("Analysis for \"{input}\""),
                })
            }
        }
    }
}

/// Monotonic id source fed by a wall clock in milliseconds. Two requests in
/// the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct ChartIds {
    last: u64,
}

impl ChartIds {
    pub fn next_id(&mut self, now_ms: u64) -> u64 {
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}
