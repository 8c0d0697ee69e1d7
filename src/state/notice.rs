//! Error notices surfaced by the request pipeline.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Oldest notices are dropped beyond this many.
pub const MAX_NOTICES: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Visible notice list. Provided as an `RwSignal` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append an error message and return its id.
    pub fn push_error(&mut self, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, message: message.to_owned() });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
