/// Messages that can be sent to update the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A row action was committed (`[Pinned] Sarah Johnson`)
    RowActionCommitted { action: String, name: String },
    InfoChanged { label: String, message: String },
    ErrorChanged { label: String, message: String },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn set_message(&mut self, label: &str, message: &str, is_error: bool) {
        let normalized_message = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {normalized_message}"));
        self.is_error = is_error;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::RowActionCommitted { action, name } => {
                self.set_message(&action, &name, false)
            }
            Message::InfoChanged { label, message } => self.set_message(&label, &message, false),
            Message::ErrorChanged { label, message } => {
                self.set_message(&format!("ERR: {label}"), &message, true)
            }
            Message::Cleared => {
                self.message = None;
                self.is_error = false;
            }
        }
    }
}
