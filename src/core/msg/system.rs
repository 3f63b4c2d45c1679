/// Messages handled by the system part of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),
    Tick,
    ShowError { label: String, message: String },
    ShowInfo { label: String, message: String },
    ClearStatus,
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick)
    }
}
