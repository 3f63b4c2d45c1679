/// Search input and other screen-local UI messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    SearchStarted,
    SearchInput(char),
    SearchBackspace,
    /// Leave the search input and keep the query
    SearchFinished,
    /// Leave the search input and clear the query
    SearchCancelled,
}
