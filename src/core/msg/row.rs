use crate::{
    domain::row::{Row, RowId},
    model::gesture::SwipeAction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMsg {
    /// A row action requested without a swipe (keyboard shortcut)
    ActionRequested { id: RowId, action: SwipeAction },
    /// The row was tapped
    Opened(RowId),
    VideoCallRequested(RowId),
    ArchivedViewToggled,
    RowsRequested,
    /// Row source snapshot, taken after every mutation issued before `revision`
    RowsFetched { rows: Vec<Row>, revision: u64 },
}
