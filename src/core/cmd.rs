use crate::{
    domain::row::RowId, infrastructure::navigation::Route, model::gesture::HapticIntensity,
};

/// Side effects requested by `update`
///
/// `update` stays pure; `CmdExecutor` turns these into collaborator calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    // Device
    Haptic(HapticIntensity),
    RequestCameraPermission,

    // Navigation
    Navigate(Route),

    // Row source
    /// Snapshot of the row source, stamped with the list revision it was issued at
    LoadRows { revision: u64 },
    SetPinned { id: RowId, pinned: bool },
    SetArchived { id: RowId, archived: bool },
    DeleteRow { id: RowId },
    MarkRead { id: RowId },
}
