use std::future::Future;
use std::sync::Arc;

use color_eyre::eyre::{Report, Result};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::task::TaskTracker;

use crate::{
    core::{
        cmd::Cmd,
        msg::{row::RowMsg, system::SystemMsg, Msg},
    },
    domain::row::RowId,
    infrastructure::{
        device::{CameraAccess, Haptics},
        navigation::Navigator,
        row_source::RowSource,
    },
    model::permission::Message as PermissionMessage,
};

/// Collaborators the commands run against
#[derive(Clone)]
pub struct Services {
    pub row_source: Arc<dyn RowSource>,
    pub haptics: Arc<dyn Haptics>,
    pub navigator: Arc<dyn Navigator>,
    pub camera: Arc<dyn CameraAccess>,
}

/// Command executor that bridges Elm commands to the collaborators
///
/// Synchronous collaborators (haptics, navigation) run inline. Everything else
/// runs in a tracked tokio task and reports back through `msg_sender`, so the
/// event loop never waits on I/O. Row source commands form a chain: each one
/// starts after the previous has finished, so the store applies commits in
/// the order `update` issued them.
pub struct CmdExecutor {
    services: Services,
    msg_sender: mpsc::UnboundedSender<Msg>,
    tracker: TaskTracker,
    /// Last row source command issued
    row_tail: Option<JoinHandle<()>>,
}

impl CmdExecutor {
    pub fn new(services: Services, msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            services,
            msg_sender,
            tracker: TaskTracker::new(),
            row_tail: None,
        }
    }

    /// Number of commands still running in the background
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Wait until every spawned command has finished
    pub async fn settle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    pub fn execute_commands(&mut self, commands: Vec<Cmd>) {
        for cmd in commands {
            self.execute_command(cmd);
        }
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: Cmd) {
        match cmd {
            // A missing haptic engine never undoes the commit it accompanies
            Cmd::Haptic(intensity) => {
                if let Err(e) = self.services.haptics.emit(intensity) {
                    log::warn!("Haptic feedback failed: {e}");
                }
            }

            Cmd::Navigate(route) => {
                if let Err(e) = self.services.navigator.navigate_to(&route) {
                    self.report_error("Navigation", e);
                }
            }

            Cmd::LoadRows { revision } => {
                let source = Arc::clone(&self.services.row_source);
                self.spawn_ordered("LoadRows", async move {
                    let rows = source.list_rows().await?;
                    Ok(Some(Msg::Row(RowMsg::RowsFetched { rows, revision })))
                });
            }

            Cmd::SetPinned { id, pinned } => {
                let source = Arc::clone(&self.services.row_source);
                self.spawn_mutation("SetPinned", id.clone(), async move {
                    source.set_pinned(id, pinned).await
                });
            }

            Cmd::SetArchived { id, archived } => {
                let source = Arc::clone(&self.services.row_source);
                self.spawn_mutation("SetArchived", id.clone(), async move {
                    source.set_archived(id, archived).await
                });
            }

            Cmd::DeleteRow { id } => {
                let source = Arc::clone(&self.services.row_source);
                self.spawn_mutation("DeleteRow", id.clone(), async move {
                    source.delete_row(id).await
                });
            }

            Cmd::MarkRead { id } => {
                let source = Arc::clone(&self.services.row_source);
                self.spawn_mutation("MarkRead", id.clone(), async move {
                    source.mark_read(id).await
                });
            }

            Cmd::RequestCameraPermission => {
                let camera = Arc::clone(&self.services.camera);
                let sender = self.msg_sender.clone();
                self.tracker.spawn(async move {
                    let message = match camera.request().await {
                        Ok(true) => PermissionMessage::Granted,
                        Ok(false) => PermissionMessage::Denied,
                        Err(e) => {
                            log::error!("Camera permission request failed: {e}");
                            PermissionMessage::Denied
                        }
                    };
                    send(&sender, Msg::Camera(message));
                });
            }
        }
    }

    /// Run `task` in the background once every earlier row source command is done
    ///
    /// Its message (or error) goes back to the loop.
    fn spawn_ordered<F>(&mut self, label: &'static str, task: F)
    where
        F: Future<Output = Result<Option<Msg>>> + Send + 'static,
    {
        let previous = self.row_tail.take();
        let sender = self.msg_sender.clone();
        let handle = self.tracker.spawn(async move {
            if let Some(previous) = previous {
                if let Err(e) = previous.await {
                    log::error!("{label}: previous row source command panicked: {e}");
                }
            }
            match task.await {
                Ok(Some(msg)) => send(&sender, msg),
                Ok(None) => {}
                Err(e) => send(&sender, error_msg(label, &e)),
            }
        });
        self.row_tail = Some(handle);
    }

    fn spawn_mutation<F>(&mut self, label: &'static str, id: RowId, task: F)
    where
        F: Future<Output = Result<bool>> + Send + 'static,
    {
        self.spawn_ordered(label, async move {
            if !task.await? {
                // Deleted in the meantime
                log::debug!("{label}: row {id} no longer exists");
            }
            Ok(None)
        });
    }

    fn report_error(&self, label: &str, e: Report) {
        send(&self.msg_sender, error_msg(label, &e));
    }
}

fn error_msg(label: &str, e: &Report) -> Msg {
    log::error!("{label} failed: {e:?}");
    Msg::System(SystemMsg::ShowError {
        label: label.to_string(),
        message: e.to_string(),
    })
}

fn send(sender: &mpsc::UnboundedSender<Msg>, msg: Msg) {
    if sender.send(msg).is_err() {
        log::debug!("message dropped: event loop is gone");
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use color_eyre::eyre::eyre;
    use futures::future::BoxFuture;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::row::Row,
        infrastructure::{
            device::{ConfiguredCameraAccess, RecordingHaptics},
            navigation::{LogNavigator, Route},
            row_source::InMemoryRowSource,
        },
        model::gesture::HapticIntensity,
    };

    struct FailingRowSource;

    impl RowSource for FailingRowSource {
        fn list_rows(&self) -> BoxFuture<'_, Result<Vec<Row>>> {
            Box::pin(async { Err(eyre!("storage offline")) })
        }
        fn set_pinned(&self, _id: RowId, _pinned: bool) -> BoxFuture<'_, Result<bool>> {
            Box::pin(async { Err(eyre!("storage offline")) })
        }
        fn set_archived(&self, _id: RowId, _archived: bool) -> BoxFuture<'_, Result<bool>> {
            Box::pin(async { Err(eyre!("storage offline")) })
        }
        fn delete_row(&self, _id: RowId) -> BoxFuture<'_, Result<bool>> {
            Box::pin(async { Err(eyre!("storage offline")) })
        }
        fn mark_read(&self, _id: RowId) -> BoxFuture<'_, Result<bool>> {
            Box::pin(async { Err(eyre!("storage offline")) })
        }
    }

    struct Fixture {
        executor: CmdExecutor,
        receiver: mpsc::UnboundedReceiver<Msg>,
        source: InMemoryRowSource,
        haptics: RecordingHaptics,
        navigator: LogNavigator,
    }

    fn fixture(haptics: RecordingHaptics, camera_access: bool) -> Fixture {
        let source = InMemoryRowSource::new(vec![Row::new("1", "Sarah Johnson", Utc::now())]);
        let navigator = LogNavigator::new();
        let services = Services {
            row_source: Arc::new(source.clone()),
            haptics: Arc::new(haptics.clone()),
            navigator: Arc::new(navigator.clone()),
            camera: Arc::new(ConfiguredCameraAccess::new(camera_access)),
        };
        let (sender, receiver) = mpsc::unbounded_channel();
        Fixture {
            executor: CmdExecutor::new(services, sender),
            receiver,
            source,
            haptics,
            navigator,
        }
    }

    fn drain(receiver: &mut mpsc::UnboundedReceiver<Msg>) -> Vec<Msg> {
        let mut msgs = vec![];
        while let Ok(msg) = receiver.try_recv() {
            msgs.push(msg);
        }
        msgs
    }

    #[tokio::test]
    async fn test_delete_reaches_row_source() -> Result<()> {
        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_commands(vec![
            Cmd::Haptic(HapticIntensity::Heavy),
            Cmd::DeleteRow {
                id: RowId::new("1"),
            },
        ]);
        f.executor.settle().await;

        assert_eq!(f.haptics.pulses(), vec![HapticIntensity::Heavy]);
        assert!(f.source.list_rows().await?.is_empty());
        assert!(drain(&mut f.receiver).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_haptic_failure_does_not_abort_commit() -> Result<()> {
        let mut f = fixture(RecordingHaptics::failing(), true);
        f.executor.execute_commands(vec![
            Cmd::Haptic(HapticIntensity::Medium),
            Cmd::SetPinned {
                id: RowId::new("1"),
                pinned: true,
            },
        ]);
        f.executor.settle().await;

        let rows = f.source.list_rows().await?;
        assert!(rows[0].pinned);
        assert!(drain(&mut f.receiver).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_rows_reports_back() {
        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_command(Cmd::LoadRows { revision: 3 });
        f.executor.settle().await;

        let msgs = drain(&mut f.receiver);
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Row(RowMsg::RowsFetched { rows, revision: 3 })] if rows.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_load_sees_earlier_mutations() {
        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_commands(vec![
            Cmd::SetPinned {
                id: RowId::new("1"),
                pinned: true,
            },
            Cmd::LoadRows { revision: 1 },
        ]);
        f.executor.settle().await;

        let msgs = drain(&mut f.receiver);
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Row(RowMsg::RowsFetched { rows, .. })] if rows[0].pinned
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mutations_persist_in_issue_order() -> Result<()> {
        for _ in 0..200 {
            let mut f = fixture(RecordingHaptics::new(), true);
            let commands = [true, false, true]
                .into_iter()
                .map(|pinned| Cmd::SetPinned {
                    id: RowId::new("1"),
                    pinned,
                })
                .collect();
            f.executor.execute_commands(commands);
            f.executor.settle().await;

            assert!(f.source.list_rows().await?[0].pinned);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_row_is_not_an_error() {
        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_command(Cmd::SetArchived {
            id: RowId::new("404"),
            archived: true,
        });
        f.executor.settle().await;
        assert!(drain(&mut f.receiver).is_empty());
    }

    #[tokio::test]
    async fn test_row_source_failure_shows_error() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let services = Services {
            row_source: Arc::new(FailingRowSource),
            haptics: Arc::new(RecordingHaptics::new()),
            navigator: Arc::new(LogNavigator::new()),
            camera: Arc::new(ConfiguredCameraAccess::new(true)),
        };
        let mut executor = CmdExecutor::new(services, sender);
        executor.execute_command(Cmd::DeleteRow {
            id: RowId::new("1"),
        });
        executor.settle().await;

        assert_eq!(
            drain(&mut receiver),
            vec![Msg::System(SystemMsg::ShowError {
                label: "DeleteRow".to_string(),
                message: "storage offline".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_camera_request_outcome() {
        let mut f = fixture(RecordingHaptics::new(), false);
        f.executor.execute_command(Cmd::RequestCameraPermission);
        f.executor.settle().await;
        assert_eq!(
            drain(&mut f.receiver),
            vec![Msg::Camera(PermissionMessage::Denied)]
        );

        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_command(Cmd::RequestCameraPermission);
        f.executor.settle().await;
        assert_eq!(
            drain(&mut f.receiver),
            vec![Msg::Camera(PermissionMessage::Granted)]
        );
    }

    #[tokio::test]
    async fn test_navigate_runs_inline() {
        let mut f = fixture(RecordingHaptics::new(), true);
        f.executor.execute_command(Cmd::Navigate(Route::Archived));
        assert_eq!(f.executor.pending(), 0);
        assert_eq!(f.navigator.history(), vec![Route::Archived]);
    }
}
