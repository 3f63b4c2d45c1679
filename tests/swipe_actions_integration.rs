use std::sync::Arc;

use chatshell::{
    core::cmd_executor::Services,
    domain::row::{Row, RowId},
    infrastructure::{
        config::Config,
        device::{ConfiguredCameraAccess, RecordingHaptics},
        navigation::LogNavigator,
        row_source::{InMemoryRowSource, RowSource},
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
    model::gesture::{CancelPolicy, HapticIntensity},
};
use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

// First row on a 40x20 screen
const FIRST_ROW_Y: u16 = 6;

struct Harness {
    runner: AppRunner,
    tui: Arc<Mutex<TestTui>>,
    source: InMemoryRowSource,
    haptics: RecordingHaptics,
}

impl Harness {
    async fn new(config: Config) -> Result<Self> {
        let now = Utc::now();
        let source = InMemoryRowSource::new(vec![
            Row::new("1", "Sarah Johnson", now).with_last_message("See you tomorrow"),
            Row::new("2", "Design Team", now).with_unread_count(3),
        ]);
        let haptics = RecordingHaptics::new();
        let services = Services {
            row_source: Arc::new(source.clone()),
            haptics: Arc::new(haptics.clone()),
            navigator: Arc::new(LogNavigator::new()),
            camera: Arc::new(ConfiguredCameraAccess::new(true)),
        };
        let tui = Arc::new(Mutex::new(TestTui::new(40, 20)?));
        let mut runner = AppRunner::new(&config, tui.clone(), services);
        runner.start().await?;
        runner.settle().await?;
        Ok(Self {
            runner,
            tui,
            source,
            haptics,
        })
    }

    /// Feed every event through the loop, then let background commands finish
    async fn play(&mut self, events: Vec<Event>) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            for event in events {
                tui.enqueue_event(event);
            }
        }
        while self.tui.lock().await.pending_events() > 0 {
            self.runner.run_one_cycle().await?;
        }
        self.runner.settle().await
    }

    async fn screen(&self) -> String {
        self.tui.lock().await.screen_text()
    }

    /// Only the list region, without the status line
    async fn list_text(&self) -> String {
        let screen = self.screen().await;
        screen.lines().skip(6).take(13).collect::<Vec<_>>().join("\n")
    }

    async fn stored(&self, id: &str) -> Result<Option<Row>> {
        let rows = self.source.list_rows().await?;
        Ok(rows.into_iter().find(|row| row.id == RowId::new(id)))
    }
}

fn mouse(kind: MouseEventKind, column: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row: FIRST_ROW_Y,
        modifiers: KeyModifiers::NONE,
    })
}

fn swipe(from: u16, to: u16) -> Vec<Event> {
    vec![
        mouse(MouseEventKind::Down(MouseButton::Left), from),
        mouse(MouseEventKind::Drag(MouseButton::Left), to),
        mouse(MouseEventKind::Up(MouseButton::Left), to),
    ]
}

#[tokio::test]
async fn test_full_left_swipe_deletes_row() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;
    assert!(h.list_text().await.contains("Sarah Johnson"));

    // 25 columns are 200 units, past the delete threshold
    h.play(swipe(30, 5)).await?;

    assert_eq!(h.runner.state().chat_list.row(&RowId::new("1")), None);
    assert_eq!(h.stored("1").await?, None);
    assert_eq!(h.haptics.pulses(), vec![HapticIntensity::Heavy]);
    assert!(!h.list_text().await.contains("Sarah Johnson"));
    assert!(h.screen().await.contains("[Deleted] Sarah Johnson"));
    Ok(())
}

#[tokio::test]
async fn test_medium_left_swipe_archives_row() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;

    // 12 columns are 96 units, between the archive and delete thresholds
    h.play(swipe(30, 18)).await?;

    assert_eq!(h.stored("1").await?.map(|row| row.archived), Some(true));
    let list = h.list_text().await;
    assert!(!list.contains("Sarah Johnson"));
    assert!(list.contains("Archived (1)"));
    assert_eq!(h.haptics.pulses(), vec![HapticIntensity::Medium]);
    Ok(())
}

#[tokio::test]
async fn test_right_swipe_toggles_pin() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;

    h.play(swipe(5, 16)).await?;
    assert_eq!(h.stored("1").await?.map(|row| row.pinned), Some(true));

    h.play(swipe(5, 16)).await?;
    assert_eq!(h.stored("1").await?.map(|row| row.pinned), Some(false));
    assert_eq!(
        h.haptics.pulses(),
        vec![HapticIntensity::Medium, HapticIntensity::Medium]
    );
    Ok(())
}

#[tokio::test]
async fn test_short_swipe_springs_back() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;

    h.play(swipe(30, 25)).await?;

    let row = h.stored("1").await?;
    assert_eq!(row.as_ref().map(|row| (row.pinned, row.archived)), Some((false, false)));
    assert!(h.haptics.pulses().is_empty());
    assert!(h.runner.state().gestures.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_live_drag_reveals_pending_action() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;

    h.play(vec![
        mouse(MouseEventKind::Down(MouseButton::Left), 30),
        mouse(MouseEventKind::Drag(MouseButton::Left), 5),
    ])
    .await?;

    assert!(h.list_text().await.contains("Delete"));
    assert_eq!(h.runner.state().ui.dragging, Some(RowId::new("1")));
    // Nothing is committed before the release
    assert!(h.stored("1").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_focus_loss_commits_by_default() -> Result<()> {
    let mut h = Harness::new(Config::default()).await?;

    h.play(vec![
        mouse(MouseEventKind::Down(MouseButton::Left), 30),
        mouse(MouseEventKind::Drag(MouseButton::Left), 5),
        Event::FocusLost,
    ])
    .await?;

    assert_eq!(h.stored("1").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_focus_loss_discards_when_configured() -> Result<()> {
    let mut config = Config::default();
    config.gesture.cancel_policy = CancelPolicy::Discard;
    let mut h = Harness::new(config).await?;

    h.play(vec![
        mouse(MouseEventKind::Down(MouseButton::Left), 30),
        mouse(MouseEventKind::Drag(MouseButton::Left), 5),
        Event::FocusLost,
    ])
    .await?;

    assert!(h.stored("1").await?.is_some());
    assert!(h.haptics.pulses().is_empty());
    assert_eq!(h.runner.state().ui.dragging, None);
    Ok(())
}
