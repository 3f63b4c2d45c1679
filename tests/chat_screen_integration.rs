use std::sync::Arc;

use chatshell::{
    core::cmd_executor::Services,
    domain::row::{Row, RowId, RowKind},
    infrastructure::{
        config::Config,
        device::{ConfiguredCameraAccess, RecordingHaptics},
        navigation::{LogNavigator, Route},
        row_source::{InMemoryRowSource, RowSource},
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};
use chrono::Utc;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

struct Harness {
    runner: AppRunner,
    tui: Arc<Mutex<TestTui>>,
    source: InMemoryRowSource,
    navigator: LogNavigator,
}

impl Harness {
    async fn new(camera_access: bool) -> Result<Self> {
        let now = Utc::now();
        let source = InMemoryRowSource::new(vec![
            Row::new("1", "Sarah Johnson", now).with_unread_count(2),
            Row::new("2", "Design Team", now).with_unread_count(5),
            Row::new("3", "Mom", now).with_kind(RowKind::Call),
            Row::new("4", "Book Club", now).archived(true),
        ]);
        let navigator = LogNavigator::new();
        let services = Services {
            row_source: Arc::new(source.clone()),
            haptics: Arc::new(RecordingHaptics::new()),
            navigator: Arc::new(navigator.clone()),
            camera: Arc::new(ConfiguredCameraAccess::new(camera_access)),
        };
        let tui = Arc::new(Mutex::new(TestTui::new(40, 20)?));
        let mut runner = AppRunner::new(&Config::default(), tui.clone(), services);
        runner.start().await?;
        runner.settle().await?;
        Ok(Self {
            runner,
            tui,
            source,
            navigator,
        })
    }

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
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Vec<Event> {
    [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ]
    .into_iter()
    .map(|kind| {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    })
    .collect()
}

#[tokio::test]
async fn test_search_filters_rows() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(vec![
        key(KeyCode::Char('/')),
        key(KeyCode::Char('d')),
        key(KeyCode::Char('e')),
        key(KeyCode::Char('s')),
        key(KeyCode::Enter),
    ])
    .await?;

    assert_eq!(h.runner.state().chat_list.query(), "des");
    let screen = h.screen().await;
    assert!(screen.contains("Design Team"));
    assert!(!screen.contains("Sarah Johnson"));

    h.play(vec![key(KeyCode::Esc)]).await?;
    assert!(h.screen().await.contains("Sarah Johnson"));
    Ok(())
}

#[tokio::test]
async fn test_search_without_matches() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(vec![key(KeyCode::Char('/')), key(KeyCode::Char('z'))])
        .await?;

    assert!(h.screen().await.contains("No results for \"z\""));
    Ok(())
}

#[tokio::test]
async fn test_footer_opens_archived_view() -> Result<()> {
    let mut h = Harness::new(true).await?;
    assert!(h.screen().await.contains("Archived (1)"));

    // Footer line follows three two-line rows
    h.play(click(5, 12)).await?;

    assert!(h.runner.state().chat_list.is_showing_archived());
    assert_eq!(h.navigator.history(), vec![Route::Archived]);
    let screen = h.screen().await;
    assert!(screen.contains("Book Club"));
    assert!(screen.contains("‹ Back to Chats"));
    assert!(!screen.contains("Sarah Johnson"));

    h.play(vec![key(KeyCode::Char('A'))]).await?;
    assert!(!h.runner.state().chat_list.is_showing_archived());
    Ok(())
}

#[tokio::test]
async fn test_tap_opens_and_marks_read() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(click(20, 8)).await?;

    assert_eq!(
        h.navigator.history(),
        vec![Route::ChatDetail {
            id: RowId::new("2")
        }]
    );
    let rows = h.source.list_rows().await?;
    assert_eq!(rows[1].unread_count, 0);
    assert_eq!(rows[0].unread_count, 2);
    Ok(())
}

#[tokio::test]
async fn test_tap_on_call_row_opens_call_detail() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(click(20, 10)).await?;

    assert_eq!(
        h.navigator.history(),
        vec![Route::CallDetail {
            id: RowId::new("3")
        }]
    );
    Ok(())
}

#[tokio::test]
async fn test_avatar_tap_shows_preview() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(click(1, 6)).await?;
    assert!(h.screen().await.contains("Esc to close"));
    assert!(h.navigator.history().is_empty());

    h.play(vec![key(KeyCode::Esc)]).await?;
    assert!(!h.screen().await.contains("Esc to close"));
    Ok(())
}

#[tokio::test]
async fn test_video_call_after_camera_grant() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(vec![key(KeyCode::Char('j')), key(KeyCode::Char('v'))])
        .await?;

    assert_eq!(
        h.navigator.history(),
        vec![Route::VideoCall {
            id: RowId::new("1")
        }]
    );
    assert_eq!(h.runner.state().system.pending_video_call, None);
    Ok(())
}

#[tokio::test]
async fn test_video_call_denied_shows_error() -> Result<()> {
    let mut h = Harness::new(false).await?;

    h.play(vec![key(KeyCode::Char('j')), key(KeyCode::Char('v'))])
        .await?;

    assert!(h.navigator.history().is_empty());
    assert!(h.runner.state().status_bar.is_error());
    assert!(h.screen().await.contains("access denied"));
    Ok(())
}

#[tokio::test]
async fn test_keyboard_delete_removes_selected_row() -> Result<()> {
    let mut h = Harness::new(true).await?;

    h.play(vec![
        key(KeyCode::Char('j')),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('d')),
    ])
    .await?;

    let ids: Vec<RowId> = h
        .source
        .list_rows()
        .await?
        .into_iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(ids, vec![RowId::new("1"), RowId::new("3"), RowId::new("4")]);
    Ok(())
}
