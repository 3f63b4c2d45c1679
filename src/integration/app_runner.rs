use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd_executor::Services,
        msg::{row::RowMsg, Msg},
        state::{AppState, Settings},
    },
    infrastructure::{
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

enum Input {
    Msg(Msg),
    Event(Option<Event>),
}

/// Drives the chat screen: terminal events and background results in,
/// frames out
///
/// The host is injected, so the same loop runs against a real terminal
/// and against `TestTui`.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
}

impl AppRunner {
    pub fn new(config: &Config, tui: Arc<Mutex<dyn TuiLike + Send>>, services: Services) -> Self {
        let mut runtime = Runtime::new(AppState::new(Settings::from(config)), services);
        runtime.send_msg(Msg::Row(RowMsg::RowsRequested));
        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Take over the terminal and tell the state how big it is
    pub async fn start(&mut self) -> Result<()> {
        let area = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime.send_event(Event::Resize(area.width, area.height));
        Ok(())
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        while self.run_one_cycle().await? {}

        // Let in-flight mutations reach the row source before leaving
        self.runtime.settle().await;
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Wait for one input, apply it and render if anything changed
    ///
    /// Returns `false` once the state asks to quit. A host that runs out of
    /// events counts as a quit request.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let input = {
            let mut tui = self.tui.lock().await;
            tokio::select! {
                biased;
                Some(msg) = self.runtime.next_msg() => Input::Msg(msg),
                event = tui.next() => Input::Event(event),
            }
        };

        let mut saw_render = false;
        match input {
            Input::Msg(msg) => self.runtime.send_msg(msg),
            Input::Event(None) => self.runtime.send_event(Event::Quit),
            Input::Event(Some(event)) => {
                match event {
                    Event::Resize(w, h) => {
                        self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                        saw_render = true;
                    }
                    Event::Init | Event::Render => saw_render = true,
                    _ => {}
                }
                self.runtime.send_event(event);
            }
        }

        let processed = self.runtime.run_update_cycle();
        if Coalescer::decide_render(processed, saw_render) {
            self.render().await?;
        }

        Ok(!self.runtime.state().system.should_quit)
    }

    /// Drain background commands and their results, then draw once
    pub async fn settle(&mut self) -> Result<()> {
        loop {
            self.runtime.settle().await;
            if self.runtime.run_update_cycle() == 0 {
                break;
            }
        }
        self.render().await
    }

    pub async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
