use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::{CmdExecutor, Services},
        msg::Msg,
        state::AppState,
        translator::translate_event,
        update::update,
    },
    infrastructure::tui::Event,
    model::header::Message as HeaderMessage,
    presentation::layout::{content_lines, ScreenLayout},
};

/// Owns the state and drives update cycles
///
/// Messages come from two places: translated terminal events queued by the
/// runner, and results of background commands arriving on the channel.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState, services: Services) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            msg_rx,
            executor: CmdExecutor::new(services, msg_tx),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.executor
    }

    /// Queue a domain message for the next cycle
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Translate a terminal event against the current state and queue the result
    pub fn send_event(&mut self, event: Event) {
        let msgs = translate_event(event, &self.state);
        self.msg_queue.extend(msgs);
    }

    /// Wait for the next background result
    pub async fn next_msg(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        commands
    }

    /// Process all queued messages and execute their commands
    ///
    /// Returns how many messages were processed.
    pub fn run_update_cycle(&mut self) -> usize {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.msg_queue.push_back(msg);
        }

        let mut processed = 0;
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            self.executor.execute_commands(commands);
            processed += 1;
        }

        self.sync_scroll_bounds();
        processed
    }

    /// Wait for background commands to finish
    pub async fn settle(&self) {
        self.executor.settle().await;
    }

    /// Keep the header scroll limit in step with content and screen height
    fn sync_scroll_bounds(&mut self) {
        let layout = ScreenLayout::from_size(self.state.system.width, self.state.system.height);
        let max_offset = layout.max_scroll_offset(
            content_lines(&self.state.chat_list),
            self.state.settings.units_per_line,
        );
        if self.state.header.max_offset() != Some(max_offset) {
            // Resizing never produces commands
            self.process_message(Msg::Header(HeaderMessage::ContentResized { max_offset }));
        }
    }
}
