use std::sync::{Arc, Mutex};

use color_eyre::eyre::Result;
use strum::Display;

use crate::domain::row::RowId;

/// Named destinations with typed parameters
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Route {
    #[strum(to_string = "ChatDetail")]
    ChatDetail { id: RowId },
    #[strum(to_string = "CallDetail")]
    CallDetail { id: RowId },
    #[strum(to_string = "VideoCall")]
    VideoCall { id: RowId },
    #[strum(to_string = "Archived")]
    Archived,
}

impl Route {
    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::ChatDetail { id } | Route::CallDetail { id } | Route::VideoCall { id } => {
                vec![("id", id.to_string())]
            }
            Route::Archived => vec![],
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &Route) -> Result<()>;
}

/// Keeps a navigation history; the terminal front-end has a single screen
#[derive(Debug, Clone, Default)]
pub struct LogNavigator {
    history: Arc<Mutex<Vec<Route>>>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for LogNavigator {
    fn navigate_to(&self, route: &Route) -> Result<()> {
        log::info!("navigate to {} {:?}", route.name(), route.params());
        if let Ok(mut history) = self.history.lock() {
            history.push(route.clone());
        }
        Ok(())
    }
}
