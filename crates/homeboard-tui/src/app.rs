//! Application state for the homeboard terminal front end.
//!
//! `App` owns the dashboard context plus the purely local widgets: the
//! digital time, the calendar, the analog clock, the task checklist and the
//! backdrop palette.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Local, Timelike};
use tracing::{debug, warn};

use homeboard_core::board::{self, Board};
use homeboard_core::cache::{ExpiringCache, FileStore, KeyValueStore, MemoryStore};
use homeboard_core::clock::SystemClock;
use homeboard_core::models::TaskList;
use homeboard_core::utils::format_clock_time;
use homeboard_core::widgets::{Backdrop, CalendarDay, HandAngles};
use homeboard_core::{Config, Dashboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

pub struct App {
    pub dashboard: Dashboard,
    pub state: AppState,

    pub tasks: TaskList,
    pub task_selection: usize,

    pub calendar: CalendarDay,
    pub clock_hands: HandAngles,
    pub backdrop: Backdrop,

    // Status message
    pub status_message: Option<String>,

    clock_minute: Option<u32>,
    // Finished cycles per feed when a manual refresh started
    refresh_baseline: Option<Vec<u64>>,
}

const REFRESHING_MESSAGE: &str = "Refreshing feeds...";

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let cache_dir = config.cache_dir().unwrap_or_else(|_| PathBuf::from("./cache"));
        debug!(?cache_dir, "Cache directory configured");

        let store: Arc<dyn KeyValueStore> = match FileStore::new(cache_dir) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!(error = %e, "Falling back to in-memory cache");
                Arc::new(MemoryStore::new())
            }
        };
        let cache = ExpiringCache::new(store, Arc::new(SystemClock));

        let dashboard = Dashboard::new(config, cache, Board::new())?;
        Ok(Self::with_dashboard(dashboard))
    }

    pub fn with_dashboard(dashboard: Dashboard) -> Self {
        dashboard.board().register(board::TIME);
        dashboard.board().register(board::CALENDAR);

        let tasks = TaskList::from_titles(dashboard.config().tasks.iter().cloned());

        let now = Local::now();
        let mut app = Self {
            dashboard,
            state: AppState::Normal,
            tasks,
            task_selection: 0,
            calendar: CalendarDay::from_date(now.date_naive()),
            clock_hands: HandAngles::at(now.time()),
            backdrop: Backdrop::random(),
            status_message: None,
            clock_minute: None,
            refresh_baseline: None,
        };
        app.update_clock(now);
        app
    }

    pub fn board(&self) -> &Board {
        self.dashboard.board()
    }

    /// Start the remote feeds. Needs the tokio runtime.
    pub fn start(&mut self) {
        self.dashboard.start();
    }

    /// Advance the local widgets to the current time.
    pub fn tick(&mut self) {
        self.update_clock(Local::now());
        self.check_refresh();
    }

    fn update_clock(&mut self, now: DateTime<Local>) {
        let board = self.dashboard.board();
        board.set_text(board::TIME, format_clock_time(&now.naive_local()));

        if self.calendar.roll_to(now.date_naive()) || self.clock_minute.is_none() {
            board.set_lines(
                board::CALENDAR,
                vec![
                    self.calendar.weekday.clone(),
                    self.calendar.day.to_string(),
                    self.calendar.month_year.clone(),
                ],
            );
        }

        // The analog face only moves once a minute
        if self.clock_minute != Some(now.minute()) {
            self.clock_minute = Some(now.minute());
            self.clock_hands = HandAngles::at(now.time());
        }
    }

    pub fn refresh(&mut self) {
        self.refresh_baseline = Some(self.finished_cycles());
        self.dashboard.refresh_all();
        self.status_message = Some(REFRESHING_MESSAGE.to_string());
    }

    fn finished_cycles(&self) -> Vec<u64> {
        self.dashboard
            .feed_summaries()
            .iter()
            .map(|s| {
                s.stats
                    .as_ref()
                    .map(|st| st.hits + st.fetches + st.failures)
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Drop the refresh notice once every feed has finished a cycle since.
    fn check_refresh(&mut self) {
        let Some(baseline) = &self.refresh_baseline else {
            return;
        };
        let done = self
            .finished_cycles()
            .iter()
            .zip(baseline)
            .all(|(now, before)| now > before);
        if done {
            self.refresh_baseline = None;
            if self.status_message.as_deref() == Some(REFRESHING_MESSAGE) {
                self.status_message = None;
            }
        }
    }

    pub fn select_next_task(&mut self) {
        if self.task_selection + 1 < self.tasks.len() {
            self.task_selection += 1;
        }
    }

    pub fn select_prev_task(&mut self) {
        self.task_selection = self.task_selection.saturating_sub(1);
    }

    pub fn toggle_selected_task(&mut self) {
        if let Some(done) = self.tasks.toggle(self.task_selection) {
            let remaining = self.tasks.remaining();
            self.status_message = Some(if done {
                format!("Task done, {} remaining", remaining)
            } else {
                format!("Task reopened, {} remaining", remaining)
            });
        }
    }

    pub fn shutdown(&mut self) {
        self.dashboard.stop();
    }
}
