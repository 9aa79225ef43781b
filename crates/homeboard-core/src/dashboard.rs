//! The dashboard context.
//!
//! `Dashboard` is constructed once and owns everything the feeds share: the
//! configuration, the cache, the provider client, the board they render into
//! and the scheduler driving them. Nothing lives in global state, so several
//! dashboards can run side by side.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api::ApiClient;
use crate::board::{self, Board};
use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::models::{Post, Weather};
use crate::scheduler::{FeedDescriptor, FeedStats, Scheduler};
use crate::widgets;

pub const FEED_KEYS: [&str; 3] = [board::WEATHER, board::NEWS, board::CURRENCY];

/// Status line material for one feed.
#[derive(Debug, Clone)]
pub struct FeedSummary {
    pub key: &'static str,
    pub age: Option<String>,
    pub stats: Option<FeedStats>,
}

pub struct Dashboard {
    config: Arc<Config>,
    api: ApiClient,
    board: Board,
    scheduler: Scheduler,
}

impl Dashboard {
    pub fn new(config: Config, cache: ExpiringCache, board: Board) -> Result<Self> {
        for key in FEED_KEYS {
            board.register(key);
        }

        Ok(Self {
            config: Arc::new(config),
            api: ApiClient::new()?,
            board,
            scheduler: Scheduler::new(cache),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cache(&self) -> &ExpiringCache {
        self.scheduler.cache()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Start the weather, news and currency feeds. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        info!("Starting dashboard feeds");
        let weather = self.weather_feed();
        let news = self.news_feed();
        let currency = self.currency_feed();
        self.scheduler.start(weather);
        self.scheduler.start(news);
        self.scheduler.start(currency);
    }

    /// Drop cached values and restart every feed, forcing a fetch now.
    pub fn refresh_all(&mut self) {
        info!("Manual refresh of all feeds");
        for key in FEED_KEYS {
            self.cache().remove(key);
        }
        self.start();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop_all();
    }

    pub fn feed_summaries(&self) -> Vec<FeedSummary> {
        FEED_KEYS
            .iter()
            .map(|&key| FeedSummary {
                key,
                age: self.cache().age_display(key),
                stats: self.scheduler.status().get(key),
            })
            .collect()
    }

    fn weather_feed(&self) -> FeedDescriptor<Weather> {
        let api = self.api.clone();
        let config = Arc::clone(&self.config);
        let render_board = self.board.clone();
        let error_board = self.board.clone();

        FeedDescriptor::new(
            board::WEATHER,
            move || {
                let api = api.clone();
                let config = Arc::clone(&config);
                async move { api.fetch_weather(&config.weather).await }
            },
            move |weather: &Weather| widgets::weather::render(&render_board, weather),
        )
        .on_error(move |_| widgets::weather::render_error(&error_board))
        .every(self.config.refresh.weather())
        .max_age(self.config.cache_max_age())
    }

    fn news_feed(&self) -> FeedDescriptor<Vec<Post>> {
        let api = self.api.clone();
        let config = Arc::clone(&self.config);
        let render_board = self.board.clone();
        let error_board = self.board.clone();
        let limit = self.config.news.limit;

        FeedDescriptor::new(
            board::NEWS,
            move || {
                let api = api.clone();
                let config = Arc::clone(&config);
                async move { api.fetch_news(&config.news).await }
            },
            move |posts: &Vec<Post>| widgets::news::render(&render_board, posts, limit),
        )
        .on_error(move |_| widgets::news::render_error(&error_board))
        .every(self.config.refresh.news())
        .max_age(self.config.cache_max_age())
    }

    fn currency_feed(&self) -> FeedDescriptor<f64> {
        let api = self.api.clone();
        let config = Arc::clone(&self.config);
        let render_board = self.board.clone();
        let error_board = self.board.clone();
        let base = self.config.currency.base.clone();
        let code = self.config.currency.code.clone();

        FeedDescriptor::new(
            board::CURRENCY,
            move || {
                let api = api.clone();
                let config = Arc::clone(&config);
                async move { api.fetch_exchange_rate(&config.currency).await }
            },
            move |rate: &f64| widgets::currency::render(&render_board, &base, &code, *rate),
        )
        .on_error(move |_| widgets::currency::render_error(&error_board))
        .every(self.config.refresh.currency())
        .max_age(self.config.cache_max_age())
    }
}
