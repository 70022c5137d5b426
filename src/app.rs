use crate::config::Settings;
use crate::sources::{CachedFetcher, Fetch, HttpFetcher, SourceError};

/// Everything a request handler needs. Built once at startup and shared by
/// all server workers; the fetcher's cache is the only state that outlives
/// a request.
pub struct App {
    pub settings: Settings,
    pub fetcher: Box<dyn Fetch>,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, SourceError> {
        let http = HttpFetcher::new(settings.request_timeout())?;
        let fetcher = CachedFetcher::new(http, settings.cache_ttl());
        Ok(Self::with_fetcher(settings, fetcher))
    }

    pub fn with_fetcher(settings: Settings, fetcher: impl Fetch + 'static) -> Self {
        Self {
            settings,
            fetcher: Box::new(fetcher),
        }
    }
}
