//! Paginated snapshot fetching

use crate::error::{Error, Result};
use crate::normalize::progress::ProgressCallback;
use crate::platform::PlatformService;
use crate::types::{Milestone, StateFilter};
use tracing::debug;

/// Largest page size both platforms accept
pub const MAX_PER_PAGE: u32 = 100;

/// Page size used when none is configured
pub const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;

/// Lazy sequence of milestone pages
///
/// Pages are requested one at a time starting at page 1. A page with fewer
/// items than `per_page` is the last one. Each pager walks the listing once;
/// create a new one to start over.
pub struct MilestonePages<'a> {
    platform: &'a dyn PlatformService,
    state: StateFilter,
    per_page: u32,
    page: u32,
    finished: bool,
}

impl<'a> MilestonePages<'a> {
    /// Create a pager. `per_page` must be within `1..=MAX_PER_PAGE`.
    pub fn new(
        platform: &'a dyn PlatformService,
        state: StateFilter,
        per_page: u32,
    ) -> Result<Self> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(Error::Config(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
            )));
        }
        Ok(Self {
            platform,
            state,
            per_page,
            page: 1,
            finished: false,
        })
    }

    /// Page number the next call to [`next_page`](Self::next_page) will
    /// request, or `None` once the listing is exhausted
    pub const fn upcoming_page(&self) -> Option<u32> {
        if self.finished { None } else { Some(self.page) }
    }

    /// Fetch the next page
    ///
    /// Returns `Ok(None)` once the listing is exhausted. Errors are wrapped
    /// in [`Error::Fetch`] and leave the pager finished.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Milestone>>> {
        if self.finished {
            return Ok(None);
        }

        let page = self.page;
        let items = match self
            .platform
            .list_milestones(self.state, page, self.per_page)
            .await
        {
            Ok(items) => items,
            Err(e) => {
                self.finished = true;
                return Err(Error::Fetch {
                    page,
                    message: e.to_string(),
                });
            }
        };

        debug!(page, count = items.len(), "fetched milestone page");
        self.page += 1;
        if items.len() < self.per_page as usize {
            self.finished = true;
        }

        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items))
        }
    }
}

/// Fetch every milestone matching `state`, in server order
///
/// Any page failure aborts the whole fetch; a partial snapshot is never
/// returned.
pub async fn fetch_snapshot(
    platform: &dyn PlatformService,
    state: StateFilter,
    per_page: u32,
    progress: &dyn ProgressCallback,
) -> Result<Vec<Milestone>> {
    let mut pages = MilestonePages::new(platform, state, per_page)?;
    let mut snapshot = Vec::new();

    while let Some(page) = pages.upcoming_page() {
        progress.on_page_start(page).await;
        match pages.next_page().await {
            Ok(Some(items)) => {
                progress.on_page_done(page, items.len()).await;
                snapshot.extend(items);
            }
            Ok(None) => {
                progress.on_page_done(page, 0).await;
            }
            Err(e) => {
                progress.on_page_failed(page, &e).await;
                return Err(e);
            }
        }
    }

    debug!(total = snapshot.len(), %state, "fetched milestone snapshot");
    Ok(snapshot)
}
