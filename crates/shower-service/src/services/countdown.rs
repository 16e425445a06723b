//! Countdown service

use chrono::{DateTime, Utc};

use shower_core::TimeLeft;

use crate::dto::CountdownResponse;

use super::context::ServiceContext;

/// Countdown service
pub struct CountdownService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CountdownService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Time left to the event as of `now`
    pub fn time_left(&self, now: DateTime<Utc>) -> CountdownResponse {
        let target = self.ctx.event_starts_at();
        CountdownResponse::new(target, TimeLeft::until(target, now))
    }
}
