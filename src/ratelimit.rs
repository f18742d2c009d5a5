use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use std::{num::NonZeroU32, time::Duration};

// Keep well below what the Federal Reserve site tolerates from one client.
const REQ_PER_SEC: NonZeroU32 = nonzero!(10u32);
const MS_BETWEEN_REQ: Duration = Duration::from_millis(50);

type SpecificGovernorRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock, NoOpMiddleware<QuantaInstant>>;

pub struct RateLimiter {
    req_per_sec: SpecificGovernorRateLimiter,
    ms_between_req: Option<SpecificGovernorRateLimiter>,
}

impl RateLimiter {
    pub fn new() -> Self {
        // Limit to X total req/sec on average.
        let req_per_sec = GovernorRateLimiter::direct(Quota::per_second(REQ_PER_SEC));

        // No two requests closer than Y ms. A zero period has no quota.
        let ms_between_req = Quota::with_period(MS_BETWEEN_REQ).map(GovernorRateLimiter::direct);

        RateLimiter {
            req_per_sec,
            ms_between_req,
        }
    }

    pub async fn wait_until_ready(&self) {
        // Per-second budget first, then the spacing check, so a burst that
        // clears the first gate still leaves one request per Y ms.
        self.req_per_sec.until_ready().await;
        if let Some(ms_between_req) = &self.ms_between_req {
            ms_between_req.until_ready().await;
        }
    }
}
