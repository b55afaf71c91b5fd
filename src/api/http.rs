use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

const USER_AGENT: &str = "league_lookup/0.1.0";
const MAX_RETRIES: u32 = 3;

// Riot development keys allow 20 requests per second.
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Blocking GET with a shared rate limiter. Non-success statuses other than
/// 429 are reported as absence (`Ok(None)`), matching how upstream signals
/// an unknown summoner or champion.
pub struct HttpFetcher {
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        HttpFetcher {
            agent,
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
        }
    }

    fn wait_for_slot(&self) {
        let clock = DefaultClock::default();
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(clock.now()));
        }
    }

    pub fn get(&self, url: &str, riot_token: Option<&str>) -> Result<Option<String>, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_slot();
            tracing::debug!(%url, "GET");

            let mut request = self.agent.get(url);
            if let Some(token) = riot_token {
                request = request.set("X-Riot-Token", token);
            }

            match request.call() {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map(Some)
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    tracing::warn!(%url, wait_ms, "rate limited, backing off");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(status, _)) => {
                    if status == 401 || status == 403 {
                        tracing::warn!(%url, status, "request rejected, check RIOT_API_KEY");
                    } else {
                        tracing::debug!(%url, status, "non-success status");
                    }
                    return Ok(None);
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}
