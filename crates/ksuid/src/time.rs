use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds between the Unix epoch and the KSUID epoch.
///
/// Shifting the epoch forward gives the 32-bit timestamp a useful range of
/// roughly 136 years starting in 2014, instead of spending it on the past.
pub const EPOCH_OFFSET: i64 = 1_400_000_000;

/// KSUID epoch: Tuesday, May 13, 2014 16:53:20 UTC
pub const KSUID_EPOCH: Duration = Duration::from_secs(EPOCH_OFFSET as u64);

/// Returns the current wall-clock time.
#[must_use]
pub fn now() -> SystemTime {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use web_time::web::SystemTimeExt;
        web_time::SystemTime::now().to_std()
    }
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    {
        SystemTime::now()
    }
}

/// Returns whole seconds since the Unix epoch, rounding toward negative
/// infinity for instants before it.
#[must_use]
pub fn unix_seconds(datetime: SystemTime) -> i64 {
    match datetime.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() == 0 {
                -secs
            } else {
                -secs - 1
            }
        }
    }
}

/// Converts Unix seconds into a corrected KSUID timestamp.
///
/// The result wraps modulo 2^32: instants before the KSUID epoch, or more
/// than ~136 years after it, alias onto the supported range instead of
/// failing.
#[must_use]
pub const fn to_corrected_timestamp(unix_seconds: i64) -> u32 {
    unix_seconds.wrapping_sub(EPOCH_OFFSET) as u32
}

/// Converts a corrected KSUID timestamp back into a UTC instant.
#[must_use]
pub fn from_corrected_timestamp(timestamp: u32) -> SystemTime {
    UNIX_EPOCH + KSUID_EPOCH + Duration::from_secs(u64::from(timestamp))
}
