//! A typed-result error-propagation core.
//!
//! Fallible operations return a [`TypedResult`] whose failure side is a closed
//! [`FailureKind`] enumeration. Results can be inspected, mapped, and handed
//! to single-shot completion callbacks, either synchronously or from work
//! running on the tokio runtime.

#![deny(clippy::wildcard_enum_match_arm)]

use cfg_if::cfg_if;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

pub mod completion;
pub mod division;
pub mod exts;
pub mod swap;
pub mod typed_result;

pub use completion::{
    divide_with_completion, from_completion, spawn_with_completion, to_completion, Completion,
};
pub use division::{divide, DivisionFailure};
pub use exts::{OptionExt, ResultExt};
pub use swap::{swap, swap_at, swap_cells, SwapError};
pub use typed_result::{inspect, map, FailureKind, Tag, TypedResult};

/// Filter used when `RUST_LOG` is unset or unparseable.
const DEFAULT_FILTER: &str = "fallible=debug,info";

/// Install the global tracing subscriber.
///
/// Debug builds get pretty output with an uptime timer; release builds get the
/// compact default format.
pub fn init_tracing() -> Result<(), TryInitError> {
    cfg_if! {
        if #[cfg(debug_assertions)] {
            let fmt_layer = fmt::layer().with_timer(fmt::time::uptime()).pretty();
        } else {
            let fmt_layer = fmt::layer();
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt_layer)
        .try_init()
}
