//! Reporting of malformed input
//!
//! Malformed surrogates never stop a write; they turn into `?`. This module
//! decides how loudly that gets reported. **Loud reporting is disabled by
//! default**: substitutions are logged at debug level only. Enable it with
//! `set_diagnostics_enabled(true)` or the `GLYPHRUN_DIAGNOSTICS=1`
//! environment variable to get a warning per substitution.
//!
//! # Example
//!
//! ```
//! use glyphrun_core::diagnostics;
//!
//! diagnostics::set_diagnostics_enabled(true);
//! assert!(diagnostics::is_diagnostics_enabled());
//! diagnostics::set_diagnostics_enabled(false);
//! ```
//!
//! # Environment Variable
//!
//! ```bash
//! GLYPHRUN_DIAGNOSTICS=1 RUST_LOG=warn ./my_app
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::decode::Malformation;

/// Global flag for loud reporting (disabled by default)
static DIAGNOSTICS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Malformed code units seen since process start
static MALFORMED_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Whether the env var has been checked
static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var("GLYPHRUN_DIAGNOSTICS") {
            let enabled = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
            if enabled {
                DIAGNOSTICS_ENABLED.store(true, Ordering::SeqCst);
                log::info!("Glyphrun diagnostics enabled via GLYPHRUN_DIAGNOSTICS env var");
            }
        }
    });
}

/// Check if loud reporting is enabled
///
/// Reads `GLYPHRUN_DIAGNOSTICS` on first call. Runtime changes via
/// [`set_diagnostics_enabled`] take precedence afterwards.
pub fn is_diagnostics_enabled() -> bool {
    check_env();
    DIAGNOSTICS_ENABLED.load(Ordering::SeqCst)
}

/// Enable or disable loud reporting at runtime
pub fn set_diagnostics_enabled(enabled: bool) {
    check_env();
    DIAGNOSTICS_ENABLED.store(enabled, Ordering::SeqCst);
    log::debug!(
        "Glyphrun diagnostics {} via runtime call",
        if enabled { "enabled" } else { "disabled" }
    );
}

/// Number of malformed code units replaced since process start
pub fn malformed_count() -> usize {
    MALFORMED_COUNT.load(Ordering::Relaxed)
}

/// Record one `?` substitution at code unit `index`
pub fn report_malformed(index: usize, malformation: Malformation) {
    MALFORMED_COUNT.fetch_add(1, Ordering::Relaxed);

    let what = match malformation {
        Malformation::MissingLowSurrogate { high } => {
            format!("high surrogate U+{high:04X} at end of text")
        },
        Malformation::InvalidLowSurrogate { high, next } => {
            format!("high surrogate U+{high:04X} followed by U+{next:04X}")
        },
        Malformation::UnpairedLowSurrogate { low } => {
            format!("low surrogate U+{low:04X} without high surrogate")
        },
    };

    if is_diagnostics_enabled() {
        log::warn!("Malformed UTF-16 at unit {index}: {what}; drawing '?'");
    } else {
        log::debug!("Malformed UTF-16 at unit {index}: {what}; drawing '?'");
    }
}
