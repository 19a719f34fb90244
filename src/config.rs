//! Build configuration.
//!
//! Cargo features are the only switches. [`Config::BUILD`] is derived from
//! them with `cfg!`, and Cargo unifies features across a build, so every
//! crate linked together observes the same value.

use core::fmt;

use derive_more::Display;

use crate::traits::{Backend, DefaultBackend};

/// Which backend answers compile-time queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum BackendKind {
    #[display("builtin")]
    Builtin,
    #[display("portable")]
    Portable,
}

/// Explicit configuration for an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    pub backend: BackendKind,
    /// Route container and iterator precondition violations to [`crate::debug::fail`].
    pub debug_checks: bool,
    pub std: bool,
    pub alloc: bool,
}

impl Config {
    /// The configuration this crate was compiled with.
    ///
    /// Debug checks are on with the `debug-checks` feature or in builds with
    /// debug assertions.
    pub const BUILD: Config = Config {
        backend: <DefaultBackend as Backend>::KIND,
        debug_checks: cfg!(any(feature = "debug-checks", debug_assertions)),
        std: cfg!(feature = "std"),
        alloc: cfg!(feature = "alloc"),
    };

    pub const fn with_backend(self, backend: BackendKind) -> Self {
        Self { backend, ..self }
    }

    pub const fn with_debug_checks(self, debug_checks: bool) -> Self {
        Self { debug_checks, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::BUILD
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backend={} debug_checks={} std={} alloc={}",
            self.backend, self.debug_checks, self.std, self.alloc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_features() {
        let build = Config::BUILD;
        assert_eq!(build.std, cfg!(feature = "std"));
        assert_eq!(build.alloc, cfg!(feature = "alloc"));
        assert_eq!(build.backend, <DefaultBackend as Backend>::KIND);
        assert_eq!(Config::default(), build);
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::BUILD.with_debug_checks(false).with_backend(BackendKind::Builtin);
        assert!(!cfg.debug_checks);
        assert_eq!(cfg.backend, BackendKind::Builtin);
        assert_eq!(cfg.std, Config::BUILD.std);
    }
}
