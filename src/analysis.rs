//! Memoized trait queries for an analysis pass.
//!
//! An [`Analyzer`] answers [`query_trait`] for type records and keeps every
//! answer in a cache keyed by predicate and full type path. Answers depend
//! only on the records, so lookup order never changes a result.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt::Write;

use tracing::{debug, error, trace};

use crate::config::Config;
use crate::descriptor::TypeInfo;
use crate::traits::{Divergence, Predicate, QueryError, Queryable, query_trait, verify};

/// Cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug)]
pub struct Analyzer {
    config: Config,
    cache: BTreeMap<(Predicate, String), bool>,
    hits: usize,
    misses: usize,
}

fn spelling(types: &[&TypeInfo]) -> String {
    let mut out = String::new();
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", ty.path());
    }
    out
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        debug!(%config, "analyzer created");
        Self { config, cache: BTreeMap::new(), hits: 0, misses: 0 }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Answer the predicate called `name` for `types`.
    pub fn query(&mut self, name: &str, types: &[&TypeInfo]) -> Result<bool, QueryError> {
        match Predicate::from_name(name) {
            Some(predicate) => self.evaluate(predicate, types),
            None => Err(QueryError::UnknownPredicate),
        }
    }

    /// Answer `predicate` for `types`, consulting the cache first.
    ///
    /// With debug checks enabled, cache hits are re-evaluated and a stale
    /// entry is logged and replaced.
    pub fn evaluate(&mut self, predicate: Predicate, types: &[&TypeInfo]) -> Result<bool, QueryError> {
        let key = (predicate, spelling(types));
        if let Some(&cached) = self.cache.get(&key) {
            self.hits += 1;
            debug!(%predicate, types = %key.1, cached, "trait cache hit");
            if self.config.debug_checks {
                let fresh = predicate.evaluate(types)?;
                if fresh != cached {
                    error!(%predicate, types = %key.1, cached, fresh, "stale trait cache entry");
                    self.cache.insert(key, fresh);
                    return Ok(fresh);
                }
            }
            return Ok(cached);
        }

        self.misses += 1;
        let answer = predicate.evaluate(types)?;
        trace!(%predicate, types = %key.1, answer, "trait query");
        self.cache.insert(key, answer);
        Ok(answer)
    }

    /// Compare both backends on `T`, logging the outcome.
    pub fn verify<T: Queryable>(&self) -> Result<(), Divergence> {
        let outcome = verify::<T>();
        if let Err(divergence) = &outcome {
            error!(%divergence, backend = %self.config.backend, "backends disagree");
        }
        outcome
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats { hits: self.hits, misses: self.misses, entries: self.cache.len() }
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Config::BUILD)
    }
}

/// Run every predicate over every record and pair in `corpus`.
///
/// Ill-formed combinations are skipped; the result lists each answered
/// query once, in cache order.
pub fn survey(analyzer: &mut Analyzer, corpus: &[&TypeInfo]) -> alloc::vec::Vec<(Predicate, String, bool)> {
    for &ty in corpus {
        for &p in Predicate::UNARY {
            let _ = analyzer.evaluate(p, &[ty]);
        }
        for &arg in corpus {
            for &p in Predicate::BINARY {
                let _ = analyzer.evaluate(p, &[ty, arg]);
            }
        }
    }
    analyzer.cache.iter().map(|((p, spelled), &answer)| (*p, spelled.clone(), answer)).collect()
}
