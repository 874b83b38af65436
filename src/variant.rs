// Variant registry and dispatcher.
// A capability contract is a trait; a variant is a concrete type implementing it
// and tagged with a family. A `Resolver` maps selection keys to constructors so the
// caller only ever holds the capability, never the concrete type.

use std::collections::hash_map::Entry;
use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{PatternError, Result};

// ============================================================================
// Families and variants
// ============================================================================

/// Label grouping variants that are meant to collaborate with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Family(&'static str);

impl Family {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub trait Variant {
    fn family(&self) -> Family;
    fn variant_name(&self) -> &'static str;
}

impl<V: Variant + ?Sized> Variant for Box<V> {
    fn family(&self) -> Family {
        (**self).family()
    }

    fn variant_name(&self) -> &'static str {
        (**self).variant_name()
    }
}

/// A variant that hands out further variants, all of which must share its family.
pub trait VariantSet: Variant {
    fn members(&self) -> Vec<Box<dyn Variant>>;

    fn check_consistent(&self) -> Result<()> {
        let family = self.family();
        match self.members().into_iter().find(|m| m.family() != family) {
            Some(stray) => Err(PatternError::contract_violation(
                stray.variant_name(),
                format!("member of the {family} family"),
            )),
            None => Ok(()),
        }
    }
}

impl<S: VariantSet + ?Sized> VariantSet for Box<S> {
    fn members(&self) -> Vec<Box<dyn Variant>> {
        (**self).members()
    }
}

// ============================================================================
// Resolver
// ============================================================================

pub type Constructor<T> = Box<dyn Fn() -> T>;

/// Keys are matched trimmed and ASCII case-insensitively.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

pub struct Resolver<T> {
    domain: &'static str,
    family: Option<Family>,
    entries: FxHashMap<String, Constructor<T>>,
}

impl<T: Variant> Resolver<T> {
    pub fn new(domain: &'static str) -> Self {
        Self {
            domain,
            family: None,
            entries: FxHashMap::default(),
        }
    }

    /// A resolver whose every variant must report `family`.
    pub fn for_family(domain: &'static str, family: Family) -> Self {
        Self {
            family: Some(family),
            ..Self::new(domain)
        }
    }

    pub fn domain(&self) -> &'static str {
        self.domain
    }

    pub fn family(&self) -> Option<Family> {
        self.family
    }

    pub fn register_variant<F>(&mut self, key: &str, constructor: F) -> Result<()>
    where
        F: Fn() -> T + 'static,
    {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(PatternError::contract_violation(
                self.domain,
                "register a variant under an empty key",
            ));
        }

        match self.entries.entry(key) {
            Entry::Occupied(slot) => {
                tracing::warn!(domain = self.domain, key = %slot.key(), "duplicate registration rejected");
                Err(PatternError::conflict(self.domain, slot.key().as_str()))
            }
            Entry::Vacant(slot) => {
                tracing::info!(domain = self.domain, key = %slot.key(), "variant registered");
                slot.insert(Box::new(constructor));
                Ok(())
            }
        }
    }

    /// Chaining form of [`Resolver::register_variant`] for building catalogs.
    pub fn with_variant<F>(mut self, key: &str, constructor: F) -> Result<Self>
    where
        F: Fn() -> T + 'static,
    {
        self.register_variant(key, constructor)?;
        Ok(self)
    }

    pub fn resolve(&self, key: &str) -> Result<T> {
        let constructor = self.entries.get(&normalize_key(key)).ok_or_else(|| {
            tracing::warn!(domain = self.domain, key, "unknown selection key");
            PatternError::not_found(self.domain, key.trim())
        })?;

        let variant = constructor();
        if let Some(expected) = self.family {
            if variant.family() != expected {
                return Err(PatternError::contract_violation(
                    variant.variant_name(),
                    format!("belong to the {expected} family"),
                ));
            }
        }

        tracing::debug!(
            domain = self.domain,
            key,
            variant = variant.variant_name(),
            family = %variant.family(),
            "variant resolved"
        );
        Ok(variant)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: VariantSet> Resolver<T> {
    /// Resolves a kit and checks every member it hands out shares its family.
    pub fn resolve_set(&self, key: &str) -> Result<T> {
        let set = self.resolve(key)?;
        set.check_consistent()?;
        Ok(set)
    }
}

impl<T: Variant> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("domain", &self.domain)
            .field("family", &self.family)
            .field("keys", &self.keys())
            .finish()
    }
}
