//! Class graph discovery.
//!
//! Starting from the roots, follows superclasses, type-parameter bounds,
//! sealed subclasses and member types until no new class turns up. Classes
//! are keyed by name in an insertion-ordered set; a name already present is
//! never traversed again, which is what terminates self- and mutually
//! referencing graphs.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::{debug, trace};
use tsdecl_core::{ClassKind, ClassMetadata, MetadataProvider};

use crate::descriptor::normalize;
use crate::mapper::collect_members;
use crate::transform::{ClassContext, ClassTransformer};
use crate::{Config, Error, Result};

/// How a discovered class is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discovered<'p> {
    /// Expanded into its own declaration.
    Expanded(&'p ClassMetadata),
    /// Native or mapped: referenced by name only.
    Excluded,
}

/// Every class reachable from the roots, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct DiscoveredClassSet<'p> {
    classes: IndexMap<String, Discovered<'p>>,
}

impl<'p> DiscoveredClassSet<'p> {
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn get(&self, class: &str) -> Option<Discovered<'p>> {
        self.classes.get(class).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Discovered<'p>)> + '_ {
        self.classes.iter().map(|(name, d)| (name.as_str(), *d))
    }

    /// Classes to declare, in discovery order.
    pub fn expanded(&self) -> impl Iterator<Item = &'p ClassMetadata> + '_ {
        self.classes.values().filter_map(|d| match d {
            Discovered::Expanded(class) => Some(*class),
            Discovered::Excluded => None,
        })
    }

    /// Names recorded as excluded, in discovery order.
    pub fn excluded(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes
            .iter()
            .filter(|(_, d)| matches!(d, Discovered::Excluded))
            .map(|(name, _)| name.as_str())
    }
}

/// Breadth-first walker over the class graph.
///
/// Borrows the provider for `'p` (the lifetime of the discovered set) and
/// the configuration only for the walk itself.
pub struct ClassGraphWalker<'p, 'c> {
    provider: &'p dyn MetadataProvider,
    config: &'c Config,
    transformers: &'c dyn ClassTransformer,
}

impl<'p, 'c> ClassGraphWalker<'p, 'c> {
    pub fn new(
        provider: &'p dyn MetadataProvider,
        config: &'c Config,
        transformers: &'c dyn ClassTransformer,
    ) -> Self {
        Self {
            provider,
            config,
            transformers,
        }
    }

    /// Discover the transitive closure of `roots`.
    ///
    /// The order is fully determined by the roots and the metadata: roots
    /// first, then each class's dependencies in declaration order.
    pub fn discover<I, S>(&self, roots: I) -> Result<DiscoveredClassSet<'p>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = DiscoveredClassSet::default();
        let mut queue: VecDeque<(String, Option<String>)> =
            roots.into_iter().map(|r| (r.into(), None)).collect();

        while let Some((name, referenced_from)) = queue.pop_front() {
            if set.contains(&name) {
                trace!(class = %name, "already discovered");
                continue;
            }

            if self.config.is_opaque(&name) {
                debug!(class = %name, "excluded");
                set.classes.insert(name, Discovered::Excluded);
                continue;
            }

            let Some(class) = self.provider.class(&name) else {
                return Err(Error::UnknownClass {
                    class: name,
                    referenced_from,
                });
            };

            self.check_superclass_chain(class)?;

            let dependencies = self.dependencies(class);
            debug!(class = %name, dependencies = dependencies.len(), "discovered");
            for dependency in dependencies {
                if !set.contains(&dependency) {
                    queue.push_back((dependency, Some(name.clone())));
                }
            }
            set.classes.insert(name, Discovered::Expanded(class));
        }

        debug!(
            expanded = set.expanded().count(),
            excluded = set.excluded().count(),
            "discovery finished"
        );
        Ok(set)
    }

    /// Class names `class` depends on, in the order they are enqueued.
    ///
    /// Enums depend on nothing and sealed classes only on their cases. An
    /// excluded superclass is never emitted, so it is not followed.
    fn dependencies(&self, class: &ClassMetadata) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        match &class.kind {
            ClassKind::Enum { .. } => return out,
            ClassKind::Sealed { subclasses } => {
                out.extend(subclasses.iter().cloned());
                return out;
            }
            ClassKind::Class => {}
        }

        let mut push = |ty: &tsdecl_core::TypeDescriptor| {
            let ty = normalize(ty, self.config);
            out.extend(ty.referenced_classes().into_iter().map(str::to_string));
        };
        if let Some(superclass) = &class.superclass
            && !class
                .superclass_name()
                .is_some_and(|name| self.config.is_excluded(name))
        {
            push(superclass);
        }
        for parameter in &class.type_parameters {
            parameter.bounds.iter().for_each(&mut push);
        }

        let cx = ClassContext::new(class, self.provider);
        for member in collect_members(&cx, self.config, self.transformers) {
            out.extend(member.ty.referenced_classes().into_iter().map(str::to_string));
        }
        out
    }

    /// Follow superclass links from `class`; revisiting a class is corrupt
    /// input rather than a legitimate reference cycle.
    fn check_superclass_chain(&self, class: &ClassMetadata) -> Result<()> {
        let mut chain = vec![class.name.as_str()];
        let mut current = class;
        while let Some(parent) = current.superclass_name() {
            if self.config.is_opaque(parent) {
                break;
            }
            if chain.contains(&parent) {
                chain.push(parent);
                return Err(Error::CyclicSuperclass {
                    chain: chain.into_iter().map(str::to_string).collect(),
                });
            }
            chain.push(parent);
            match self.provider.class(parent) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(())
    }
}
