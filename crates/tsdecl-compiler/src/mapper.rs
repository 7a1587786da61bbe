//! Discovered classes to declaration records.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use indexmap::IndexMap;
use indexmap::map::Entry as IndexEntry;
use tracing::{debug, trace};
use tsdecl_core::{ClassKind, ClassMetadata, MetadataProvider, TypeDescriptor};

use crate::descriptor::normalize;
use crate::nullability;
use crate::transform::{ClassContext, ClassTransformer};
use crate::typegen::typescript::naming::declared_name;
use crate::walker::{Discovered, DiscoveredClassSet};
use crate::{Config, Error, Result};

/// One emitted member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: String,
    /// Normalized type, never `Nullable` at the top; see `nullable`.
    pub ty: TypeDescriptor,
    pub nullable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParameterDescriptor {
    pub name: String,
    pub bounds: Vec<TypeDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclarationKind {
    Interface,
    /// String-literal union of the constant names.
    Enum { constants: Vec<String> },
    /// Union of the listed classes.
    Union { members: Vec<String> },
}

/// Declaration record for one expanded class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Fully-qualified source name.
    pub name: String,
    /// Declared type name.
    pub output_name: String,
    pub kind: DeclarationKind,
    pub type_parameters: Vec<TypeParameterDescriptor>,
    pub parent: Option<TypeDescriptor>,
    pub members: Vec<MemberDescriptor>,
}

/// Members of a class after visibility filtering, transformers and
/// nullability resolution.
///
/// Members sharing a name (a field and its getter) merge into one: the first
/// keeps its position and type, and the result is nullable if any of them is.
pub(crate) fn collect_members(
    cx: &ClassContext<'_>,
    config: &Config,
    transformers: &dyn ClassTransformer,
) -> Vec<MemberDescriptor> {
    let class = cx.class;
    let candidates = class
        .properties
        .iter()
        .filter(|p| p.is_observable())
        .filter(|p| config.include_static || !p.is_static)
        .filter(|p| config.include_computed || !p.computed)
        .collect();

    let mut members: IndexMap<String, MemberDescriptor> = IndexMap::new();
    for property in transformers.transform_property_list(candidates, cx) {
        let ty = transformers.transform_property_type(property.ty.clone(), property, cx);
        if ty.strip_nullable().0.is_function() {
            trace!(class = %class.name, member = %property.name, "function member skipped");
            continue;
        }

        let name = transformers.transform_property_name(property.name.clone(), property, cx);
        let resolved = nullability::resolve(property, &ty, class.nullability_default, config);
        match members.entry(name) {
            IndexEntry::Occupied(mut e) => e.get_mut().nullable |= resolved.nullable,
            IndexEntry::Vacant(e) => {
                let name = e.key().clone();
                e.insert(MemberDescriptor {
                    name,
                    ty: resolved.ty,
                    nullable: resolved.nullable,
                });
            }
        }
    }
    members.into_values().collect()
}

/// Builds one [`ClassDescriptor`] per expanded class.
pub struct DeclarationMapper<'a> {
    provider: &'a dyn MetadataProvider,
    config: &'a Config,
    transformers: &'a dyn ClassTransformer,
}

impl<'a> DeclarationMapper<'a> {
    pub fn new(
        provider: &'a dyn MetadataProvider,
        config: &'a Config,
        transformers: &'a dyn ClassTransformer,
    ) -> Self {
        Self {
            provider,
            config,
            transformers,
        }
    }

    /// Map every expanded class of `discovered`, in discovery order.
    ///
    /// Excluded classes without a mapping are referenced by their simple
    /// name, so they take part in collision detection too.
    pub fn map(&self, discovered: &DiscoveredClassSet<'_>) -> Result<Vec<ClassDescriptor>> {
        let mut names: HashMap<String, String> = HashMap::new();
        let mut out = Vec::with_capacity(discovered.len());

        for (name, entry) in discovered.iter() {
            match entry {
                Discovered::Excluded => {
                    if self.config.mapping(name).is_none() {
                        claim(&mut names, declared_name(name), name)?;
                    }
                }
                Discovered::Expanded(class) => {
                    let descriptor = self.map_class(class);
                    claim(&mut names, descriptor.output_name.clone(), &descriptor.name)?;
                    debug!(
                        class = %descriptor.name,
                        members = descriptor.members.len(),
                        "mapped"
                    );
                    out.push(descriptor);
                }
            }
        }
        Ok(out)
    }

    pub fn map_class(&self, class: &ClassMetadata) -> ClassDescriptor {
        let kind = match &class.kind {
            ClassKind::Class => DeclarationKind::Interface,
            ClassKind::Enum { constants } => DeclarationKind::Enum {
                constants: constants.clone(),
            },
            ClassKind::Sealed { subclasses } => DeclarationKind::Union {
                members: subclasses.clone(),
            },
        };

        let (type_parameters, parent, members) = match kind {
            DeclarationKind::Interface => {
                let cx = ClassContext::new(class, self.provider);
                (
                    self.type_parameters(class),
                    self.parent(class),
                    collect_members(&cx, self.config, self.transformers),
                )
            }
            _ => (Vec::new(), None, Vec::new()),
        };

        ClassDescriptor {
            name: class.name.clone(),
            output_name: declared_name(&class.name),
            kind,
            type_parameters,
            parent,
            members,
        }
    }

    fn type_parameters(&self, class: &ClassMetadata) -> Vec<TypeParameterDescriptor> {
        class
            .type_parameters
            .iter()
            .map(|p| TypeParameterDescriptor {
                name: p.name.clone(),
                bounds: p.bounds.iter().map(|b| normalize(b, self.config)).collect(),
            })
            .collect()
    }

    /// The `extends` target, unless the superclass is excluded or is the
    /// sealed class this one is a case of.
    fn parent(&self, class: &ClassMetadata) -> Option<TypeDescriptor> {
        let name = class.superclass_name()?;
        if self.config.is_excluded(name) {
            return None;
        }
        if self.provider.class(name).is_some_and(ClassMetadata::is_sealed) {
            return None;
        }
        class.superclass.as_ref().map(|s| normalize(s, self.config))
    }
}

/// Record that `class` is known as `output_name` in the emitted text.
fn claim(names: &mut HashMap<String, String>, output_name: String, class: &str) -> Result<()> {
    match names.entry(output_name) {
        Entry::Occupied(e) => Err(Error::NameCollision {
            name: e.key().clone(),
            first: e.get().clone(),
            second: class.to_string(),
        }),
        Entry::Vacant(e) => {
            e.insert(class.to_string());
            Ok(())
        }
    }
}
