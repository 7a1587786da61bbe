//! Type descriptor to TypeScript type expression.

use tsdecl_core::{MetadataProvider, TypeDescriptor};

use super::naming::reference_name;
use super::{Config, TsType};
use crate::{Error, Result};

/// Renders normalized descriptors as TypeScript type expressions.
pub struct TypeRenderer<'a> {
    provider: &'a dyn MetadataProvider,
    engine: &'a crate::Config,
    config: &'a Config,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(
        provider: &'a dyn MetadataProvider,
        engine: &'a crate::Config,
        config: &'a Config,
    ) -> Self {
        Self {
            provider,
            engine,
            config,
        }
    }

    /// Render `ty`. Unknown primitives and nested function types fail with
    /// [`Error::UnsupportedType`] without a location; callers attach one.
    pub fn render(&self, ty: &TypeDescriptor) -> Result<TsType> {
        match ty {
            TypeDescriptor::Primitive { name } => self.primitive(name),
            TypeDescriptor::Reference { class, arguments } => {
                let name = reference_name(class, self.engine);
                if arguments.is_empty() {
                    return Ok(TsType::new(name));
                }
                let arguments = arguments
                    .iter()
                    .map(|a| self.render(a).map(|t| t.to_string()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TsType::new(format!("{name}<{}>", arguments.join(", "))))
            }
            TypeDescriptor::GenericParameter { name } => Ok(TsType::new(name.clone())),
            TypeDescriptor::Array { element } => {
                let element = self.render(element)?;
                Ok(TsType::new(format!("{}[]", element.with_parens())))
            }
            TypeDescriptor::Map { key, value } => self.map(key, value),
            TypeDescriptor::Nullable { inner } => Ok(self.render(inner)?.or(self.void())),
            TypeDescriptor::Function => Err(Error::UnsupportedType {
                type_name: "function".to_string(),
                location: None,
            }),
        }
    }

    /// The absent marker.
    pub fn void(&self) -> TsType {
        TsType::new(self.config.void_type.as_str())
    }

    fn primitive(&self, name: &str) -> Result<TsType> {
        if let Some(mapped) = self.engine.mapping(name) {
            return Ok(TsType::new(mapped));
        }
        let rendered = match name {
            "byte" | "short" | "int" | "long" | "integer" | "ubyte" | "ushort" | "uint"
            | "ulong" => self.config.int_type_name.as_str(),
            "float" | "double" | "number" | "decimal" => "number",
            "boolean" | "bool" => "boolean",
            "char" | "string" => "string",
            "any" | "object" => "any",
            _ => {
                return Err(Error::UnsupportedType {
                    type_name: name.to_string(),
                    location: None,
                });
            }
        };
        Ok(TsType::new(rendered))
    }

    fn map(&self, key: &TypeDescriptor, value: &TypeDescriptor) -> Result<TsType> {
        let key_ts = self.render(key)?;
        let value_ts = self.render(value)?;

        let enum_key = match key {
            TypeDescriptor::Reference { class, .. } => {
                self.engine.mapping(class).is_none()
                    && self.provider.class(class).is_some_and(|c| c.is_enum())
            }
            _ => false,
        };
        if enum_key {
            return Ok(TsType::new(format!("{{ [key in {key_ts}]: {value_ts} }}")));
        }

        let key_text = key_ts.to_string();
        if key_text == "string" || key_text == "number" || key_text == self.config.int_type_name {
            return Ok(TsType::new(format!("{{ [key: {key_text}]: {value_ts} }}")));
        }
        Ok(TsType::new(format!("Map<{key_text}, {value_ts}>")))
    }
}
