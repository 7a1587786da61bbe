//! Emission assembler: declaration records to `.d.ts` text.

use tracing::debug;
use tsdecl_core::utils::to_js_string;
use tsdecl_core::{Colors, MetadataProvider};

use super::naming::reference_name;
use super::{Config, TsType, TypeRenderer};
use crate::mapper::{ClassDescriptor, DeclarationKind, MemberDescriptor, TypeParameterDescriptor};
use crate::{Location, Result};

/// One rendered declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Fully-qualified source class.
    pub class: String,
    /// Declared type name.
    pub name: String,
    pub text: String,
}

/// Assembled output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emission {
    /// Each declaration on its own, in output order.
    pub declarations: Vec<Declaration>,
    /// All declarations separated by blank lines, newline-terminated.
    pub text: String,
}

/// TypeScript emitter over mapped declaration records.
pub struct Emitter<'a> {
    renderer: TypeRenderer<'a>,
    engine: &'a crate::Config,
    config: &'a Config,
}

impl<'a> Emitter<'a> {
    pub fn new(
        provider: &'a dyn MetadataProvider,
        engine: &'a crate::Config,
        config: &'a Config,
    ) -> Self {
        Self {
            renderer: TypeRenderer::new(provider, engine, config),
            engine,
            config,
        }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit every declaration once, in the given order.
    pub fn emit(&self, classes: &[ClassDescriptor]) -> Result<Emission> {
        let declarations = classes
            .iter()
            .map(|class| {
                Ok(Declaration {
                    class: class.name.clone(),
                    name: class.output_name.clone(),
                    text: self.emit_declaration(class)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut text = declarations
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        if !text.is_empty() {
            text.push('\n');
        }

        debug!(declarations = declarations.len(), bytes = text.len(), "assembled");
        Ok(Emission { declarations, text })
    }

    fn emit_declaration(&self, class: &ClassDescriptor) -> Result<String> {
        match &class.kind {
            DeclarationKind::Interface => self.emit_interface(class),
            DeclarationKind::Enum { constants } => {
                let c = self.c();
                let literals = constants
                    .iter()
                    .map(|k| c.paint(c.literal, &to_js_string(k)))
                    .collect::<Vec<_>>();
                Ok(self.emit_type_decl(&class.output_name, &self.union_body(literals)))
            }
            DeclarationKind::Union { members } => {
                let c = self.c();
                let names = members
                    .iter()
                    .map(|m| c.paint(c.name, &reference_name(m, self.engine)))
                    .collect::<Vec<_>>();
                Ok(self.emit_type_decl(&class.output_name, &self.union_body(names)))
            }
        }
    }

    fn union_body(&self, alternatives: Vec<String>) -> String {
        if alternatives.is_empty() {
            let c = self.c();
            return c.paint(c.keyword, "never");
        }
        alternatives.join(" | ")
    }

    fn export_prefix(&self) -> String {
        if !self.config.export {
            return String::new();
        }
        let c = self.c();
        format!("{} ", c.paint(c.keyword, "export"))
    }

    /// `export type Name = Body;`
    fn emit_type_decl(&self, name: &str, body: &str) -> String {
        let c = self.c();
        format!(
            "{}{} {} = {};",
            self.export_prefix(),
            c.paint(c.keyword, "type"),
            c.paint(c.name, name),
            body
        )
    }

    fn emit_interface(&self, class: &ClassDescriptor) -> Result<String> {
        let c = self.c();
        let mut out = self.export_prefix();

        // Header: interface Name<T> extends Parent {
        out.push_str(&c.paint(c.keyword, "interface"));
        out.push(' ');
        out.push_str(&c.paint(c.name, &class.output_name));
        out.push_str(&self.type_parameters(class)?);
        if let Some(parent) = &class.parent {
            let parent = self
                .renderer
                .render(parent)
                .map_err(|e| e.at(Location::class(&class.name)))?;
            out.push_str(&format!(" {} {parent}", c.paint(c.keyword, "extends")));
        }
        out.push_str(" {\n");

        for member in &class.members {
            let ty = self
                .member_type(member)
                .map_err(|e| e.at(Location::member(&class.name, &member.name)))?;
            let marker = if member.nullable { "?" } else { "" };
            out.push_str(&format!(
                "{:indent$}{}{marker}: {ty};\n",
                "",
                member.name,
                indent = self.config.indent
            ));
        }

        out.push('}');
        Ok(out)
    }

    /// Nullable members get the absent marker in their type as well as the
    /// `?` on their name.
    fn member_type(&self, member: &MemberDescriptor) -> Result<TsType> {
        let ty = self.renderer.render(&member.ty)?;
        Ok(if member.nullable {
            ty.or(self.renderer.void())
        } else {
            ty
        })
    }

    /// `<T extends A & B, U>`; bounds rendering to `any` are dropped.
    fn type_parameters(&self, class: &ClassDescriptor) -> Result<String> {
        if class.type_parameters.is_empty() {
            return Ok(String::new());
        }
        let c = self.c();
        let parameters = class
            .type_parameters
            .iter()
            .map(|p| self.type_parameter(p, &class.name, c))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("<{}>", parameters.join(", ")))
    }

    fn type_parameter(
        &self,
        parameter: &TypeParameterDescriptor,
        class: &str,
        c: Colors,
    ) -> Result<String> {
        let mut bounds = Vec::new();
        for bound in &parameter.bounds {
            let rendered = self
                .renderer
                .render(bound)
                .map_err(|e| e.at(Location::class(class)))?;
            if !rendered.is_any() {
                bounds.push(rendered.to_string());
            }
        }
        if bounds.is_empty() {
            return Ok(parameter.name.clone());
        }
        Ok(format!(
            "{} {} {}",
            parameter.name,
            c.paint(c.keyword, "extends"),
            bounds.join(" & ")
        ))
    }
}
