//! Property rendering: a private field plus a getter/setter pair.

use apigen_core::strip_qualifier;
use apigen_ir::PropertyDescriptor;

use super::MemberRenderer;
use crate::{
    RenderError,
    builder::{RenderBuffer, substitute},
    comment::DocBlock,
    language::PropertyDocs,
    naming::{CasingRule, map_identifier},
};

/// Names derived from one property.
struct PropertyNames {
    ty: String,
    /// `firstCharLower`, escaped
    field: String,
    /// `firstCharUpper`, for accessor names
    suffix: String,
    /// `firstCharLower`, unescaped, for languages that prefix their fields
    lowered: String,
}

impl PropertyNames {
    fn args(&self) -> [&str; 4] {
        [
            self.ty.as_str(),
            self.field.as_str(),
            self.suffix.as_str(),
            self.lowered.as_str(),
        ]
    }
}

impl MemberRenderer<'_> {
    fn property_names(&self, property: &PropertyDescriptor) -> Result<PropertyNames, RenderError> {
        let name = strip_qualifier(&property.name);
        let lowered = map_identifier(name, CasingRule::FirstCharLower);

        Ok(PropertyNames {
            ty: self.types.map_type(&property.type_name)?,
            field: self.language.naming.safe_name(&lowered),
            suffix: map_identifier(name, CasingRule::FirstCharUpper),
            lowered,
        })
    }

    /// Render the private backing field of a property.
    pub fn render_field(
        &self,
        buf: &mut RenderBuffer,
        property: &PropertyDescriptor,
    ) -> Result<(), RenderError> {
        let names = self.property_names(property)?;
        buf.line_with(self.language.syntax.property.field, &names.args())?;
        Ok(())
    }

    /// Render the getter and setter of a property, preceded by a blank line.
    pub fn render_accessors(
        &self,
        buf: &mut RenderBuffer,
        property: &PropertyDescriptor,
    ) -> Result<(), RenderError> {
        let syntax = &self.language.syntax.property;
        let names = self.property_names(property)?;
        let args = names.args();

        let (getter_doc, setter_doc) = match syntax.docs {
            PropertyDocs::OnProperty => (None, None),
            PropertyDocs::OnAccessors { getter, setter } => {
                let field = [names.field.as_str()];
                (
                    Some(DocBlock::new(substitute(getter, &field)?).paragraph(&property.comment)),
                    Some(DocBlock::new(substitute(setter, &field)?).paragraph(&property.comment)),
                )
            }
        };

        buf.blank();
        if let PropertyDocs::OnProperty = syntax.docs {
            self.render_doc(buf, &DocBlock::new(property.comment.as_str()));
        }
        buf.emit(syntax.open, &args)?;

        if let Some(doc) = &getter_doc {
            self.render_doc(buf, doc);
        }
        buf.emit(syntax.getter, &args)?;

        if syntax.blank_between_accessors {
            buf.blank();
        }
        if let Some(doc) = &setter_doc {
            self.render_doc(buf, doc);
        }
        buf.emit(syntax.setter, &args)?;

        buf.emit(syntax.close, &args)?;
        Ok(())
    }
}
