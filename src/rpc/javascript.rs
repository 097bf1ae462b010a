//! Codecs for the JavaScript kinds. Shared syntax travels through the Java codecs.

use super::receive::ReceiveQueue;
use super::registry::{Codec, TreeCodec};
use super::send::SendQueue;
use crate::error::RpcError;
use crate::tree::javascript::*;

pub const SCOPE: &str = "javascript";

pub fn codecs() -> Vec<Codec> {
    vec![
        Codec::of::<JsCompilationUnit>(SCOPE),
        Codec::of::<Alias>(SCOPE),
        Codec::of::<ArrowFunction>(SCOPE),
        Codec::of::<Await>(SCOPE),
        Codec::of::<Delete>(SCOPE),
        Codec::of::<ExpressionStatement>(SCOPE),
        Codec::of::<ExpressionWithTypeArguments>(SCOPE),
        Codec::of::<JsImport>(SCOPE),
        Codec::of::<ImportClause>(SCOPE),
        Codec::of::<NamedImports>(SCOPE),
        Codec::of::<ImportSpecifier>(SCOPE),
        Codec::of::<PropertyAssignment>(SCOPE),
        Codec::of::<TemplateExpression>(SCOPE),
        Codec::of::<TemplateSpan>(SCOPE),
        Codec::of::<TypeOf>(SCOPE),
        Codec::of::<TypeDeclaration>(SCOPE),
        Codec::of::<Union>(SCOPE),
        Codec::of::<Intersection>(SCOPE),
        Codec::of::<Void>(SCOPE),
        Codec::of::<StatementExpression>(SCOPE),
        Codec::of::<JsBinary>(SCOPE),
        Codec::of::<JsAssignmentOperation>(SCOPE),
    ]
}

impl TreeCodec for JsCompilationUnit {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("sourcePath", self, before, |node| &node.source_path)?;
        q.get_and_send_option("charset", self, before, |node| node.charset.as_ref())?;
        q.get_and_send_list("statements", self, before, |node| &node.statements)?;
        q.get_and_send("eof", self, before, |node| &node.eof)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(JsCompilationUnit {
            base: q.receive_base(before.map(|node| &node.base))?,
            source_path: q.receive_field("sourcePath", before, |node| &node.source_path)?,
            charset: q.receive_option_field("charset", before, |node| node.charset.as_ref())?,
            statements: q.receive_list_field("statements", before, |node| &node.statements)?,
            eof: q.receive_field("eof", before, |node| &node.eof)?,
        })
    }
}

impl TreeCodec for Alias {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("propertyName", self, before, |node| &node.property_name)?;
        q.get_and_send("alias", self, before, |node| &node.alias)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Alias {
            base: q.receive_base(before.map(|node| &node.base))?,
            property_name: q.receive_field("propertyName", before, |node| &node.property_name)?,
            alias: q.receive_field("alias", before, |node| &node.alias)?,
        })
    }
}

impl TreeCodec for ArrowFunction {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("leadingAnnotations", self, before, |node| &node.leading_annotations)?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send("lambda", self, before, |node| &node.lambda)?;
        q.get_and_send_option("returnTypeExpression", self, before, |node| node.return_type_expression.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ArrowFunction {
            base: q.receive_base(before.map(|node| &node.base))?,
            leading_annotations: q.receive_list_field("leadingAnnotations", before, |node| &node.leading_annotations)?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            lambda: q.receive_field("lambda", before, |node| &node.lambda)?,
            return_type_expression: q.receive_option_field("returnTypeExpression", before, |node| node.return_type_expression.as_ref())?,
        })
    }
}

impl TreeCodec for Await {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Await {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Delete {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Delete {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
        })
    }
}

impl TreeCodec for ExpressionStatement {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ExpressionStatement {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
        })
    }
}

impl TreeCodec for ExpressionWithTypeArguments {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("clazz", self, before, |node| &node.clazz)?;
        q.get_and_send_option("typeArguments", self, before, |node| node.type_arguments.as_ref())?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ExpressionWithTypeArguments {
            base: q.receive_base(before.map(|node| &node.base))?,
            clazz: q.receive_field("clazz", before, |node| &node.clazz)?,
            type_arguments: q.receive_option_field("typeArguments", before, |node| node.type_arguments.as_ref())?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for JsImport {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send_option("importClause", self, before, |node| node.import_clause.as_ref())?;
        q.get_and_send_option("moduleSpecifier", self, before, |node| node.module_specifier.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(JsImport {
            base: q.receive_base(before.map(|node| &node.base))?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            import_clause: q.receive_option_field("importClause", before, |node| node.import_clause.as_ref())?,
            module_specifier: q.receive_option_field("moduleSpecifier", before, |node| node.module_specifier.as_ref())?,
        })
    }
}

impl TreeCodec for ImportClause {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("typeOnly", self, before, |node| &node.type_only)?;
        q.get_and_send_option("name", self, before, |node| node.name.as_ref())?;
        q.get_and_send_option("namedBindings", self, before, |node| node.named_bindings.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ImportClause {
            base: q.receive_base(before.map(|node| &node.base))?,
            type_only: q.receive_field("typeOnly", before, |node| &node.type_only)?,
            name: q.receive_option_field("name", before, |node| node.name.as_ref())?,
            named_bindings: q.receive_option_field("namedBindings", before, |node| node.named_bindings.as_ref())?,
        })
    }
}

impl TreeCodec for NamedImports {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("elements", self, before, |node| &node.elements)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(NamedImports {
            base: q.receive_base(before.map(|node| &node.base))?,
            elements: q.receive_field("elements", before, |node| &node.elements)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for ImportSpecifier {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("importType", self, before, |node| &node.import_type)?;
        q.get_and_send("specifier", self, before, |node| &node.specifier)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ImportSpecifier {
            base: q.receive_base(before.map(|node| &node.base))?,
            import_type: q.receive_field("importType", before, |node| &node.import_type)?,
            specifier: q.receive_field("specifier", before, |node| &node.specifier)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for PropertyAssignment {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send("assignmentToken", self, before, |node| &node.assignment_token)?;
        q.get_and_send_option("initializer", self, before, |node| node.initializer.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(PropertyAssignment {
            base: q.receive_base(before.map(|node| &node.base))?,
            name: q.receive_field("name", before, |node| &node.name)?,
            assignment_token: q.receive_field("assignmentToken", before, |node| &node.assignment_token)?,
            initializer: q.receive_option_field("initializer", before, |node| node.initializer.as_ref())?,
        })
    }
}

impl TreeCodec for TemplateExpression {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("head", self, before, |node| &node.head)?;
        q.get_and_send_list("spans", self, before, |node| &node.spans)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TemplateExpression {
            base: q.receive_base(before.map(|node| &node.base))?,
            head: q.receive_field("head", before, |node| &node.head)?,
            spans: q.receive_list_field("spans", before, |node| &node.spans)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for TemplateSpan {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send("tail", self, before, |node| &node.tail)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TemplateSpan {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            tail: q.receive_field("tail", before, |node| &node.tail)?,
        })
    }
}

impl TreeCodec for TypeOf {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TypeOf {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for TypeDeclaration {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send("initializer", self, before, |node| &node.initializer)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TypeDeclaration {
            base: q.receive_base(before.map(|node| &node.base))?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            name: q.receive_field("name", before, |node| &node.name)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            initializer: q.receive_field("initializer", before, |node| &node.initializer)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Union {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("types", self, before, |node| &node.types)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Union {
            base: q.receive_base(before.map(|node| &node.base))?,
            types: q.receive_list_field("types", before, |node| &node.types)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Intersection {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("types", self, before, |node| &node.types)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Intersection {
            base: q.receive_base(before.map(|node| &node.base))?,
            types: q.receive_list_field("types", before, |node| &node.types)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Void {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Void {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
        })
    }
}

impl TreeCodec for StatementExpression {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("statement", self, before, |node| &node.statement)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(StatementExpression {
            base: q.receive_base(before.map(|node| &node.base))?,
            statement: q.receive_field("statement", before, |node| &node.statement)?,
        })
    }
}

impl TreeCodec for JsBinary {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("left", self, before, |node| &node.left)?;
        q.get_and_send("operator", self, before, |node| &node.operator)?;
        q.get_and_send("right", self, before, |node| &node.right)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(JsBinary {
            base: q.receive_base(before.map(|node| &node.base))?,
            left: q.receive_field("left", before, |node| &node.left)?,
            operator: q.receive_field("operator", before, |node| &node.operator)?,
            right: q.receive_field("right", before, |node| &node.right)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for JsAssignmentOperation {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("variable", self, before, |node| &node.variable)?;
        q.get_and_send("operator", self, before, |node| &node.operator)?;
        q.get_and_send("assignment", self, before, |node| &node.assignment)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(JsAssignmentOperation {
            base: q.receive_base(before.map(|node| &node.base))?,
            variable: q.receive_field("variable", before, |node| &node.variable)?,
            operator: q.receive_field("operator", before, |node| &node.operator)?,
            assignment: q.receive_field("assignment", before, |node| &node.assignment)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}
