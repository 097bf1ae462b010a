//! Codecs for the Java-family kinds.

use super::receive::ReceiveQueue;
use super::registry::{Codec, TreeCodec};
use super::send::SendQueue;
use crate::error::RpcError;
use crate::tree::java::*;

pub const SCOPE: &str = "java";

pub fn codecs() -> Vec<Codec> {
    vec![
        Codec::of::<AnnotatedType>(SCOPE),
        Codec::of::<Annotation>(SCOPE),
        Codec::of::<ArrayAccess>(SCOPE),
        Codec::of::<ArrayDimension>(SCOPE),
        Codec::of::<ArrayType>(SCOPE),
        Codec::of::<Assert>(SCOPE),
        Codec::of::<Assignment>(SCOPE),
        Codec::of::<AssignmentOperation>(SCOPE),
        Codec::of::<Binary>(SCOPE),
        Codec::of::<Block>(SCOPE),
        Codec::of::<Break>(SCOPE),
        Codec::of::<Case>(SCOPE),
        Codec::of::<Catch>(SCOPE),
        Codec::of::<ClassDeclaration>(SCOPE),
        Codec::of::<ClassDeclarationKind>(SCOPE),
        Codec::of::<CompilationUnit>(SCOPE),
        Codec::of::<Continue>(SCOPE),
        Codec::of::<ControlParentheses>(SCOPE),
        Codec::of::<DoWhileLoop>(SCOPE),
        Codec::of::<Else>(SCOPE),
        Codec::of::<Empty>(SCOPE),
        Codec::of::<EnumValue>(SCOPE),
        Codec::of::<EnumValueSet>(SCOPE),
        Codec::of::<FieldAccess>(SCOPE),
        Codec::of::<ForControl>(SCOPE),
        Codec::of::<ForEachControl>(SCOPE),
        Codec::of::<ForEachLoop>(SCOPE),
        Codec::of::<ForLoop>(SCOPE),
        Codec::of::<Identifier>(SCOPE),
        Codec::of::<If>(SCOPE),
        Codec::of::<Import>(SCOPE),
        Codec::of::<InstanceOf>(SCOPE),
        Codec::of::<Label>(SCOPE),
        Codec::of::<Lambda>(SCOPE),
        Codec::of::<LambdaParameters>(SCOPE),
        Codec::of::<Literal>(SCOPE),
        Codec::of::<MemberReference>(SCOPE),
        Codec::of::<MethodDeclaration>(SCOPE),
        Codec::of::<MethodInvocation>(SCOPE),
        Codec::of::<Modifier>(SCOPE),
        Codec::of::<NamedVariable>(SCOPE),
        Codec::of::<NewArray>(SCOPE),
        Codec::of::<NewClass>(SCOPE),
        Codec::of::<Package>(SCOPE),
        Codec::of::<ParameterizedType>(SCOPE),
        Codec::of::<Parentheses>(SCOPE),
        Codec::of::<Primitive>(SCOPE),
        Codec::of::<Return>(SCOPE),
        Codec::of::<Switch>(SCOPE),
        Codec::of::<Ternary>(SCOPE),
        Codec::of::<Throw>(SCOPE),
        Codec::of::<Try>(SCOPE),
        Codec::of::<TypeCast>(SCOPE),
        Codec::of::<TypeParameter>(SCOPE),
        Codec::of::<TypeParameters>(SCOPE),
        Codec::of::<Unary>(SCOPE),
        Codec::of::<Unknown>(SCOPE),
        Codec::of::<UnknownSource>(SCOPE),
        Codec::of::<VariableDeclarations>(SCOPE),
        Codec::of::<WhileLoop>(SCOPE),
        Codec::of::<Wildcard>(SCOPE),
    ]
}

impl TreeCodec for AnnotatedType {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send("typeExpression", self, before, |node| &node.type_expression)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(AnnotatedType {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            type_expression: q.receive_field("typeExpression", before, |node| &node.type_expression)?,
        })
    }
}

impl TreeCodec for Annotation {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("annotationType", self, before, |node| &node.annotation_type)?;
        q.get_and_send_option("arguments", self, before, |node| node.arguments.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Annotation {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotation_type: q.receive_field("annotationType", before, |node| &node.annotation_type)?,
            arguments: q.receive_option_field("arguments", before, |node| node.arguments.as_ref())?,
        })
    }
}

impl TreeCodec for ArrayAccess {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("indexed", self, before, |node| &node.indexed)?;
        q.get_and_send("dimension", self, before, |node| &node.dimension)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ArrayAccess {
            base: q.receive_base(before.map(|node| &node.base))?,
            indexed: q.receive_field("indexed", before, |node| &node.indexed)?,
            dimension: q.receive_field("dimension", before, |node| &node.dimension)?,
        })
    }
}

impl TreeCodec for ArrayDimension {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("index", self, before, |node| &node.index)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ArrayDimension {
            base: q.receive_base(before.map(|node| &node.base))?,
            index: q.receive_field("index", before, |node| &node.index)?,
        })
    }
}

impl TreeCodec for ArrayType {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("elementType", self, before, |node| &node.element_type)?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send("dimension", self, before, |node| &node.dimension)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ArrayType {
            base: q.receive_base(before.map(|node| &node.base))?,
            element_type: q.receive_field("elementType", before, |node| &node.element_type)?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            dimension: q.receive_field("dimension", before, |node| &node.dimension)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Assert {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("condition", self, before, |node| &node.condition)?;
        q.get_and_send_option("detail", self, before, |node| node.detail.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Assert {
            base: q.receive_base(before.map(|node| &node.base))?,
            condition: q.receive_field("condition", before, |node| &node.condition)?,
            detail: q.receive_option_field("detail", before, |node| node.detail.as_ref())?,
        })
    }
}

impl TreeCodec for Assignment {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("variable", self, before, |node| &node.variable)?;
        q.get_and_send("assignment", self, before, |node| &node.assignment)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Assignment {
            base: q.receive_base(before.map(|node| &node.base))?,
            variable: q.receive_field("variable", before, |node| &node.variable)?,
            assignment: q.receive_field("assignment", before, |node| &node.assignment)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for AssignmentOperation {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("variable", self, before, |node| &node.variable)?;
        q.get_and_send("operator", self, before, |node| &node.operator)?;
        q.get_and_send("assignment", self, before, |node| &node.assignment)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(AssignmentOperation {
            base: q.receive_base(before.map(|node| &node.base))?,
            variable: q.receive_field("variable", before, |node| &node.variable)?,
            operator: q.receive_field("operator", before, |node| &node.operator)?,
            assignment: q.receive_field("assignment", before, |node| &node.assignment)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Binary {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("left", self, before, |node| &node.left)?;
        q.get_and_send("operator", self, before, |node| &node.operator)?;
        q.get_and_send("right", self, before, |node| &node.right)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Binary {
            base: q.receive_base(before.map(|node| &node.base))?,
            left: q.receive_field("left", before, |node| &node.left)?,
            operator: q.receive_field("operator", before, |node| &node.operator)?,
            right: q.receive_field("right", before, |node| &node.right)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Block {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("isStatic", self, before, |node| &node.is_static)?;
        q.get_and_send_list("statements", self, before, |node| &node.statements)?;
        q.get_and_send("end", self, before, |node| &node.end)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Block {
            base: q.receive_base(before.map(|node| &node.base))?,
            is_static: q.receive_field("isStatic", before, |node| &node.is_static)?,
            statements: q.receive_list_field("statements", before, |node| &node.statements)?,
            end: q.receive_field("end", before, |node| &node.end)?,
        })
    }
}

impl TreeCodec for Break {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("label", self, before, |node| node.label.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Break {
            base: q.receive_base(before.map(|node| &node.base))?,
            label: q.receive_option_field("label", before, |node| node.label.as_ref())?,
        })
    }
}

impl TreeCodec for Case {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("caseType", self, before, |node| &node.case_type)?;
        q.get_and_send("caseLabels", self, before, |node| &node.case_labels)?;
        q.get_and_send("statements", self, before, |node| &node.statements)?;
        q.get_and_send_option("body", self, before, |node| node.body.as_ref())?;
        q.get_and_send_option("guard", self, before, |node| node.guard.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Case {
            base: q.receive_base(before.map(|node| &node.base))?,
            case_type: q.receive_field("caseType", before, |node| &node.case_type)?,
            case_labels: q.receive_field("caseLabels", before, |node| &node.case_labels)?,
            statements: q.receive_field("statements", before, |node| &node.statements)?,
            body: q.receive_option_field("body", before, |node| node.body.as_ref())?,
            guard: q.receive_option_field("guard", before, |node| node.guard.as_ref())?,
        })
    }
}

impl TreeCodec for Catch {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("parameter", self, before, |node| &node.parameter)?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Catch {
            base: q.receive_base(before.map(|node| &node.base))?,
            parameter: q.receive_field("parameter", before, |node| &node.parameter)?,
            body: q.receive_field("body", before, |node| &node.body)?,
        })
    }
}

impl TreeCodec for ClassDeclaration {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("leadingAnnotations", self, before, |node| &node.leading_annotations)?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send("classKind", self, before, |node| &node.class_kind)?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send_option("primaryConstructor", self, before, |node| node.primary_constructor.as_ref())?;
        q.get_and_send_option("extends", self, before, |node| node.extends.as_ref())?;
        q.get_and_send_option("implements", self, before, |node| node.implements.as_ref())?;
        q.get_and_send_option("permits", self, before, |node| node.permits.as_ref())?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ClassDeclaration {
            base: q.receive_base(before.map(|node| &node.base))?,
            leading_annotations: q.receive_list_field("leadingAnnotations", before, |node| &node.leading_annotations)?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            class_kind: q.receive_field("classKind", before, |node| &node.class_kind)?,
            name: q.receive_field("name", before, |node| &node.name)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            primary_constructor: q.receive_option_field("primaryConstructor", before, |node| node.primary_constructor.as_ref())?,
            extends: q.receive_option_field("extends", before, |node| node.extends.as_ref())?,
            implements: q.receive_option_field("implements", before, |node| node.implements.as_ref())?,
            permits: q.receive_option_field("permits", before, |node| node.permits.as_ref())?,
            body: q.receive_field("body", before, |node| &node.body)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for ClassDeclarationKind {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send("kindType", self, before, |node| &node.kind_type)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ClassDeclarationKind {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            kind_type: q.receive_field("kindType", before, |node| &node.kind_type)?,
        })
    }
}

impl TreeCodec for CompilationUnit {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("sourcePath", self, before, |node| &node.source_path)?;
        q.get_and_send_option("charset", self, before, |node| node.charset.as_ref())?;
        q.get_and_send_option("packageDeclaration", self, before, |node| node.package_declaration.as_ref())?;
        q.get_and_send_list("imports", self, before, |node| &node.imports)?;
        q.get_and_send_list("classes", self, before, |node| &node.classes)?;
        q.get_and_send("eof", self, before, |node| &node.eof)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(CompilationUnit {
            base: q.receive_base(before.map(|node| &node.base))?,
            source_path: q.receive_field("sourcePath", before, |node| &node.source_path)?,
            charset: q.receive_option_field("charset", before, |node| node.charset.as_ref())?,
            package_declaration: q.receive_option_field("packageDeclaration", before, |node| node.package_declaration.as_ref())?,
            imports: q.receive_list_field("imports", before, |node| &node.imports)?,
            classes: q.receive_list_field("classes", before, |node| &node.classes)?,
            eof: q.receive_field("eof", before, |node| &node.eof)?,
        })
    }
}

impl TreeCodec for Continue {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("label", self, before, |node| node.label.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Continue {
            base: q.receive_base(before.map(|node| &node.base))?,
            label: q.receive_option_field("label", before, |node| node.label.as_ref())?,
        })
    }
}

impl TreeCodec for ControlParentheses {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("tree", self, before, |node| &node.tree)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ControlParentheses {
            base: q.receive_base(before.map(|node| &node.base))?,
            tree: q.receive_field("tree", before, |node| &node.tree)?,
        })
    }
}

impl TreeCodec for DoWhileLoop {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        q.get_and_send("whileCondition", self, before, |node| &node.while_condition)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(DoWhileLoop {
            base: q.receive_base(before.map(|node| &node.base))?,
            body: q.receive_field("body", before, |node| &node.body)?,
            while_condition: q.receive_field("whileCondition", before, |node| &node.while_condition)?,
        })
    }
}

impl TreeCodec for Else {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Else {
            base: q.receive_base(before.map(|node| &node.base))?,
            body: q.receive_field("body", before, |node| &node.body)?,
        })
    }
}

impl TreeCodec for Empty {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Empty {
            base: q.receive_base(before.map(|node| &node.base))?,
        })
    }
}

impl TreeCodec for EnumValue {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send_option("initializer", self, before, |node| node.initializer.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(EnumValue {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            name: q.receive_field("name", before, |node| &node.name)?,
            initializer: q.receive_option_field("initializer", before, |node| node.initializer.as_ref())?,
        })
    }
}

impl TreeCodec for EnumValueSet {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("enums", self, before, |node| &node.enums)?;
        q.get_and_send("terminatedWithSemicolon", self, before, |node| &node.terminated_with_semicolon)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(EnumValueSet {
            base: q.receive_base(before.map(|node| &node.base))?,
            enums: q.receive_list_field("enums", before, |node| &node.enums)?,
            terminated_with_semicolon: q.receive_field("terminatedWithSemicolon", before, |node| &node.terminated_with_semicolon)?,
        })
    }
}

impl TreeCodec for FieldAccess {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("target", self, before, |node| &node.target)?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(FieldAccess {
            base: q.receive_base(before.map(|node| &node.base))?,
            target: q.receive_field("target", before, |node| &node.target)?,
            name: q.receive_field("name", before, |node| &node.name)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for ForControl {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("init", self, before, |node| &node.init)?;
        q.get_and_send("condition", self, before, |node| &node.condition)?;
        q.get_and_send_list("update", self, before, |node| &node.update)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ForControl {
            base: q.receive_base(before.map(|node| &node.base))?,
            init: q.receive_list_field("init", before, |node| &node.init)?,
            condition: q.receive_field("condition", before, |node| &node.condition)?,
            update: q.receive_list_field("update", before, |node| &node.update)?,
        })
    }
}

impl TreeCodec for ForEachControl {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("variable", self, before, |node| &node.variable)?;
        q.get_and_send("iterable", self, before, |node| &node.iterable)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ForEachControl {
            base: q.receive_base(before.map(|node| &node.base))?,
            variable: q.receive_field("variable", before, |node| &node.variable)?,
            iterable: q.receive_field("iterable", before, |node| &node.iterable)?,
        })
    }
}

impl TreeCodec for ForEachLoop {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("control", self, before, |node| &node.control)?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ForEachLoop {
            base: q.receive_base(before.map(|node| &node.base))?,
            control: q.receive_field("control", before, |node| &node.control)?,
            body: q.receive_field("body", before, |node| &node.body)?,
        })
    }
}

impl TreeCodec for ForLoop {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("control", self, before, |node| &node.control)?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ForLoop {
            base: q.receive_base(before.map(|node| &node.base))?,
            control: q.receive_field("control", before, |node| &node.control)?,
            body: q.receive_field("body", before, |node| &node.body)?,
        })
    }
}

impl TreeCodec for Identifier {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send("simpleName", self, before, |node| &node.simple_name)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        q.get_and_send_option("fieldType", self, before, |node| node.field_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Identifier {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            simple_name: q.receive_field("simpleName", before, |node| &node.simple_name)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
            field_type: q.receive_option_field("fieldType", before, |node| node.field_type.as_ref())?,
        })
    }
}

impl TreeCodec for If {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("ifCondition", self, before, |node| &node.if_condition)?;
        q.get_and_send("thenPart", self, before, |node| &node.then_part)?;
        q.get_and_send_option("elsePart", self, before, |node| node.else_part.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(If {
            base: q.receive_base(before.map(|node| &node.base))?,
            if_condition: q.receive_field("ifCondition", before, |node| &node.if_condition)?,
            then_part: q.receive_field("thenPart", before, |node| &node.then_part)?,
            else_part: q.receive_option_field("elsePart", before, |node| node.else_part.as_ref())?,
        })
    }
}

impl TreeCodec for Import {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("isStatic", self, before, |node| &node.is_static)?;
        q.get_and_send("qualid", self, before, |node| &node.qualid)?;
        q.get_and_send_option("alias", self, before, |node| node.alias.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Import {
            base: q.receive_base(before.map(|node| &node.base))?,
            is_static: q.receive_field("isStatic", before, |node| &node.is_static)?,
            qualid: q.receive_field("qualid", before, |node| &node.qualid)?,
            alias: q.receive_option_field("alias", before, |node| node.alias.as_ref())?,
        })
    }
}

impl TreeCodec for InstanceOf {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send("clazz", self, before, |node| &node.clazz)?;
        q.get_and_send_option("pattern", self, before, |node| node.pattern.as_ref())?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(InstanceOf {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            clazz: q.receive_field("clazz", before, |node| &node.clazz)?,
            pattern: q.receive_option_field("pattern", before, |node| node.pattern.as_ref())?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Label {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("label", self, before, |node| &node.label)?;
        q.get_and_send("statement", self, before, |node| &node.statement)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Label {
            base: q.receive_base(before.map(|node| &node.base))?,
            label: q.receive_field("label", before, |node| &node.label)?,
            statement: q.receive_field("statement", before, |node| &node.statement)?,
        })
    }
}

impl TreeCodec for Lambda {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("parameters", self, before, |node| &node.parameters)?;
        q.get_and_send("arrow", self, before, |node| &node.arrow)?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Lambda {
            base: q.receive_base(before.map(|node| &node.base))?,
            parameters: q.receive_field("parameters", before, |node| &node.parameters)?,
            arrow: q.receive_field("arrow", before, |node| &node.arrow)?,
            body: q.receive_field("body", before, |node| &node.body)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for LambdaParameters {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("parenthesized", self, before, |node| &node.parenthesized)?;
        q.get_and_send_list("parameters", self, before, |node| &node.parameters)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(LambdaParameters {
            base: q.receive_base(before.map(|node| &node.base))?,
            parenthesized: q.receive_field("parenthesized", before, |node| &node.parenthesized)?,
            parameters: q.receive_list_field("parameters", before, |node| &node.parameters)?,
        })
    }
}

impl TreeCodec for Literal {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("value", self, before, |node| node.value.as_ref())?;
        q.get_and_send_option("valueSource", self, before, |node| node.value_source.as_ref())?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Literal {
            base: q.receive_base(before.map(|node| &node.base))?,
            value: q.receive_option_field("value", before, |node| node.value.as_ref())?,
            value_source: q.receive_option_field("valueSource", before, |node| node.value_source.as_ref())?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for MemberReference {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("containing", self, before, |node| &node.containing)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send("reference", self, before, |node| &node.reference)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        q.get_and_send_option("methodType", self, before, |node| node.method_type.as_ref())?;
        q.get_and_send_option("variableType", self, before, |node| node.variable_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(MemberReference {
            base: q.receive_base(before.map(|node| &node.base))?,
            containing: q.receive_field("containing", before, |node| &node.containing)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            reference: q.receive_field("reference", before, |node| &node.reference)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
            method_type: q.receive_option_field("methodType", before, |node| node.method_type.as_ref())?,
            variable_type: q.receive_option_field("variableType", before, |node| node.variable_type.as_ref())?,
        })
    }
}

impl TreeCodec for MethodDeclaration {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("leadingAnnotations", self, before, |node| &node.leading_annotations)?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send_option("returnTypeExpression", self, before, |node| node.return_type_expression.as_ref())?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send("parameters", self, before, |node| &node.parameters)?;
        q.get_and_send_option("throws", self, before, |node| node.throws.as_ref())?;
        q.get_and_send_option("body", self, before, |node| node.body.as_ref())?;
        q.get_and_send_option("defaultValue", self, before, |node| node.default_value.as_ref())?;
        q.get_and_send_option("methodType", self, before, |node| node.method_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(MethodDeclaration {
            base: q.receive_base(before.map(|node| &node.base))?,
            leading_annotations: q.receive_list_field("leadingAnnotations", before, |node| &node.leading_annotations)?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            return_type_expression: q.receive_option_field("returnTypeExpression", before, |node| node.return_type_expression.as_ref())?,
            name: q.receive_field("name", before, |node| &node.name)?,
            parameters: q.receive_field("parameters", before, |node| &node.parameters)?,
            throws: q.receive_option_field("throws", before, |node| node.throws.as_ref())?,
            body: q.receive_option_field("body", before, |node| node.body.as_ref())?,
            default_value: q.receive_option_field("defaultValue", before, |node| node.default_value.as_ref())?,
            method_type: q.receive_option_field("methodType", before, |node| node.method_type.as_ref())?,
        })
    }
}

impl TreeCodec for MethodInvocation {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("select", self, before, |node| node.select.as_ref())?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send("arguments", self, before, |node| &node.arguments)?;
        q.get_and_send_option("methodType", self, before, |node| node.method_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(MethodInvocation {
            base: q.receive_base(before.map(|node| &node.base))?,
            select: q.receive_option_field("select", before, |node| node.select.as_ref())?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            name: q.receive_field("name", before, |node| &node.name)?,
            arguments: q.receive_field("arguments", before, |node| &node.arguments)?,
            method_type: q.receive_option_field("methodType", before, |node| node.method_type.as_ref())?,
        })
    }
}

impl TreeCodec for Modifier {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("keyword", self, before, |node| node.keyword.as_ref())?;
        q.get_and_send("modifierType", self, before, |node| &node.modifier_type)?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Modifier {
            base: q.receive_base(before.map(|node| &node.base))?,
            keyword: q.receive_option_field("keyword", before, |node| node.keyword.as_ref())?,
            modifier_type: q.receive_field("modifierType", before, |node| &node.modifier_type)?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
        })
    }
}

impl TreeCodec for NamedVariable {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("declarator", self, before, |node| &node.declarator)?;
        q.get_and_send_list("dimensionsAfterName", self, before, |node| &node.dimensions_after_name)?;
        q.get_and_send_option("initializer", self, before, |node| node.initializer.as_ref())?;
        q.get_and_send_option("variableType", self, before, |node| node.variable_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(NamedVariable {
            base: q.receive_base(before.map(|node| &node.base))?,
            declarator: q.receive_field("declarator", before, |node| &node.declarator)?,
            dimensions_after_name: q.receive_list_field("dimensionsAfterName", before, |node| &node.dimensions_after_name)?,
            initializer: q.receive_option_field("initializer", before, |node| node.initializer.as_ref())?,
            variable_type: q.receive_option_field("variableType", before, |node| node.variable_type.as_ref())?,
        })
    }
}

impl TreeCodec for NewArray {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("typeExpression", self, before, |node| node.type_expression.as_ref())?;
        q.get_and_send_list("dimensions", self, before, |node| &node.dimensions)?;
        q.get_and_send_option("initializer", self, before, |node| node.initializer.as_ref())?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(NewArray {
            base: q.receive_base(before.map(|node| &node.base))?,
            type_expression: q.receive_option_field("typeExpression", before, |node| node.type_expression.as_ref())?,
            dimensions: q.receive_list_field("dimensions", before, |node| &node.dimensions)?,
            initializer: q.receive_option_field("initializer", before, |node| node.initializer.as_ref())?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for NewClass {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("enclosing", self, before, |node| node.enclosing.as_ref())?;
        q.get_and_send("newKeyword", self, before, |node| &node.new_keyword)?;
        q.get_and_send_option("clazz", self, before, |node| node.clazz.as_ref())?;
        q.get_and_send("arguments", self, before, |node| &node.arguments)?;
        q.get_and_send_option("body", self, before, |node| node.body.as_ref())?;
        q.get_and_send_option("constructorType", self, before, |node| node.constructor_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(NewClass {
            base: q.receive_base(before.map(|node| &node.base))?,
            enclosing: q.receive_option_field("enclosing", before, |node| node.enclosing.as_ref())?,
            new_keyword: q.receive_field("newKeyword", before, |node| &node.new_keyword)?,
            clazz: q.receive_option_field("clazz", before, |node| node.clazz.as_ref())?,
            arguments: q.receive_field("arguments", before, |node| &node.arguments)?,
            body: q.receive_option_field("body", before, |node| node.body.as_ref())?,
            constructor_type: q.receive_option_field("constructorType", before, |node| node.constructor_type.as_ref())?,
        })
    }
}

impl TreeCodec for Package {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Package {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
        })
    }
}

impl TreeCodec for ParameterizedType {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("clazz", self, before, |node| &node.clazz)?;
        q.get_and_send_option("typeParameters", self, before, |node| node.type_parameters.as_ref())?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(ParameterizedType {
            base: q.receive_base(before.map(|node| &node.base))?,
            clazz: q.receive_field("clazz", before, |node| &node.clazz)?,
            type_parameters: q.receive_option_field("typeParameters", before, |node| node.type_parameters.as_ref())?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Parentheses {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("tree", self, before, |node| &node.tree)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Parentheses {
            base: q.receive_base(before.map(|node| &node.base))?,
            tree: q.receive_field("tree", before, |node| &node.tree)?,
        })
    }
}

impl TreeCodec for Primitive {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("type", self, before, |node| &node.ty)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Primitive {
            base: q.receive_base(before.map(|node| &node.base))?,
            ty: q.receive_field("type", before, |node| &node.ty)?,
        })
    }
}

impl TreeCodec for Return {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("expression", self, before, |node| node.expression.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Return {
            base: q.receive_base(before.map(|node| &node.base))?,
            expression: q.receive_option_field("expression", before, |node| node.expression.as_ref())?,
        })
    }
}

impl TreeCodec for Switch {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("selector", self, before, |node| &node.selector)?;
        q.get_and_send("cases", self, before, |node| &node.cases)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Switch {
            base: q.receive_base(before.map(|node| &node.base))?,
            selector: q.receive_field("selector", before, |node| &node.selector)?,
            cases: q.receive_field("cases", before, |node| &node.cases)?,
        })
    }
}

impl TreeCodec for Ternary {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("condition", self, before, |node| &node.condition)?;
        q.get_and_send("truePart", self, before, |node| &node.true_part)?;
        q.get_and_send("falsePart", self, before, |node| &node.false_part)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Ternary {
            base: q.receive_base(before.map(|node| &node.base))?,
            condition: q.receive_field("condition", before, |node| &node.condition)?,
            true_part: q.receive_field("truePart", before, |node| &node.true_part)?,
            false_part: q.receive_field("falsePart", before, |node| &node.false_part)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Throw {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("exception", self, before, |node| &node.exception)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Throw {
            base: q.receive_base(before.map(|node| &node.base))?,
            exception: q.receive_field("exception", before, |node| &node.exception)?,
        })
    }
}

impl TreeCodec for Try {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("resources", self, before, |node| node.resources.as_ref())?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        q.get_and_send_list("catches", self, before, |node| &node.catches)?;
        q.get_and_send_option("finally", self, before, |node| node.finally.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Try {
            base: q.receive_base(before.map(|node| &node.base))?,
            resources: q.receive_option_field("resources", before, |node| node.resources.as_ref())?,
            body: q.receive_field("body", before, |node| &node.body)?,
            catches: q.receive_list_field("catches", before, |node| &node.catches)?,
            finally: q.receive_option_field("finally", before, |node| node.finally.as_ref())?,
        })
    }
}

impl TreeCodec for TypeCast {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("clazz", self, before, |node| &node.clazz)?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TypeCast {
            base: q.receive_base(before.map(|node| &node.base))?,
            clazz: q.receive_field("clazz", before, |node| &node.clazz)?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
        })
    }
}

impl TreeCodec for TypeParameter {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send("name", self, before, |node| &node.name)?;
        q.get_and_send_option("bounds", self, before, |node| node.bounds.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TypeParameter {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            name: q.receive_field("name", before, |node| &node.name)?,
            bounds: q.receive_option_field("bounds", before, |node| node.bounds.as_ref())?,
        })
    }
}

impl TreeCodec for TypeParameters {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("annotations", self, before, |node| &node.annotations)?;
        q.get_and_send_list("typeParameters", self, before, |node| &node.type_parameters)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(TypeParameters {
            base: q.receive_base(before.map(|node| &node.base))?,
            annotations: q.receive_list_field("annotations", before, |node| &node.annotations)?,
            type_parameters: q.receive_list_field("typeParameters", before, |node| &node.type_parameters)?,
        })
    }
}

impl TreeCodec for Unary {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("operator", self, before, |node| &node.operator)?;
        q.get_and_send("expression", self, before, |node| &node.expression)?;
        q.get_and_send_option("type", self, before, |node| node.ty.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Unary {
            base: q.receive_base(before.map(|node| &node.base))?,
            operator: q.receive_field("operator", before, |node| &node.operator)?,
            expression: q.receive_field("expression", before, |node| &node.expression)?,
            ty: q.receive_option_field("type", before, |node| node.ty.as_ref())?,
        })
    }
}

impl TreeCodec for Unknown {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("source", self, before, |node| &node.source)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Unknown {
            base: q.receive_base(before.map(|node| &node.base))?,
            source: q.receive_field("source", before, |node| &node.source)?,
        })
    }
}

impl TreeCodec for UnknownSource {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("text", self, before, |node| &node.text)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(UnknownSource {
            base: q.receive_base(before.map(|node| &node.base))?,
            text: q.receive_field("text", before, |node| &node.text)?,
        })
    }
}

impl TreeCodec for VariableDeclarations {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_list("leadingAnnotations", self, before, |node| &node.leading_annotations)?;
        q.get_and_send_list("modifiers", self, before, |node| &node.modifiers)?;
        q.get_and_send_option("typeExpression", self, before, |node| node.type_expression.as_ref())?;
        q.get_and_send_option("varargs", self, before, |node| node.varargs.as_ref())?;
        q.get_and_send_list("variables", self, before, |node| &node.variables)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(VariableDeclarations {
            base: q.receive_base(before.map(|node| &node.base))?,
            leading_annotations: q.receive_list_field("leadingAnnotations", before, |node| &node.leading_annotations)?,
            modifiers: q.receive_list_field("modifiers", before, |node| &node.modifiers)?,
            type_expression: q.receive_option_field("typeExpression", before, |node| node.type_expression.as_ref())?,
            varargs: q.receive_option_field("varargs", before, |node| node.varargs.as_ref())?,
            variables: q.receive_list_field("variables", before, |node| &node.variables)?,
        })
    }
}

impl TreeCodec for WhileLoop {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send("condition", self, before, |node| &node.condition)?;
        q.get_and_send("body", self, before, |node| &node.body)?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(WhileLoop {
            base: q.receive_base(before.map(|node| &node.base))?,
            condition: q.receive_field("condition", before, |node| &node.condition)?,
            body: q.receive_field("body", before, |node| &node.body)?,
        })
    }
}

impl TreeCodec for Wildcard {
    fn rpc_send(&self, before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        q.send_base(&self.base, before.map(|node| &node.base))?;
        q.get_and_send_option("bound", self, before, |node| node.bound.as_ref())?;
        q.get_and_send_option("boundedType", self, before, |node| node.bounded_type.as_ref())?;
        Ok(())
    }

    fn rpc_receive(before: Option<&Self>, q: &mut ReceiveQueue<'_>) -> Result<Self, RpcError> {
        Ok(Wildcard {
            base: q.receive_base(before.map(|node| &node.base))?,
            bound: q.receive_option_field("bound", before, |node| node.bound.as_ref())?,
            bounded_type: q.receive_option_field("boundedType", before, |node| node.bounded_type.as_ref())?,
        })
    }
}
