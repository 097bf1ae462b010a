//! Codec for the type graph.
//!
//! Primitives and the unknown type are sent inline. Every other type is sent in
//! full the first time a session meets it and by reference id afterwards. The
//! receiver registers a type under its id before reading the type's links, so a
//! cycle back to it resolves to the instance being built.

use std::sync::Arc;

use super::message::{RpcObjectData, RpcValue};
use super::receive::{ReceiveQueue, RpcReceive};
use super::send::{ElementKey, ListElement, RpcSend, SendQueue};
use super::values::inline_str;
use crate::error::RpcError;
use crate::types::{
    Array, ArrayLinks, Bounds, Class, ClassKind, ClassLinks, GenericTypeVariable, JavaType, Method, MethodLinks,
    Parameterized, ParameterizedLinks, PrimitiveKind, Variable, VariableLinks, Variance,
};

impl RpcSend for Arc<JavaType> {
    fn value_type(&self) -> Option<&'static str> {
        Some(self.variant_name())
    }

    fn inline_value(&self) -> Option<RpcValue> {
        match &**self {
            JavaType::Primitive(kind) => Some(RpcValue::String(kind.as_str().to_owned())),
            _ => None,
        }
    }

    fn memoized(&self) -> Option<&Arc<JavaType>> {
        if self.is_interned() { None } else { Some(self) }
    }

    fn send_content(&self, _before: Option<&Self>, q: &mut SendQueue<'_>) -> Result<(), RpcError> {
        match &**self {
            JavaType::Primitive(_) | JavaType::Unknown => Ok(()),
            JavaType::Class(class) => {
                q.send("kind", Some(&class.kind), None)?;
                q.send("fullyQualifiedName", Some(&class.fully_qualified_name), None)?;
                let links = class.links();
                q.send_list("typeParameters", &links.type_parameters, None)?;
                q.send("supertype", links.supertype.as_ref(), None)?;
                q.send("owningClass", links.owning_class.as_ref(), None)?;
                q.send_list("annotations", &links.annotations, None)?;
                q.send_list("interfaces", &links.interfaces, None)?;
                q.send_list("members", &links.members, None)?;
                q.send_list("methods", &links.methods, None)
            }
            JavaType::Parameterized(parameterized) => {
                let links = parameterized.links();
                q.send("class", links.class.as_ref(), None)?;
                q.send_list("typeParameters", &links.type_parameters, None)
            }
            JavaType::GenericTypeVariable(generic) => {
                q.send("name", Some(&generic.name), None)?;
                q.send("variance", Some(&generic.variance), None)?;
                q.send_list("bounds", generic.bounds(), None)
            }
            JavaType::Array(array) => {
                let links = array.links();
                q.send("elementType", links.element_type.as_ref(), None)?;
                q.send_list("annotations", &links.annotations, None)
            }
            JavaType::Method(method) => {
                q.send("name", Some(&method.name), None)?;
                q.send_list("parameterNames", &method.parameter_names, None)?;
                let links = method.links();
                q.send("declaringType", links.declaring_type.as_ref(), None)?;
                q.send("returnType", links.return_type.as_ref(), None)?;
                q.send_list("parameterTypes", &links.parameter_types, None)?;
                q.send_list("thrownExceptions", &links.thrown_exceptions, None)?;
                q.send_list("annotations", &links.annotations, None)
            }
            JavaType::Variable(variable) => {
                q.send("name", Some(&variable.name), None)?;
                let links = variable.links();
                q.send("owner", links.owner.as_ref(), None)?;
                q.send("type", links.ty.as_ref(), None)?;
                q.send_list("annotations", &links.annotations, None)
            }
            JavaType::Union(bounds) | JavaType::Intersection(bounds) => q.send_list("bounds", bounds.bounds(), None),
        }
    }
}

impl ListElement for Arc<JavaType> {
    fn list_key(&self, index: usize) -> ElementKey {
        ElementKey::Index(index)
    }
}

/// Wraps a shell and registers it under the message's reference id.
fn shared(msg: &RpcObjectData, q: &mut ReceiveQueue<'_>, shell: JavaType) -> Arc<JavaType> {
    let ty = Arc::new(shell);
    if let Some(id) = msg.ref_id {
        q.remember_ref(id, Arc::clone(&ty));
    }
    ty
}

impl RpcReceive for Arc<JavaType> {
    fn receive_content(
        label: &'static str,
        msg: &RpcObjectData,
        before: Option<&Self>,
        q: &mut ReceiveQueue<'_>,
    ) -> Result<Self, RpcError> {
        let variant = match (msg.value_type.as_deref(), before) {
            (Some(variant), _) => variant,
            (None, Some(before)) => before.variant_name(),
            (None, None) => return Err(RpcError::MissingValue(label)),
        };

        match variant {
            "Primitive" => {
                let keyword = inline_str(label, msg)?;
                PrimitiveKind::from_name(keyword)
                    .map(JavaType::primitive)
                    .ok_or(RpcError::UnexpectedValue {
                        label,
                        expected: "primitive keyword",
                    })
            }
            "Unknown" => Ok(JavaType::unknown()),
            "Class" => {
                let kind: ClassKind = q.receive_required("kind", None)?;
                let name: String = q.receive_required("fullyQualifiedName", None)?;
                let ty = shared(msg, q, JavaType::Class(Class::shell(kind, name)));
                let links = ClassLinks {
                    type_parameters: q.receive_list_required("typeParameters", None)?,
                    supertype: q.receive("supertype", None)?,
                    owning_class: q.receive("owningClass", None)?,
                    annotations: q.receive_list_required("annotations", None)?,
                    interfaces: q.receive_list_required("interfaces", None)?,
                    members: q.receive_list_required("members", None)?,
                    methods: q.receive_list_required("methods", None)?,
                };
                if let JavaType::Class(class) = &*ty {
                    class.complete(links);
                }
                Ok(ty)
            }
            "Parameterized" => {
                let ty = shared(msg, q, JavaType::Parameterized(Parameterized::shell()));
                let links = ParameterizedLinks {
                    class: q.receive("class", None)?,
                    type_parameters: q.receive_list_required("typeParameters", None)?,
                };
                if let JavaType::Parameterized(parameterized) = &*ty {
                    parameterized.complete(links);
                }
                Ok(ty)
            }
            "GenericTypeVariable" => {
                let name: String = q.receive_required("name", None)?;
                let variance: Variance = q.receive_required("variance", None)?;
                let ty = shared(msg, q, JavaType::GenericTypeVariable(GenericTypeVariable::shell(name, variance)));
                let bounds = q.receive_list_required("bounds", None)?;
                if let JavaType::GenericTypeVariable(generic) = &*ty {
                    generic.complete(bounds);
                }
                Ok(ty)
            }
            "Array" => {
                let ty = shared(msg, q, JavaType::Array(Array::shell()));
                let links = ArrayLinks {
                    element_type: q.receive("elementType", None)?,
                    annotations: q.receive_list_required("annotations", None)?,
                };
                if let JavaType::Array(array) = &*ty {
                    array.complete(links);
                }
                Ok(ty)
            }
            "Method" => {
                let name: String = q.receive_required("name", None)?;
                let parameter_names: Vec<String> = q.receive_list_required("parameterNames", None)?;
                let ty = shared(msg, q, JavaType::Method(Method::shell(name, parameter_names)));
                let links = MethodLinks {
                    declaring_type: q.receive("declaringType", None)?,
                    return_type: q.receive("returnType", None)?,
                    parameter_types: q.receive_list_required("parameterTypes", None)?,
                    thrown_exceptions: q.receive_list_required("thrownExceptions", None)?,
                    annotations: q.receive_list_required("annotations", None)?,
                };
                if let JavaType::Method(method) = &*ty {
                    method.complete(links);
                }
                Ok(ty)
            }
            "Variable" => {
                let name: String = q.receive_required("name", None)?;
                let ty = shared(msg, q, JavaType::Variable(Variable::shell(name)));
                let links = VariableLinks {
                    owner: q.receive("owner", None)?,
                    ty: q.receive("type", None)?,
                    annotations: q.receive_list_required("annotations", None)?,
                };
                if let JavaType::Variable(variable) = &*ty {
                    variable.complete(links);
                }
                Ok(ty)
            }
            "Union" | "Intersection" => {
                let shell = Bounds::shell();
                let ty = shared(
                    msg,
                    q,
                    if variant == "Union" {
                        JavaType::Union(shell)
                    } else {
                        JavaType::Intersection(shell)
                    },
                );
                let bounds = q.receive_list_required("bounds", None)?;
                if let JavaType::Union(shell) | JavaType::Intersection(shell) = &*ty {
                    shell.complete(bounds);
                }
                Ok(ty)
            }
            other => Err(RpcError::UnknownTypeKind(other.to_owned())),
        }
    }

    fn resolve_ref(q: &ReceiveQueue<'_>, id: u32) -> Option<Self> {
        q.refs().get(id).cloned()
    }
}
