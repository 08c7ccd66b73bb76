use super::naming::{field_name, mock_struct_name, receiver_name};
use crate::types::{Interface, Method, Package, Param};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Builds the unformatted source of a mocks file
pub struct MockEmitter;

impl Default for MockEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn emit(&self, package: &Package) -> String {
        let mut out = format!("package {}\n", package.name);
        out.push_str(&self.imports(&package.imports));
        for interface in &package.interfaces {
            out.push_str(&self.interface_impl(interface));
        }
        out
    }

    fn imports(&self, imports: &BTreeMap<String, String>) -> String {
        let mut out = String::from("import (\n");
        for (path, alias) in imports {
            out.push_str(&format!("{alias} \"{path}\"\n"));
        }
        out.push_str(")\n");
        out
    }

    fn interface_impl(&self, interface: &Interface) -> String {
        let mut out = self.mock_struct(interface);
        for method in &interface.methods {
            out.push_str(&self.mock_method(interface, method));
        }
        out.push('\n');
        out
    }

    fn mock_struct(&self, interface: &Interface) -> String {
        let mut out = format!("type {} struct {{\n", mock_struct_name(&interface.name));
        for method in &interface.methods {
            out.push_str(&format!(
                "{} func({}) ({})\n",
                field_name(&method.name),
                join_params(&forwarded_args(method)),
                join_params(&method.returns)
            ));
        }
        out.push_str("}\n");
        out
    }

    fn mock_method(&self, interface: &Interface, method: &Method) -> String {
        let args = forwarded_args(method);
        let receiver = unique_receiver(&interface.name, &args, &method.returns);

        let mut out = format!(
            "func ({receiver} {}) {}({}) ({}) {{\n",
            mock_struct_name(&interface.name),
            method.name,
            join_params(&args),
            join_params(&method.returns)
        );

        if !method.returns.is_empty() {
            out.push_str("return ");
        }
        let names: Vec<&str> = args.iter().map(|arg| arg.name.as_str()).collect();
        out.push_str(&format!(
            "{receiver}.{}({})\n",
            field_name(&method.name),
            names.join(", ")
        ));

        out.push_str("}\n");
        out
    }
}

/// Arguments as they appear in the generated signature. An unnamed or blank
/// (`_`) argument cannot be forwarded, so when any is present every argument
/// is renamed `arg0`, `arg1`, ... skipping names taken by named results.
pub fn forwarded_args(method: &Method) -> Cow<'_, [Param]> {
    if method.args.iter().all(is_forwardable) {
        return Cow::Borrowed(&method.args);
    }
    Cow::Owned(
        method
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                let mut name = format!("arg{i}");
                while method.returns.iter().any(|ret| ret.name == name) {
                    name.push('_');
                }
                Param::new(name, arg.ty.clone())
            })
            .collect(),
    )
}

fn is_forwardable(arg: &Param) -> bool {
    arg.is_named() && arg.name != "_"
}

/// Receiver name that does not shadow any argument or named result
fn unique_receiver(interface: &str, args: &[Param], returns: &[Param]) -> String {
    let mut receiver = receiver_name(interface);
    while args.iter().chain(returns).any(|param| param.name == receiver) {
        receiver.push_str("_m");
    }
    receiver
}

/// `name type` pairs joined by `, `; a missing name leaves a leading space
fn join_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|param| format!("{} {}", param.name, param.type_text()))
        .collect::<Vec<_>>()
        .join(", ")
}
