//! Runtime values produced by the evaluator.

use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier, ToCodeString};
use crate::environment::Environment;

/// A runtime value. `Function` carries a shared handle to the environment
/// it closed over so captured bindings stay reachable after the defining
/// scope has otherwise gone out of scope.
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    ReturnValue(Box<Object>),
    Error(String),
    Function(Rc<FunctionObject>),
}

#[derive(Debug)]
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl Object {
    /// The Albanian type tag used in diagnostic/error strings.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGJER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "VLERAKTHIMIT",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNKSION",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }
}

impl fmt::Display for Object {
    /// The `inspect()` form from spec §6.2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => write!(f, "null"),
            Object::ReturnValue(inner) => write!(f, "{inner}"),
            Object::Error(message) => write!(f, "GABIM: {message}"),
            Object::Function(func) => {
                let params: Vec<String> = func
                    .parameters
                    .iter()
                    .map(|p| p.value.clone())
                    .collect();
                write!(
                    f,
                    "funksion({}) {{\n{}\n}}",
                    params.join(", "),
                    func.body.to_code_string()
                )
            }
        }
    }
}

/// Formats a `new_error`-style message: `"<template>: <arg1> <arg2> ..."`.
pub fn new_error(template: &str, args: &[&str]) -> Object {
    Object::Error(format!("{template}: {}", args.join(" ")))
}
