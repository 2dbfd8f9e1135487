use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

use crate::program::action::Action;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BlockType {
    Event,
    Action,
    Control,
}

/// Presentation grouping only, no behavioral effect
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Category {
    Events,
    Movement,
    Logic,
    Custom,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ParamType {
    String,
    Number,
    Boolean,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ParamValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl ParamValue {
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Str(_) => ParamType::String,
            ParamValue::Number(_) => ParamType::Number,
            ParamValue::Bool(_) => ParamType::Boolean,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub name: &'static str,
    pub param_type: ParamType,
    pub value: ParamValue,
}

impl Param {
    pub fn number(name: &'static str, value: f64) -> Self {
        Self {
            name,
            param_type: ParamType::Number,
            value: ParamValue::Number(value),
        }
    }

    pub fn string(name: &'static str, value: &str) -> Self {
        Self {
            name,
            param_type: ParamType::String,
            value: ParamValue::Str(value.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamError {
    UnknownBlock { id: BlockId },
    UnknownParam { id: BlockId, name: String },
    TypeMismatch {
        name: String,
        expected: ParamType,
        found: ParamType,
    },
    NotFinite { name: String },
}

impl Display for ParamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownBlock { id } => write!(f, "no block with id {}", id),
            ParamError::UnknownParam { id, name } => {
                write!(f, "block {} has no parameter `{}`", id, name)
            }
            ParamError::TypeMismatch { name, expected, found } => write!(
                f,
                "parameter `{}` expects a {:?} value, got {:?}",
                name, expected, found
            ),
            ParamError::NotFinite { name } => {
                write!(f, "parameter `{}` must be a finite number", name)
            }
        }
    }
}

/// A palette entry, copied into the program when added
#[derive(Clone, PartialEq, Debug)]
pub struct BlockDef {
    pub block_type: BlockType,
    pub category: Category,
    pub label: &'static str,
    /// Parsed into an [`Action`] when the program is compiled,
    /// unknown codes are inert
    pub code: String,
    pub params: Vec<Param>,
}

impl BlockDef {
    pub fn new(block_type: BlockType, category: Category, label: &'static str, action: Action) -> Self {
        Self {
            block_type,
            category,
            label,
            code: action.code().to_string(),
            params: vec![],
        }
    }

    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn action(&self) -> Option<Action> {
        self.code.parse().ok()
    }

    /// "label (name: value, ...)" for display in lists
    pub fn summary(&self) -> String {
        if self.params.is_empty() {
            self.label.to_string()
        } else {
            let params = self
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.value))
                .join(", ");
            format!("{} ({})", self.label, params)
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Block {
    pub id: BlockId,
    pub def: BlockDef,
}

impl Block {
    pub fn action(&self) -> Option<Action> {
        self.def.action()
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.def.params.iter().find(|p| p.name == name)
    }

    pub(super) fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        let id = self.id;
        let param = self
            .def
            .params
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| ParamError::UnknownParam { id, name: name.to_string() })?;

        if value.param_type() != param.param_type {
            return Err(ParamError::TypeMismatch {
                name: name.to_string(),
                expected: param.param_type,
                found: value.param_type(),
            });
        }
        if let ParamValue::Number(n) = value {
            if !n.is_finite() {
                return Err(ParamError::NotFinite { name: name.to_string() });
            }
        }

        param.value = value;
        Ok(())
    }
}
