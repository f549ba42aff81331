//! Class descriptor storage
//!
//! Holds everything the parser extracts from one GDScript file.

use std::collections::BTreeSet;
use std::fmt;

use super::associations::ClassMatcher;

/// A named value with an optional type annotation
///
/// Used for function and signal parameters as well as properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: None,
        }
    }

    pub fn with_type(mut self, t: impl Into<String>) -> Self {
        self.param_type = Some(t.into());
        self
    }

    /// Parse a single `name` or `name: type` token
    ///
    /// The split happens at the first colon. An empty type (as in `x := 1`)
    /// counts as untyped.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        match token.split_once(':') {
            Some((name, param_type)) => {
                let param_type = param_type.trim();
                Some(Self {
                    name: name.trim().to_string(),
                    param_type: (!param_type.is_empty()).then(|| param_type.to_string()),
                })
            }
            None => Some(Self::new(token)),
        }
    }

    /// Parse a comma-separated parameter list, skipping empty tokens
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',').filter_map(Self::parse).collect()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param_type {
            Some(t) => write!(f, "{}: {}", self.name, t),
            None => f.write_str(&self.name),
        }
    }
}

/// Properties share the parameter shape
pub type Property = Parameter;

/// A declared signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Signal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// A top-level function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_type(mut self, t: impl Into<String>) -> Self {
        self.return_type = Some(t.into());
        self
    }
}

/// Parsed structure of one script's class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDescriptor {
    namespace: Option<String>,
    parent_class: Option<String>,
    declared_name: Option<String>,
    signals: Vec<Signal>,
    methods: Vec<Method>,
    properties: Vec<Property>,
    associations: BTreeSet<String>,
}

impl ClassDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    pub fn parent_class(&self) -> Option<&str> {
        self.parent_class.as_deref()
    }

    pub fn set_parent_class(&mut self, parent: impl Into<String>) {
        self.parent_class = Some(parent.into());
    }

    pub fn declared_name(&self) -> Option<&str> {
        self.declared_name.as_deref()
    }

    pub fn set_declared_name(&mut self, name: impl Into<String>) {
        self.declared_name = Some(name.into());
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn add_signal(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn associations(&self) -> &BTreeSet<String> {
        &self.associations
    }

    /// Record an association, ignoring references to the class itself
    ///
    /// Returns `true` when the association was newly added.
    pub fn add_association(&mut self, class_name: impl Into<String>) -> bool {
        let class_name = class_name.into();
        if self.declared_name.as_deref() == Some(class_name.as_str()) {
            return false;
        }
        self.associations.insert(class_name)
    }

    /// Every type annotation that can carry an association
    ///
    /// Covers property types, method parameter types and signal parameter
    /// types. Return types are not included.
    pub fn member_types(&self) -> impl Iterator<Item = &str> {
        let properties = self.properties.iter();
        let method_params = self.methods.iter().flat_map(|m| m.parameters.iter());
        let signal_params = self.signals.iter().flat_map(|s| s.parameters.iter());

        properties
            .chain(method_params)
            .chain(signal_params)
            .filter_map(|p| p.param_type.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Resolve associations against the project's known classes
    pub fn resolve_associations(&mut self, matcher: &ClassMatcher) {
        let found: Vec<String> = self
            .member_types()
            .flat_map(|t| matcher.mentioned_in(t))
            .map(str::to_string)
            .collect();

        for class_name in found {
            self.add_association(class_name);
        }
    }

    /// True when no construct was recognized
    pub fn is_empty(&self) -> bool {
        self.namespace.is_none()
            && self.parent_class.is_none()
            && self.declared_name.is_none()
            && self.signals.is_empty()
            && self.methods.is_empty()
            && self.properties.is_empty()
    }
}
