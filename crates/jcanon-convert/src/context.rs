use smol_str::SmolStr;

/// Per-call interpretation flags.
///
/// A context is never mutated in place: call sites derive the value they
/// pass down with [`ConversionContext::fresh`] (reset to the defaults) or
/// the `with_*` builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionContext {
    /// A block is an instance or static initializer (type body members).
    pub blocks_are_initializers: bool,
    /// A no-op marker is an empty declaration instead of an empty statement.
    pub skip_is_declaration: bool,
    /// A declarator is emitted as a bare definition, without a wrapping
    /// declaration statement.
    pub var_def_is_definition: bool,
    /// Names and selectors are read as type references.
    pub type_reference: bool,
    /// Method-shaped members are annotation type elements.
    pub methods_are_annotation_elements: bool,
    /// Every declarator converts on its own. Inherited by [`Self::fresh`].
    pub folding_disabled: bool,
    /// Simple name of the type whose body is being converted.
    pub containing_type_name: Option<SmolStr>,
    pub(crate) depth: u32,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default interpretation at the same nesting depth.
    pub fn fresh(&self) -> Self {
        Self {
            folding_disabled: self.folding_disabled,
            depth: self.depth,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub(crate) fn descend(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    pub fn with_blocks_are_initializers(self, value: bool) -> Self {
        Self {
            blocks_are_initializers: value,
            ..self
        }
    }

    pub fn with_skip_is_declaration(self, value: bool) -> Self {
        Self {
            skip_is_declaration: value,
            ..self
        }
    }

    pub fn with_var_def_is_definition(self, value: bool) -> Self {
        Self {
            var_def_is_definition: value,
            ..self
        }
    }

    pub fn with_type_reference(self, value: bool) -> Self {
        Self {
            type_reference: value,
            ..self
        }
    }

    pub fn with_methods_are_annotation_elements(self, value: bool) -> Self {
        Self {
            methods_are_annotation_elements: value,
            ..self
        }
    }

    pub fn with_folding_disabled(self, value: bool) -> Self {
        Self {
            folding_disabled: value,
            ..self
        }
    }

    pub fn with_containing_type_name(self, name: Option<SmolStr>) -> Self {
        Self {
            containing_type_name: name,
            ..self
        }
    }
}
