//! Collision-free parameter renaming.

use crate::value::Param;

/// Prefix of generated placeholder names.
pub const PARAM_PREFIX: &str = ":p";

/// Generates unique placeholder names for one merged statement and collects
/// the renamed parameters in binding order.
#[derive(Debug, Default)]
pub struct ParamRenamer {
    counter: usize,
    params: Vec<Param>,
}

impl ParamRenamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fresh placeholder name: `:p0`, `:p1`, ...
    pub fn next_name(&mut self) -> String {
        let name = format!("{}{}", PARAM_PREFIX, self.counter);
        self.counter += 1;
        name
    }

    /// Register a copy of `param` under a fresh name and return that name.
    ///
    /// The source parameter is not modified.
    pub fn rename(&mut self, param: &Param) -> String {
        let name = self.next_name();
        self.params.push(param.renamed(name.clone()));
        name
    }

    /// Renamed parameters registered so far.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn into_params(self) -> Vec<Param> {
        self.params
    }
}
