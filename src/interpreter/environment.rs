use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// How function calls see variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeMode {
    /// Parameters are bound in the single global store shared with the
    /// caller, so a call can overwrite the caller's variables.
    #[default]
    Shared,
    /// Each call gets its own frame holding the parameters and every name
    /// first written during the call. Reads fall back to the globals.
    Isolated,
}

/// Stores the runtime state of a program.
///
/// Holds every variable and every function declared so far. Variables are
/// kept by canonical name; reading a name that was never written yields
/// [`Value::Null`].
///
/// ## Usage
///
/// An `Environment` is created once per run and passed by reference to the
/// evaluator. The evaluator only touches variables through [`get`],
/// [`set`], [`bind_parameter`], [`enter_call`] and [`exit_call`], so the
/// [`ScopeMode`] decides call isolation without the evaluator knowing.
///
/// [`get`]: Environment::get
/// [`set`]: Environment::set
/// [`bind_parameter`]: Environment::bind_parameter
/// [`enter_call`]: Environment::enter_call
/// [`exit_call`]: Environment::exit_call
///
/// # Example
/// ```
/// use rockstar::interpreter::{
///     environment::{Environment, ScopeMode},
///     value::core::Value,
/// };
///
/// let mut env = Environment::new(ScopeMode::Isolated);
/// env.set("my heart", Value::from("global"));
///
/// env.enter_call();
/// env.bind_parameter("my heart", Value::from("local"));
/// assert_eq!(env.get("my heart"), Value::from("local"));
/// env.exit_call();
///
/// assert_eq!(env.get("my heart"), Value::from("global"));
/// assert_eq!(env.get("nobody here"), Value::Null);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    /// Global variables first, then one frame per active isolated call.
    scope_stack: Vec<HashMap<String, Value>>,
    functions:   HashMap<String, Rc<FunctionDef>>,
    mode:        ScopeMode,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new(mode: ScopeMode) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions: HashMap::new(),
               mode }
    }

    /// The scoping rule in force.
    #[must_use]
    pub const fn mode(&self) -> ScopeMode {
        self.mode
    }

    /// Reads a variable, innermost frame first.
    ///
    /// # Returns
    /// The stored value, or [`Value::Null`] when the name is unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a variable.
    ///
    /// An existing binding is updated in the innermost frame that holds it. A
    /// new name goes to the innermost frame, which is the global store unless
    /// an isolated call is active.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack
                                 .iter_mut()
                                 .rev()
                                 .find(|scope| scope.contains_key(name))
        {
            scope.insert(name.to_string(), value);
            return;
        }
        self.innermost().insert(name.to_string(), value);
    }

    /// Binds a parameter for the call being set up.
    ///
    /// Unlike [`set`](Environment::set) this never updates an outer binding:
    /// the name is written to the innermost frame.
    pub fn bind_parameter(&mut self, name: &str, value: Value) {
        self.innermost().insert(name.to_string(), value);
    }

    /// Opens the variable frame for a function call.
    ///
    /// A no-op in [`ScopeMode::Shared`].
    pub fn enter_call(&mut self) {
        if self.mode == ScopeMode::Isolated {
            self.scope_stack.push(HashMap::new());
        }
    }

    /// Closes the frame opened by the matching [`enter_call`](Environment::enter_call).
    pub fn exit_call(&mut self) {
        if self.mode == ScopeMode::Isolated && self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Registers a function, replacing any earlier declaration of the name.
    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Looks up a declared function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    fn innermost(&mut self) -> &mut HashMap<String, Value> {
        if self.scope_stack.is_empty() {
            self.scope_stack.push(HashMap::new());
        }
        let last = self.scope_stack.len() - 1;
        &mut self.scope_stack[last]
    }
}
