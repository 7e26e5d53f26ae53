use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
    tree::{Node, NodeId, Tree},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default ceiling on how deeply operands may nest during evaluation.
///
/// Every folded operator nests its left operand one level deeper, so long
/// chains such as `1+1+1+...` produce deep trees.
pub const MAX_EVAL_DEPTH: usize = 256;

/// The evaluation context.
///
/// Holds the tree being evaluated and the depth ceiling. Evaluation never
/// mutates the tree and nothing is memoized: evaluating a node twice
/// recomputes it.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    tree:      &'a Tree,
    max_depth: usize,
}

/// The outcome of one statement that evaluated to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Source text of the evaluated node.
    pub source: String,
    /// The computed value.
    pub value:  Value,
}

impl Trace {
    /// Renders the trace line, with or without the source text.
    #[must_use]
    pub fn line(&self, display_source: bool) -> String {
        if display_source && !self.source.is_empty() {
            self.to_string()
        } else {
            self.value.to_string()
        }
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.value)
    }
}

impl<'a> Context<'a> {
    /// Creates a context over `tree` with the default depth ceiling.
    #[must_use]
    pub const fn new(tree: &'a Tree) -> Self {
        Self { tree,
               max_depth: MAX_EVAL_DEPTH }
    }

    /// Replaces the depth ceiling.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The tree being evaluated.
    #[must_use]
    pub const fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// Fails once `depth` passes the ceiling.
    pub const fn check_depth(&self, depth: usize) -> EvalResult<()> {
        if depth > self.max_depth {
            return Err(RuntimeError::DepthExceeded { limit: self.max_depth });
        }
        Ok(())
    }

    /// Evaluates any node of the tree.
    ///
    /// - A reduced block evaluates its semantic node.
    /// - A token evaluates to its own text.
    /// - A container with exactly one child evaluates that child.
    /// - A container with several children is parse residue and fails with
    ///   `RuntimeError::NoApplicableRule`.
    ///
    /// # Parameters
    /// - `id`: The node to evaluate.
    /// - `depth`: Current nesting depth, checked against the ceiling.
    pub fn eval_node(&self, id: NodeId, depth: usize) -> EvalResult<Value> {
        self.check_depth(depth)?;

        match self.tree.node(id) {
            Node::Token(token) => Ok(Value::Text(token.text().to_string())),
            Node::Block(block) => match (block.semantic(), block.children()) {
                (Some(semantic), _) => self.eval_semantic(semantic, depth),
                (None, [only]) => self.eval_node(*only, depth + 1),
                (None, children) => Err(RuntimeError::NoApplicableRule { pieces: children.len() }),
            },
        }
    }

    /// Evaluates one statement block into a trace line.
    ///
    /// The trace carries the source of the node that produced the value,
    /// which for a fully reduced statement is the statement itself.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     program::Program,
    /// };
    ///
    /// let program = Program::new("8+6");
    /// let statement = program.statements()[0].block().unwrap();
    ///
    /// let trace = Context::new(program.tree()).eval_statement(statement).unwrap();
    ///
    /// assert_eq!(trace.value, Value::Real(14.0));
    /// assert_eq!(trace.to_string(), "8+6 -> 14.0");
    /// ```
    pub fn eval_statement(&self, statement: NodeId) -> EvalResult<Trace> {
        let source = match self.tree.children(statement) {
            [only] => self.tree.source(*only),
            _ => self.tree.source(statement),
        };

        Ok(Trace { source: source.to_string(),
                   value:  self.eval_node(statement, 0)?, })
    }
}
