use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::{Context, Trace},
        lexer::{lex_statement, split_statements},
        parser::core::Grammar,
        transpiler::core::{Transpilation, Transpiler},
    },
    tree::{BlockKind, NodeId, Tree},
};

/// One statement of a program and the outcome of parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    index:   usize,
    text:    String,
    outcome: Result<NodeId, ParseError>,
}

impl Statement {
    /// 1-based position of the statement in the program.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Source text of the statement.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The statement block, or the error that stopped its parse.
    #[must_use]
    pub const fn outcome(&self) -> &Result<NodeId, ParseError> {
        &self.outcome
    }

    /// The statement block if parsing succeeded.
    #[must_use]
    pub fn block(&self) -> Option<NodeId> {
        self.outcome.as_ref().ok().copied()
    }
}

/// A parsed program.
///
/// Owns the source, the reduced tree and the per-statement parse outcomes.
/// Parsing never fails as a whole: a statement that cannot be lexed or
/// reduced records its error and the others are parsed regardless.
#[derive(Debug, Clone)]
pub struct Program {
    source:     String,
    tree:       Tree,
    statements: Vec<Statement>,
}

impl Program {
    /// Lexes and parses `source` with the standard grammar.
    ///
    /// # Example
    /// ```
    /// use turquoise::program::Program;
    ///
    /// let program = Program::new("8+6|x y\n5!");
    ///
    /// assert_eq!(program.statements().len(), 3);
    /// assert!(program.statements()[0].block().is_some());
    /// assert!(program.statements()[1].block().is_none());
    /// ```
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::with_grammar(source, &Grammar::new())
    }

    /// Lexes and parses `source` with a custom grammar.
    ///
    /// Every statement gets a block under the root, in source order, even
    /// when it fails to lex. The block is attached once its tokens are in
    /// place, then the grammar reduces it.
    #[must_use]
    pub fn with_grammar(source: &str, grammar: &Grammar) -> Self {
        let mut tree = Tree::new();
        let mut statements = Vec::new();

        for (i, text) in split_statements(source).into_iter().enumerate() {
            let block = tree.push_block(BlockKind::Statement);
            let id = block.id();

            let lexed = lex_statement(text).map(|tokens| {
                                               for token in tokens {
                                                   let token = tree.push_token(token);
                                                   tree.append(id, token);
                                               }
                                           });

            let root = tree.root();
            tree.append(root, block);

            let outcome = lexed.and_then(|()| grammar.reduce(&mut tree, id)).map(|_| id);

            statements.push(Statement { index: i + 1,
                                        text: text.to_string(),
                                        outcome });
        }

        Self { source: source.to_string(),
               tree,
               statements }
    }

    /// The program source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The reduced tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The statements in source order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Evaluates one statement.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the statement failed to parse and
    /// `Error::Runtime` if its evaluation failed.
    pub fn evaluate(&self, statement: &Statement) -> Result<Trace, Error> {
        let block = statement.outcome.clone().map_err(|error| Error::Parse { statement: statement.index,
                                                                             text: statement.text.clone(),
                                                                             error })?;

        Context::new(&self.tree).eval_statement(block)
                                .map_err(|error| Error::Runtime { statement: statement.index,
                                                                  text: statement.text.clone(),
                                                                  error })
    }

    /// Evaluates every statement in order.
    ///
    /// Failures are contained per statement; every statement produces an
    /// entry.
    ///
    /// # Parameters
    /// - `print_output`: Print each successful trace line.
    /// - `display_source`: Prefix printed values with their source.
    ///
    /// # Example
    /// ```
    /// use turquoise::{interpreter::value::core::Value, program::Program};
    ///
    /// let results = Program::new("8+6\n1//0\n5!").execute(false, true);
    ///
    /// assert_eq!(results[0].as_ref().unwrap().value, Value::Real(14.0));
    /// assert!(results[1].is_err());
    /// assert_eq!(results[2].as_ref().unwrap().value, Value::Integer(120));
    /// ```
    pub fn execute(&self, print_output: bool, display_source: bool) -> Vec<Result<Trace, Error>> {
        self.statements
            .iter()
            .map(|statement| {
                let result = self.evaluate(statement);
                if print_output && let Ok(trace) = &result {
                    println!("{}", trace.line(display_source));
                }
                result
            })
            .collect()
    }

    /// Transpiles the program to Python.
    ///
    /// # Parameters
    /// - `auto_print`: Wrap each converted line in `print(...)`.
    #[must_use]
    pub fn transpile(&self, auto_print: bool) -> Transpilation {
        Transpiler::new(&self.tree, auto_print).transpile(self.statements.iter().map(Statement::block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn statements_keep_their_position() {
        let program = Program::new("1+1\n\n2+2|3+3");
        let indices: Vec<usize> = program.statements().iter().map(Statement::index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(program.tree().children(program.tree().root()).len(), 3);
    }

    #[test]
    fn lexing_failures_are_contained() {
        let program = Program::new("1 +1\n2+2");
        assert_eq!(program.statements()[0].outcome(),
                   &Err(ParseError::UnclassifiableCharacter { character: ' ',
                                                              column:    1, }));
        assert!(program.statements()[1].block().is_some());
    }

    #[test]
    fn residue_is_a_runtime_error() {
        let results = Program::new("1+").execute(false, false);
        match &results[0] {
            Err(Error::Runtime { error: RuntimeError::NoApplicableRule { pieces }, .. }) => assert_eq!(*pieces, 2),
            other => panic!("expected residue, got {other:?}"),
        }
    }

    #[test]
    fn lone_token_evaluates_to_text() {
        let results = Program::new("abc").execute(false, false);
        assert_eq!(results[0].as_ref().unwrap().line(false), "abc");
    }

    #[test]
    fn errors_carry_the_statement() {
        let results = Program::new("1+1\n1/0").execute(false, false);
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.statement(), 2);
        assert_eq!(err.text(), "1/0");
        assert_eq!(err.to_string(), "Error in statement 2 `1/0`: Division by zero.");
    }
}
