use crate::{
    ast::Semantic,
    interpreter::transpiler::render::Renderer,
    tree::{NodeId, Tree},
};

/// Python helper defining tetration, prepended when a rendered line calls it.
pub const TETRATION_PRELUDE: &str = "def tetration(a, m):\n    r = a\n    for _ in range(int(m)):\n        r = a ** r\n    return r";

/// Declarations prepended to the output when their trigger appears in it, in
/// this order.
pub const IMPORTS: [(&str, &str); 2] = [("factorial", "import math"), ("tetration(", TETRATION_PRELUDE)];

/// The result of transpiling a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transpilation {
    /// The Python source text.
    pub text:          String,
    /// How many statements could not be converted.
    pub unconvertible: usize,
}

impl std::fmt::Display for Transpilation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Converts reduced statements into Python source lines.
#[derive(Debug, Clone, Copy)]
pub struct Transpiler<'a> {
    renderer:   Renderer<'a>,
    tree:       &'a Tree,
    auto_print: bool,
}

impl<'a> Transpiler<'a> {
    /// Creates a transpiler over `tree`.
    ///
    /// # Parameters
    /// - `tree`: The reduced tree.
    /// - `auto_print`: Wrap each converted line in `print(...)`.
    #[must_use]
    pub const fn new(tree: &'a Tree, auto_print: bool) -> Self {
        Self { renderer: Renderer::new(tree),
               tree,
               auto_print }
    }

    /// Converts one statement block.
    ///
    /// Only a statement that reduced to a single expression converts.
    /// Returns `None` for residue, other node kinds and expressions that
    /// cannot be rendered.
    #[must_use]
    pub fn transpile_statement(&self, statement: NodeId) -> Option<String> {
        let [only] = self.tree.children(statement) else {
            return None;
        };
        let Some(Semantic::Expression(expression)) = self.tree.semantic(*only) else {
            return None;
        };

        let line = self.renderer.render_expression(expression, 0)?;
        Some(if self.auto_print { format!("print({line})") } else { line })
    }

    /// Transpiles a sequence of statements.
    ///
    /// `None` entries are statements that failed to parse. Every statement
    /// that does not convert becomes `# Line <n> could not be converted`
    /// and is counted. The output starts with a banner when anything was
    /// missed, followed by the needed imports and then one line per
    /// statement.
    ///
    /// # Example
    /// ```
    /// use turquoise::{interpreter::transpiler::core::Transpiler, program::Program};
    ///
    /// let program = Program::new("5!\n0:10:2");
    /// let blocks = program.statements().iter().map(|s| s.block());
    ///
    /// let result = Transpiler::new(program.tree(), true).transpile(blocks);
    ///
    /// assert_eq!(result.unconvertible, 1);
    /// assert_eq!(result.text,
    ///            "# 1 lines could not be converted from Turquoise to Python and should be translated manually.\n\
    ///             import math\n\
    ///             print(math.factorial(5))\n\
    ///             # Line 2 could not be converted");
    /// ```
    pub fn transpile<I>(&self, statements: I) -> Transpilation
        where I: IntoIterator<Item = Option<NodeId>>
    {
        let mut unconvertible = 0;
        let lines: Vec<String> =
            statements.into_iter()
                      .enumerate()
                      .map(|(i, statement)| {
                          statement.and_then(|id| self.transpile_statement(id))
                                   .unwrap_or_else(|| {
                                       unconvertible += 1;
                                       format!("# Line {} could not be converted", i + 1)
                                   })
                      })
                      .collect();

        let body = lines.join("\n");
        let mut output = Vec::new();

        if unconvertible > 0 {
            output.push(banner(unconvertible));
        }
        output.extend(IMPORTS.iter()
                             .filter(|(trigger, _)| body.contains(trigger))
                             .map(|(_, declaration)| (*declaration).to_string()));
        output.extend(lines);

        Transpilation { text: output.join("\n"),
                        unconvertible }
    }
}

/// The comment heading output with unconvertible statements.
#[must_use]
pub fn banner(unconvertible: usize) -> String {
    format!("# {unconvertible} lines could not be converted from Turquoise to Python and should be translated manually.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;

    fn transpile(source: &str, auto_print: bool) -> Transpilation {
        let program = Program::new(source);
        Transpiler::new(program.tree(), auto_print).transpile(program.statements().iter().map(|s| s.block()))
    }

    #[test]
    fn converted_lines_need_no_banner() {
        let result = transpile("8+6", true);
        assert_eq!(result.unconvertible, 0);
        assert_eq!(result.text, "print(8.0 + 6.0)");
    }

    #[test]
    fn print_wrapping_is_optional() {
        assert_eq!(transpile("9^3", false).text, "9.0 ** 3.0");
    }

    #[test]
    fn tetration_brings_its_definition() {
        let result = transpile("2^^3", true);
        assert_eq!(result.text, format!("{TETRATION_PRELUDE}\nprint(tetration(2.0, 3.0))"));
    }

    #[test]
    fn parse_failures_count_as_unconvertible() {
        let result = transpile("8-6+1\n1+1", true);
        assert_eq!(result.unconvertible, 1);
        assert!(result.text.ends_with("# Line 1 could not be converted\nprint(1.0 + 1.0)"));
    }

    #[test]
    fn each_import_appears_once() {
        let result = transpile("5!\n3!", true);
        assert_eq!(result.text.matches("import math").count(), 1);
    }

    #[test]
    fn nested_expressions_are_parenthesized() {
        assert_eq!(transpile("1+2*3", false).text, "(1.0 + 2.0) * 3.0");
    }
}
