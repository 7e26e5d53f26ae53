use crate::{
    ast::{Expression, Group, Number, Operand, Operator, Semantic},
    interpreter::evaluator::core::MAX_EVAL_DEPTH,
    tree::{Node, NodeId, Tree},
    util::num::format_real,
};

/// Renders semantic nodes of a tree as Python source text.
///
/// Rendering gives up (returns `None`) on anything Python cannot express the
/// same way: ranges, bare text and nesting deeper than the ceiling.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    tree:      &'a Tree,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer sharing the evaluator's depth ceiling.
    #[must_use]
    pub const fn new(tree: &'a Tree) -> Self {
        Self { tree,
               max_depth: MAX_EVAL_DEPTH }
    }

    /// Renders an expression.
    ///
    /// Binary operators render as `a op b` with `^` spelled `**` and negative
    /// literals parenthesized. Factorial renders as `math.factorial(a)` and
    /// tetration as `tetration(a, b)`.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     ast::{Expression, Operator},
    ///     interpreter::transpiler::render::Renderer,
    ///     tree::Tree,
    /// };
    ///
    /// let tree = Tree::new();
    /// let renderer = Renderer::new(&tree);
    ///
    /// let sum = Expression::new(8.0.into(), Some(6.0.into()), Operator::Add).unwrap();
    /// assert_eq!(renderer.render_expression(&sum, 0).unwrap(), "8.0 + 6.0");
    ///
    /// let fact = Expression::new(5.0.into(), None, Operator::Factorial).unwrap();
    /// assert_eq!(renderer.render_expression(&fact, 0).unwrap(), "math.factorial(5)");
    /// ```
    #[must_use]
    pub fn render_expression(&self, expression: &Expression, depth: usize) -> Option<String> {
        if depth > self.max_depth {
            return None;
        }

        match (expression.op, &expression.b) {
            (Operator::Factorial, _) => {
                let argument = match &expression.a {
                    Operand::Number(Number(x)) if x.is_finite() && x.fract() == 0.0 => format!("{x:.0}"),
                    other => self.render_operand(other, depth)?,
                };
                Some(format!("math.factorial({argument})"))
            },
            (Operator::Tetration, Some(b)) => Some(format!("tetration({}, {})",
                                                           self.render_operand(&expression.a, depth)?,
                                                           self.render_operand(b, depth)?)),
            (op, Some(b)) => Some(format!("{} {op} {}",
                                          signed(self.render_operand(&expression.a, depth)?),
                                          signed(self.render_operand(b, depth)?))),
            (_, None) => None,
        }
    }

    /// Renders an operand.
    ///
    /// Nested expressions are parenthesized, groups collapse to their inner
    /// operand and numbers use Python's float repr.
    #[must_use]
    pub fn render_operand(&self, operand: &Operand, depth: usize) -> Option<String> {
        match operand {
            Operand::Number(Number(x)) => Some(format_real(*x)),
            Operand::Text(_) => None,
            Operand::Node(id) => self.render_node(*id, depth + 1),
        }
    }

    fn render_node(&self, id: NodeId, depth: usize) -> Option<String> {
        if depth > self.max_depth {
            return None;
        }

        match self.tree.node(id) {
            Node::Token(_) => None,
            Node::Block(block) => match (block.semantic(), block.children()) {
                (Some(Semantic::Number(Number(x))), _) => Some(format_real(*x)),
                (Some(Semantic::Expression(expression)), _) => {
                    Some(format!("({})", self.render_expression(expression, depth)?))
                },
                (Some(Semantic::Group(Group { inner })), _) => self.render_operand(inner, depth),
                (None, [only]) => self.render_node(*only, depth + 1),
                (Some(Semantic::Range(_)) | None, _) => None,
            },
        }
    }
}

/// Parenthesizes a rendered negative literal so that Python's unary minus
/// cannot bind looser than the operator around it.
fn signed(rendered: String) -> String {
    if rendered.starts_with('-') { format!("({rendered})") } else { rendered }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_spelled_with_two_stars() {
        let tree = Tree::new();
        let pow = Expression::new(9.0.into(), Some(3.0.into()), Operator::Pow).unwrap();
        assert_eq!(Renderer::new(&tree).render_expression(&pow, 0).unwrap(), "9.0 ** 3.0");
    }

    #[test]
    fn tetration_is_a_call() {
        let tree = Tree::new();
        let tower = Expression::new(2.0.into(), Some(3.0.into()), Operator::Tetration).unwrap();
        assert_eq!(Renderer::new(&tree).render_expression(&tower, 0).unwrap(), "tetration(2.0, 3.0)");
    }

    #[test]
    fn fractional_factorial_keeps_its_literal() {
        let tree = Tree::new();
        let fact = Expression::new(2.5.into(), None, Operator::Factorial).unwrap();
        assert_eq!(Renderer::new(&tree).render_expression(&fact, 0).unwrap(), "math.factorial(2.5)");
    }

    #[test]
    fn negative_literals_are_parenthesized() {
        let tree = Tree::new();
        let renderer = Renderer::new(&tree);

        let pow = Expression::new((-2.0).into(), Some(2.0.into()), Operator::Pow).unwrap();
        assert_eq!(renderer.render_expression(&pow, 0).unwrap(), "(-2.0) ** 2.0");

        let zero = Expression::new((-0.0).into(), Some((-1.5).into()), Operator::Mul).unwrap();
        assert_eq!(renderer.render_expression(&zero, 0).unwrap(), "(-0.0) * (-1.5)");

        let tower = Expression::new((-2.0).into(), Some(1.0.into()), Operator::Tetration).unwrap();
        assert_eq!(renderer.render_expression(&tower, 0).unwrap(), "tetration(-2.0, 1.0)");
    }

    #[test]
    fn text_operands_do_not_render() {
        let tree = Tree::new();
        let sum = Expression::new(Operand::Text("x".into()), Some(1.0.into()), Operator::Add).unwrap();
        assert_eq!(Renderer::new(&tree).render_expression(&sum, 0), None);
    }
}
