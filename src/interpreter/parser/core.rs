use crate::{
    error::ParseError,
    interpreter::parser::rules::{Rule, default_rules},
    tree::{NodeId, Tree},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default maximum nesting level the engine descends into.
pub const MAX_NESTING: usize = 5;

/// An ordered rule table plus the depth bound used when reducing.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules:     Vec<Rule>,
    max_depth: usize,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Creates the grammar with the standard rule table and
    /// [`MAX_NESTING`].
    #[must_use]
    pub fn new() -> Self {
        Self { rules:     default_rules(),
               max_depth: MAX_NESTING, }
    }

    /// Creates a grammar from an explicit rule table, highest priority first.
    #[must_use]
    pub const fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules,
               max_depth: MAX_NESTING }
    }

    /// Replaces the maximum nesting level. Containers nested deeper than
    /// this are left unreduced.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The maximum nesting level.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Reduces `block` and every unreduced container below it to a fixpoint.
    ///
    /// Child containers are reduced first, innermost out. Then the block's own
    /// children are scanned left to right; at each position the rules are
    /// tried in priority order and the first one whose window matches fires,
    /// replacing the window with a single reduced block. After every firing
    /// the scan restarts at position 0 so newly adjacent nodes can match.
    ///
    /// Every firing removes at least one sibling, so a level with `n`
    /// children is done after at most `n - 1` reductions.
    ///
    /// # Errors
    /// Propagates constructor failures (invalid literal, unknown operator,
    /// wrong operand count). There is no recovery: the reduction stops at the
    /// failing rule.
    ///
    /// # Returns
    /// The number of reductions performed.
    ///
    /// # Example
    /// ```
    /// use turquoise::{
    ///     interpreter::{lexer::lex_statement, parser::core::Grammar},
    ///     tree::{BlockKind, Tree},
    /// };
    ///
    /// let mut tree = Tree::new();
    /// let statement = tree.push_block(BlockKind::Statement);
    /// let id = statement.id();
    /// for token in lex_statement("1+2*3").unwrap() {
    ///     let token = tree.push_token(token);
    ///     tree.append(id, token);
    /// }
    ///
    /// let reductions = Grammar::new().reduce(&mut tree, id).unwrap();
    ///
    /// assert_eq!(reductions, 2);
    /// assert_eq!(tree.children(id).len(), 1);
    /// ```
    pub fn reduce(&self, tree: &mut Tree, block: NodeId) -> ParseResult<usize> {
        self.reduce_level(tree, block, 0)
    }

    fn reduce_level(&self, tree: &mut Tree, block: NodeId, level: usize) -> ParseResult<usize> {
        if level > self.max_depth {
            return Ok(0);
        }

        let mut reductions = 0;

        let containers: Vec<NodeId> = tree.children(block)
                                          .iter()
                                          .copied()
                                          .filter(|child| tree.is_container(*child))
                                          .collect();
        for child in containers {
            reductions += self.reduce_level(tree, child, level + 1)?;
        }

        while let Some((position, rule)) = self.find_match(tree, block) {
            let window = tree.children(block)[position..position + rule.width].to_vec();
            let semantic = (rule.construct)(tree, &(rule.select)(&window))?;
            tree.reduce(block, position, rule.width, semantic);
            reductions += 1;
        }

        Ok(reductions)
    }

    /// Finds the leftmost position where some rule matches, taking the
    /// highest-priority rule at that position.
    fn find_match(&self, tree: &Tree, block: NodeId) -> Option<(usize, &Rule)> {
        let children = tree.children(block);

        (0..children.len()).find_map(|position| {
                               let remaining = &children[position..];
                               self.rules
                                   .iter()
                                   .find(|rule| {
                                       remaining.len() >= rule.width
                                       && (rule.matches)(tree, &remaining[..rule.width])
                                   })
                                   .map(|rule| (position, rule))
                           })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Operand, Operator, Semantic},
        interpreter::lexer::lex_statement,
        tree::BlockKind,
    };

    fn parse(grammar: &Grammar, text: &str) -> (Tree, NodeId, ParseResult<usize>) {
        let mut tree = Tree::new();
        let statement = tree.push_block(BlockKind::Statement);
        let id = statement.id();
        for token in lex_statement(text).unwrap() {
            let token = tree.push_token(token);
            tree.append(id, token);
        }
        tree.append(tree.root(), statement);
        let result = grammar.reduce(&mut tree, id);
        (tree, id, result)
    }

    fn single(tree: &Tree, id: NodeId) -> &Semantic {
        let children = tree.children(id);
        assert_eq!(children.len(), 1, "statement did not collapse");
        tree.semantic(children[0]).unwrap()
    }

    #[test]
    fn three_part_range_beats_two_part_range() {
        let (tree, id, result) = parse(&Grammar::new(), "0:10:2");
        assert_eq!(result.unwrap(), 1);
        match single(&tree, id) {
            Semantic::Range(range) => assert_eq!(range.step, Operand::from(2.0)),
            other => panic!("expected a range, got {other:?}"),
        }
    }

    #[test]
    fn two_part_range_defaults_step() {
        let (tree, id, _) = parse(&Grammar::new(), "1:4");
        match single(&tree, id) {
            Semantic::Range(range) => {
                assert_eq!(range.start, Operand::from(1.0));
                assert_eq!(range.step, Operand::from(1.0));
            },
            other => panic!("expected a range, got {other:?}"),
        }
    }

    #[test]
    fn factorial_is_unary() {
        let (tree, id, _) = parse(&Grammar::new(), "5!");
        match single(&tree, id) {
            Semantic::Expression(expression) => {
                assert_eq!(expression.op, Operator::Factorial);
                assert_eq!(expression.b, None);
            },
            other => panic!("expected an expression, got {other:?}"),
        }
    }

    #[test]
    fn expressions_fold_left_to_right() {
        let (tree, id, result) = parse(&Grammar::new(), "1+2*3");
        assert_eq!(result.unwrap(), 2);
        let Semantic::Expression(outer) = single(&tree, id) else {
            panic!("expected an expression");
        };
        assert_eq!(outer.op, Operator::Mul);
        let Operand::Node(inner) = outer.a else {
            panic!("left operand should be the folded 1+2");
        };
        assert_eq!(tree.source(inner), "1+2");
    }

    #[test]
    fn positions_are_scanned_before_rule_priority() {
        // At position 0 only the expression rule matches, so `1+2` folds
        // before the lower-positioned range `2:3` is considered.
        let (tree, id, _) = parse(&Grammar::new(), "1+2:3");
        let Semantic::Range(range) = single(&tree, id) else {
            panic!("expected a range");
        };
        assert!(matches!(range.start, Operand::Node(_)));
    }

    #[test]
    fn brackets_group_a_reduced_block() {
        let (tree, id, result) = parse(&Grammar::new(), "[1+2]");
        assert_eq!(result.unwrap(), 2);
        assert!(matches!(single(&tree, id), Semantic::Group(_)));
    }

    #[test]
    fn range_times_scalar_reduces() {
        let (tree, id, _) = parse(&Grammar::new(), "0:4*2");
        let Semantic::Expression(expression) = single(&tree, id) else {
            panic!("expected an expression");
        };
        assert!(matches!(expression.a, Operand::Node(_)));
    }

    #[test]
    fn unmatched_statement_is_left_as_residue() {
        let (tree, id, result) = parse(&Grammar::new(), "[1,2]");
        assert_eq!(result.unwrap(), 0);
        assert_eq!(tree.children(id).len(), 5);
    }

    #[test]
    fn invalid_literal_aborts() {
        let (_, _, result) = parse(&Grammar::new(), "8-6+1");
        assert_eq!(result.unwrap_err(),
                   ParseError::InvalidLiteral { literal: "8-6".to_string() });
    }

    #[test]
    fn unknown_operator_aborts() {
        let (_, _, result) = parse(&Grammar::new(), "5!+3");
        assert_eq!(result.unwrap_err(),
                   ParseError::UnknownOperator { operator: "!+".to_string() });
    }

    #[test]
    fn containers_past_the_depth_bound_stay_unreduced() {
        let grammar = Grammar::new().with_max_depth(0);
        let mut tree = Tree::new();
        let statement = tree.push_block(BlockKind::Statement);
        let id = statement.id();
        for token in lex_statement("1+2").unwrap() {
            let token = tree.push_token(token);
            tree.append(id, token);
        }
        tree.append(tree.root(), statement);

        let root = tree.root();
        assert_eq!(grammar.reduce(&mut tree, root).unwrap(), 0);
        assert_eq!(tree.children(id).len(), 3);
    }
}
