use crate::{
    ast::{Expression, Group, Operand, Operator, Range, Semantic},
    error::ParseError,
    interpreter::parser::core::ParseResult,
    tree::{NodeId, Tree},
};

/// Nodes picked out of a matched window for the constructor. `None` marks an
/// absent argument, such as the missing right operand of a factorial.
pub type Selection = Vec<Option<NodeId>>;

/// One rewriting rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name used in diagnostics.
    pub name:      &'static str,
    /// Number of siblings the rule consumes.
    pub width:     usize,
    /// Decides whether a window of exactly `width` siblings matches.
    pub matches:   fn(&Tree, &[NodeId]) -> bool,
    /// Maps the matched window to constructor arguments.
    pub select:    fn(&[NodeId]) -> Selection,
    /// Builds the semantic node from the selected arguments.
    pub construct: fn(&Tree, &[Option<NodeId>]) -> ParseResult<Semantic>,
}

/// The standard rule table, highest priority first.
///
/// | name | window | result |
/// |---|---|---|
/// | `range3` | `num : num : num` | `Range(a, b, c)` |
/// | `range2` | `num : num` | `Range(a, b, 1)` |
/// | `factorial` | `num !` | `Expression(a, None, !)` |
/// | `expression` | `num op num` | `Expression(a, b, op)` |
/// | `group` | `[ x ]` | `Group(x)` |
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![Rule { name:      "range3",
                width:     5,
                matches:   |tree, w| {
                    tree.is_numeric(w[0])
                    && tree.is_text(w[1], ":")
                    && tree.is_numeric(w[2])
                    && tree.is_text(w[3], ":")
                    && tree.is_numeric(w[4])
                },
                select:    |w| vec![Some(w[0]), Some(w[2]), Some(w[4])],
                construct: construct_range, },
         Rule { name:      "range2",
                width:     3,
                matches:   |tree, w| {
                    tree.is_numeric(w[0]) && tree.is_text(w[1], ":") && tree.is_numeric(w[2])
                },
                select:    |w| vec![Some(w[0]), Some(w[2])],
                construct: construct_range, },
         Rule { name:      "factorial",
                width:     2,
                matches:   |tree, w| tree.is_numeric(w[0]) && tree.is_text(w[1], "!"),
                select:    |w| vec![Some(w[0]), None, Some(w[1])],
                construct: construct_expression, },
         Rule { name:      "expression",
                width:     3,
                matches:   |tree, w| {
                    tree.is_numeric(w[0]) && tree.is_operator(w[1]) && tree.is_numeric(w[2])
                },
                select:    |w| vec![Some(w[0]), Some(w[2]), Some(w[1])],
                construct: construct_expression, },
         Rule { name:      "group",
                width:     3,
                matches:   |tree, w| tree.is_text(w[0], "[") && tree.is_text(w[2], "]"),
                select:    |w| vec![Some(w[1])],
                construct: construct_group, },]
}

fn operand(tree: &Tree, argument: Option<NodeId>) -> ParseResult<Option<Operand>> {
    argument.map(|id| Operand::from_node(tree, id)).transpose()
}

fn required(tree: &Tree, args: &[Option<NodeId>], index: usize) -> ParseResult<Operand> {
    operand(tree, args.get(index).copied().flatten())?.ok_or_else(|| {
                                                         ParseError::OperatorArity { operator: "rule".to_string(),
                                                                                     expected: index + 1 }
                                                     })
}

/// `[start, stop]` or `[start, stop, step]`.
fn construct_range(tree: &Tree, args: &[Option<NodeId>]) -> ParseResult<Semantic> {
    let start = required(tree, args, 0)?;
    let stop = required(tree, args, 1)?;
    let range = match operand(tree, args.get(2).copied().flatten())? {
        Some(step) => Range::new(start, stop, step),
        None => Range::unit(start, stop),
    };
    Ok(Semantic::Range(range))
}

/// `[a, b, op]`, with `b` absent for unary operators.
fn construct_expression(tree: &Tree, args: &[Option<NodeId>]) -> ParseResult<Semantic> {
    let a = required(tree, args, 0)?;
    let b = operand(tree, args.get(1).copied().flatten())?;
    let symbol = args.get(2)
                     .copied()
                     .flatten()
                     .and_then(|id| tree.token(id))
                     .map_or("", |token| token.text());
    let op = Operator::parse(symbol)?;
    Ok(Semantic::Expression(Expression::new(a, b, op)?))
}

/// `[inner]`.
fn construct_group(tree: &Tree, args: &[Option<NodeId>]) -> ParseResult<Semantic> {
    Ok(Semantic::Group(Group { inner: required(tree, args, 0)? }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_in_priority_order() {
        let names: Vec<&str> = default_rules().iter().map(|rule| rule.name).collect();
        assert_eq!(names, vec!["range3", "range2", "factorial", "expression", "group"]);
    }

    #[test]
    fn every_rule_shrinks_its_level() {
        assert!(default_rules().iter().all(|rule| rule.width >= 2));
    }
}
