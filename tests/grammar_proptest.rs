//! Property-based tests for the lexer and the grammar engine.
//!
//! Statements are drawn from the characters the lexer classifies, so every
//! generated statement lexes; programs add separators and characters that
//! no class accepts.

use proptest::prelude::*;
use turquoise::{
    interpreter::{
        lexer::{lex_statement, split_statements},
        parser::core::Grammar,
    },
    program::Program,
    tree::{BlockKind, Tree},
};

/// Every character that belongs to a class, minus the `|` separator.
const STATEMENT_CHARS: &str = "0123456789.-!@#$%^&*/+<>=?()[]{},;:abcdefghijklmnopqrstuvwxyz";

fn chars_of(alphabet: &str) -> Vec<char> {
    alphabet.chars().collect()
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(chars_of(STATEMENT_CHARS)), 1..32)
        .prop_map(|chars| chars.into_iter().collect())
}

fn program_strategy() -> impl Strategy<Value = String> {
    let alphabet = chars_of(&format!("{STATEMENT_CHARS}|\n AZ"));
    prop::collection::vec(prop::sample::select(alphabet), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Chains of small literals joined by operators. Right operands are always
/// literals, so towers, factorials and ranges stay cheap to evaluate.
fn chain_strategy() -> impl Strategy<Value = String> {
    let literal = prop::sample::select(vec!["0", "1", "2", "3", "0.5", "-1", "-2.5"]);
    let operator = prop::sample::select(vec!["+", "*", "/", "//", "%", "^", "^^", "<", "==", "&", "!", ":"]);

    (literal.clone(), prop::collection::vec((operator, literal), 0..6)).prop_map(|(first, rest)| {
        rest.into_iter().fold(first.to_string(), |mut chain, (op, lit)| {
            chain.push_str(op);
            chain.push_str(lit);
            chain
        })
    })
}

proptest! {
    #[test]
    fn lexing_is_lossless(statement in statement_strategy()) {
        let tokens = lex_statement(&statement).unwrap();
        let joined: String = tokens.iter().map(|t| t.text()).collect();
        prop_assert_eq!(joined, statement);
    }

    #[test]
    fn adjacent_tokens_never_share_a_class(statement in statement_strategy()) {
        let tokens = lex_statement(&statement).unwrap();
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].class(), pair[1].class());
        }
    }

    #[test]
    fn reductions_are_bounded_by_token_count(statement in statement_strategy()) {
        let tokens = lex_statement(&statement).unwrap();
        let count = tokens.len();

        let mut tree = Tree::new();
        let block = tree.push_block(BlockKind::Statement);
        let id = block.id();
        for token in tokens {
            let token = tree.push_token(token);
            tree.append(id, token);
        }
        tree.append(tree.root(), block);

        if let Ok(reductions) = Grammar::new().reduce(&mut tree, id) {
            prop_assert!(reductions < count);
            prop_assert!(tree.children(id).len() + reductions <= count);
        }
        prop_assert_eq!(tree.source(id), statement.as_str());
    }

    #[test]
    fn parsing_and_transpiling_never_panic(source in program_strategy()) {
        let program = Program::new(&source);
        let statements = program.statements().len();
        prop_assert_eq!(statements, split_statements(&source).len());

        let result = program.transpile(true);
        prop_assert!(result.unconvertible <= statements);
        prop_assert!(result.text.lines().count() >= statements);
    }

    #[test]
    fn every_statement_reports_once(chain in chain_strategy()) {
        let source = format!("{chain}|{chain}");
        let results = Program::new(&source).execute(false, false);
        prop_assert_eq!(results.len(), 2);
        match (&results[0], &results[1]) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first.to_string(), second.to_string()),
            (Err(first), Err(second)) => {
                prop_assert_eq!((first.statement(), second.statement()), (1, 2));
                prop_assert_eq!(first.text(), second.text());
            },
            (first, second) => prop_assert!(false, "{first:?} and {second:?} disagree"),
        }
    }
}
