use turquoise::{
    error::Error,
    program::Program,
};

const OPERANDS: [&str; 7] = ["0", "1", "-1", "2.5", "10", "0:3", "x"];

const OPERATORS: [&str; 18] =
    ["+", "-", "*", "/", "//", "**", "^", "^^", "%", "!", "<", "<=", ">", ">=", "==", "!=", "&", "|"];

#[derive(Debug, Default)]
struct Tally {
    ok:      usize,
    parse:   usize,
    runtime: usize,
}

impl Tally {
    const fn total(&self) -> usize {
        self.ok + self.parse + self.runtime
    }
}

#[test]
fn operand_operator_operand_sweep() {
    let mut tally = Tally::default();

    for a in OPERANDS {
        for op in OPERATORS {
            for b in OPERANDS {
                let source = format!("{a}{op}{b}");
                for result in Program::new(&source).execute(false, true) {
                    match result {
                        Ok(_) => tally.ok += 1,
                        Err(Error::Parse { .. }) => tally.parse += 1,
                        Err(Error::Runtime { .. }) => tally.runtime += 1,
                    }
                }
            }
        }
    }

    // `|` separates statements, so those sources yield two outcomes each.
    let pairs = OPERANDS.len() * OPERATORS.len() * OPERANDS.len();
    assert_eq!(tally.total(), pairs + OPERANDS.len() * OPERANDS.len());
    assert!(tally.ok > 0, "{tally:?}");
    assert!(tally.runtime > 0, "{tally:?}");
}

#[test]
fn sweep_transpiles_without_panicking() {
    let mut unconvertible = 0;

    for a in OPERANDS {
        for op in OPERATORS {
            for b in OPERANDS {
                unconvertible += Program::new(&format!("{a}{op}{b}")).transpile(true).unconvertible;
            }
        }
    }

    assert!(unconvertible > 0);
}
