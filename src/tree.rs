use crate::{
    ast::Semantic,
    interpreter::{evaluator::core::MAX_EVAL_DEPTH, lexer::CharClass},
};

/// Stable handle of a node inside a [`Tree`].
///
/// Handles are unique for the lifetime of the tree and are what an external
/// visualizer uses as node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node that exists in the arena but has no parent yet.
///
/// The handle is neither `Copy` nor `Clone`, and attaching consumes it, so a
/// node can be given a parent at most once.
#[derive(Debug)]
#[must_use]
pub struct Detached(NodeId);

impl Detached {
    /// Returns the id of the detached node.
    pub const fn id(&self) -> NodeId {
        self.0
    }
}

/// A leaf holding one maximal run of same-class characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text:  String,
    class: CharClass,
}

impl Token {
    /// Creates a token from its text and class.
    #[must_use]
    pub fn new(text: &str, class: CharClass) -> Self {
        Self { text: text.to_string(),
               class }
    }

    /// The characters of the token. This is also its source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lexical class shared by every character of the token.
    #[must_use]
    pub const fn class(&self) -> CharClass {
        self.class
    }
}

/// What a block stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// The single top-level container holding every statement.
    Root,
    /// One statement, as produced by the lexer.
    Statement,
    /// A block created by a grammar reduction.
    Numeric,
}

impl BlockKind {
    /// Returns the lowercase label of the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Statement => "statement",
            Self::Numeric => "numeric",
        }
    }
}

/// A composite node with ordered children and an optional semantic node.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    kind:     BlockKind,
    children: Vec<NodeId>,
    semantic: Option<Semantic>,
    source:   String,
}

impl Block {
    /// The kind of the block.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// The ordered children.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The semantic node attached when the block was reduced, if any.
    #[must_use]
    pub const fn semantic(&self) -> Option<&Semantic> {
        self.semantic.as_ref()
    }

    /// Concatenated source of the children.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A lexer token.
    Token(Token),
    /// A container or reduced block.
    Block(Block),
}

impl Node {
    /// Source text of the node.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Token(token) => token.text(),
            Self::Block(block) => block.source(),
        }
    }
}

/// Arena owning every token and block of a program.
///
/// Children are stored as lists of [`NodeId`]s. The only ways to change a
/// child list are [`Tree::append`], which consumes a [`Detached`] handle, and
/// [`Tree::reduce`], which moves a window of existing children under a new
/// block. Both keep every block's source equal to the concatenation of its
/// children's sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
    root:  NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Creates a tree containing only an empty root block.
    #[must_use]
    pub fn new() -> Self {
        let root = Block { kind:     BlockKind::Root,
                           children: Vec::new(),
                           semantic: None,
                           source:   String::new(), };
        Self { nodes: vec![Node::Block(root)],
               root:  NodeId(0), }
    }

    /// The root block.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Looks up a node.
    ///
    /// # Panics
    /// Panics if `id` was produced by a different tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the node as a token, if it is one.
    #[must_use]
    pub fn token(&self, id: NodeId) -> Option<&Token> {
        match self.node(id) {
            Node::Token(token) => Some(token),
            Node::Block(_) => None,
        }
    }

    /// Returns the node as a block, if it is one.
    #[must_use]
    pub fn block(&self, id: NodeId) -> Option<&Block> {
        match self.node(id) {
            Node::Block(block) => Some(block),
            Node::Token(_) => None,
        }
    }

    /// Children of a node; empty for tokens.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Block(block) => block.children(),
            Node::Token(_) => &[],
        }
    }

    /// Source text of a node.
    #[must_use]
    pub fn source(&self, id: NodeId) -> &str {
        self.node(id).source()
    }

    /// Semantic node of a reduced block.
    #[must_use]
    pub fn semantic(&self, id: NodeId) -> Option<&Semantic> {
        self.block(id).and_then(Block::semantic)
    }

    /// Adds a token to the arena without a parent.
    pub fn push_token(&mut self, token: Token) -> Detached {
        self.nodes.push(Node::Token(token));
        Detached(NodeId(self.nodes.len() - 1))
    }

    /// Adds an empty container block to the arena without a parent.
    pub fn push_block(&mut self, kind: BlockKind) -> Detached {
        self.nodes.push(Node::Block(Block { kind,
                                            children: Vec::new(),
                                            semantic: None,
                                            source: String::new() }));
        Detached(NodeId(self.nodes.len() - 1))
    }

    /// Appends a detached node as the last child of `parent`.
    ///
    /// Ancestors' sources are not touched: callers build statements
    /// bottom-up, attaching a statement to the root once it is complete.
    ///
    /// # Panics
    /// Panics if `parent` is a token.
    pub fn append(&mut self, parent: NodeId, child: Detached) -> NodeId {
        let id = child.0;
        let text = self.source(id).to_string();
        match &mut self.nodes[parent.0] {
            Node::Block(block) => {
                block.children.push(id);
                block.source.push_str(&text);
            },
            Node::Token(_) => panic!("cannot append a child to token {parent}"),
        }
        id
    }

    /// Replaces `width` children of `parent` starting at `start` with one new
    /// `Numeric` block that owns exactly those children and carries
    /// `semantic`.
    ///
    /// The parent's source is unchanged, since the new block's source is the
    /// concatenation of the window.
    ///
    /// # Panics
    /// Panics if `parent` is a token, if the window is out of bounds, or if
    /// `width < 2`. A reduction must shrink its level.
    pub fn reduce(&mut self,
                  parent: NodeId,
                  start: usize,
                  width: usize,
                  semantic: Semantic)
                  -> NodeId {
        assert!(width >= 2, "a reduction must replace at least two siblings");

        let window: Vec<NodeId> = match &self.nodes[parent.0] {
            Node::Block(block) => block.children[start..start + width].to_vec(),
            Node::Token(_) => panic!("cannot reduce inside token {parent}"),
        };
        let source = window.iter().map(|id| self.source(*id)).collect::<String>();

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Block(Block { kind: BlockKind::Numeric,
                                            children: window,
                                            semantic: Some(semantic),
                                            source }));

        if let Node::Block(block) = &mut self.nodes[parent.0] {
            block.children.splice(start..start + width, [id]);
        }
        id
    }

    /// Visits every node reachable from the root in document order (parents
    /// before children, left to right).
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// Every parent → child edge reachable from the root, in document order.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.preorder()
            .into_iter()
            .flat_map(|parent| self.children(parent).iter().map(move |child| (parent, *child)))
            .collect()
    }

    /// Renders an indented outline of the tree for diagnostics.
    ///
    /// Blocks show their kind and semantic variant followed by the semantic
    /// node's report fields; tokens show their text and class. Subtrees below
    /// `MAX_EVAL_DEPTH` collapse into a single `...` line.
    #[must_use]
    pub fn outline(&self) -> String {
        enum Step {
            Enter(NodeId, usize),
            Report(NodeId, usize),
        }

        let mut out = String::new();
        let mut stack = vec![Step::Enter(self.root, 0)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id, level) => {
                    let indent = "  ".repeat(level);
                    if level > MAX_EVAL_DEPTH {
                        out.push_str(&format!("{indent}...\n"));
                        continue;
                    }
                    match self.node(id) {
                        Node::Token(token) => {
                            out.push_str(&format!("{indent}Token: {}: {}\n", token.text(), token.class()));
                        },
                        Node::Block(block) => {
                            let variant = block.semantic().map_or("None", Semantic::name);
                            out.push_str(&format!("{indent}Block {id}: {variant}; {}\n", block.kind().label()));
                            stack.push(Step::Report(id, level));
                            stack.extend(block.children().iter().rev().map(|child| Step::Enter(*child, level + 1)));
                        },
                    }
                },
                Step::Report(id, level) => {
                    if let Some(semantic) = self.semantic(id) {
                        let indent = "  ".repeat(level);
                        for (name, value) in semantic.report() {
                            out.push_str(&format!("{indent}  {name}: {value}\n"));
                        }
                    }
                },
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Number, Operand, Range, Semantic};

    fn statement(tree: &mut Tree, texts: &[(&str, CharClass)]) -> NodeId {
        let block = tree.push_block(BlockKind::Statement);
        let id = block.id();
        for (text, class) in texts {
            let token = tree.push_token(Token::new(text, *class));
            tree.append(id, token);
        }
        tree.append(tree.root(), block)
    }

    fn range_of(a: f64, b: f64) -> Semantic {
        Semantic::Range(Range::new(Operand::Number(Number(a)),
                                   Operand::Number(Number(b)),
                                   Operand::Number(Number(1.0))))
    }

    #[test]
    fn append_keeps_source_concatenated() {
        let mut tree = Tree::new();
        let id = statement(&mut tree,
                           &[("1", CharClass::Numeric),
                             (":", CharClass::Syntax),
                             ("4", CharClass::Numeric)]);
        assert_eq!(tree.source(id), "1:4");
        assert_eq!(tree.source(tree.root()), "1:4");
    }

    #[test]
    fn reduce_moves_window_under_new_block() {
        let mut tree = Tree::new();
        let id = statement(&mut tree,
                           &[("1", CharClass::Numeric),
                             (":", CharClass::Syntax),
                             ("4", CharClass::Numeric),
                             ("]", CharClass::Syntax)]);
        let before = tree.children(id).to_vec();

        let reduced = tree.reduce(id, 0, 3, range_of(1.0, 4.0));

        assert_eq!(tree.children(id), &[reduced, before[3]]);
        assert_eq!(tree.children(reduced), &before[..3]);
        assert_eq!(tree.source(reduced), "1:4");
        assert_eq!(tree.source(id), "1:4]");
        assert!(tree.is_numeric(reduced));
        assert!(!tree.is_container(reduced));
    }

    #[test]
    fn every_node_has_one_parent() {
        let mut tree = Tree::new();
        let id = statement(&mut tree,
                           &[("1", CharClass::Numeric),
                             (":", CharClass::Syntax),
                             ("4", CharClass::Numeric)]);
        tree.reduce(id, 0, 3, range_of(1.0, 4.0));

        let mut seen = std::collections::HashSet::new();
        for (_, child) in tree.edges() {
            assert!(seen.insert(child), "{child} has two parents");
        }
        assert_eq!(tree.preorder().len(), tree.len());
    }

    #[test]
    #[should_panic(expected = "at least two siblings")]
    fn reduce_rejects_single_node_windows() {
        let mut tree = Tree::new();
        let id = statement(&mut tree, &[("1", CharClass::Numeric)]);
        tree.reduce(id, 0, 1, range_of(1.0, 1.0));
    }

    #[test]
    fn outline_lists_report_fields() {
        let mut tree = Tree::new();
        let id = statement(&mut tree,
                           &[("1", CharClass::Numeric),
                             (":", CharClass::Syntax),
                             ("4", CharClass::Numeric)]);
        tree.reduce(id, 0, 3, range_of(1.0, 4.0));

        let outline = tree.outline();
        assert!(outline.contains("Range; numeric"));
        assert!(outline.contains("start: 1.0"));
        assert!(outline.contains("Token: :: syntax"));
    }

    #[test]
    fn outline_of_a_long_chain_is_truncated() {
        let mut tree = Tree::new();
        let id = statement(&mut tree, &vec![("1", CharClass::Numeric); 2_000]);
        // Fold pairs from the left so every block nests inside the next.
        while tree.children(id).len() > 1 {
            tree.reduce(id, 0, 2, range_of(1.0, 1.0));
        }

        let outline = tree.outline();
        assert!(outline.starts_with(&format!("Block {}: None; root", tree.root())));
        assert!(outline.contains("...\n"));
        assert!(outline.lines().count() < 8 * MAX_EVAL_DEPTH);
    }
}
