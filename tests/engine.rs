//! End-to-end tests for the unranking engine.
//!
//! Covers the exact leading ranks, bijectivity, grammar well-formedness,
//! layer layout, the contiguous-prefix variable rule, and a full cross-check
//! against a directly generated reference enumeration.

use std::collections::HashSet;

use expr_rank::emit::variable_name;
use expr_rank::{BigNat, Engine, EngineError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn unrank(engine: &Engine, rank: u64) -> String {
    engine.unrank(&BigNat::from(rank)).unwrap()
}

fn collect_all(engine: &Engine) -> Vec<String> {
    let total = engine.total().to_u64().unwrap();
    (1..=total).map(|rank| unrank(engine, rank)).collect()
}

/// Operator-plus-leaf token count. Every operator owns exactly one `(`, and
/// leaves outnumber binary operators (commas) by one.
fn token_size(expr: &str) -> usize {
    let opens = expr.matches('(').count();
    let commas = expr.matches(',').count();
    opens + commas + 1
}

fn is_balanced(expr: &str) -> bool {
    let mut depth = 0i64;
    for c in expr.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Every `(` must directly follow one of the four operator tokens.
fn opens_follow_operators(expr: &str) -> bool {
    let bytes = expr.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] == b'(' {
            let head = &expr[..i];
            if !(head.ends_with("AND")
                || head.ends_with("OR")
                || head.ends_with("XOR")
                || head.ends_with("NOT"))
            {
                return false;
            }
        }
    }
    true
}

fn uses_grammar_alphabet(expr: &str) -> bool {
    expr.chars().all(|c| c.is_ascii_uppercase() || matches!(c, '(' | ')' | ','))
}

/// Leaf variable tokens, in order of appearance.
fn leaf_tokens(expr: &str) -> Vec<String> {
    expr.split(&['(', ')', ','][..])
        .filter(|tok| !tok.is_empty())
        .filter(|tok| !matches!(*tok, "AND" | "OR" | "XOR" | "NOT"))
        .map(str::to_string)
        .collect()
}

/// Fresh variables must appear in canonical order: the n-th distinct
/// variable is the n-th name of the alphabet.
fn uses_prefix_variables(expr: &str) -> bool {
    let mut seen: Vec<String> = Vec::new();
    for tok in leaf_tokens(expr) {
        if !seen.contains(&tok) {
            if tok != variable_name(seen.len()) {
                return false;
            }
            seen.push(tok);
        }
    }
    true
}

// ─── Reference enumeration ─────────────────────────────────────────────────
//
// An independent generator that materializes the whole family in canonical
// order: layers by size; within a layer, binary-root shapes in blocks by
// left subtree size, then unary-root shapes; per shape, operator tuples in
// base-3 order, then leaf labelings in lexicographic RGS order.

#[derive(Clone)]
enum Tree {
    Leaf,
    Not(Box<Tree>),
    Bin(Box<Tree>, Box<Tree>),
}

fn shapes_of(size: usize) -> Vec<Tree> {
    if size == 1 {
        return vec![Tree::Leaf];
    }
    let mut out = Vec::new();
    for left_size in 1..=size - 2 {
        let right_size = size - 1 - left_size;
        let lefts = shapes_of(left_size);
        let rights = shapes_of(right_size);
        for left in &lefts {
            for right in &rights {
                out.push(Tree::Bin(Box::new(left.clone()), Box::new(right.clone())));
            }
        }
    }
    for child in shapes_of(size - 1) {
        out.push(Tree::Not(Box::new(child)));
    }
    out
}

fn binaries(tree: &Tree) -> usize {
    match tree {
        Tree::Leaf => 0,
        Tree::Not(child) => binaries(child),
        Tree::Bin(left, right) => 1 + binaries(left) + binaries(right),
    }
}

fn op_tuples(count: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut cur = vec![0usize; count];
    loop {
        out.push(cur.clone());
        let mut i = count;
        loop {
            if i == 0 {
                return out;
            }
            i -= 1;
            if cur[i] == 2 {
                cur[i] = 0;
            } else {
                cur[i] += 1;
                break;
            }
        }
    }
}

fn all_rgs(len: usize) -> Vec<Vec<usize>> {
    fn extend(cur: &mut Vec<usize>, max: usize, len: usize, out: &mut Vec<Vec<usize>>) {
        if cur.len() == len {
            out.push(cur.clone());
            return;
        }
        for v in 0..=max + 1 {
            cur.push(v);
            extend(cur, max.max(v), len, out);
            cur.pop();
        }
    }
    if len == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    let mut cur = vec![0usize];
    extend(&mut cur, 0, len, &mut out);
    out
}

fn render(tree: &Tree, ops: &[usize], rgs: &[usize]) -> String {
    fn walk(
        tree: &Tree,
        ops: &[usize],
        rgs: &[usize],
        op_at: &mut usize,
        leaf_at: &mut usize,
        out: &mut String,
    ) {
        match tree {
            Tree::Leaf => {
                out.push((b'A' + rgs[*leaf_at] as u8) as char);
                *leaf_at += 1;
            }
            Tree::Not(child) => {
                out.push_str("NOT(");
                walk(child, ops, rgs, op_at, leaf_at, out);
                out.push(')');
            }
            Tree::Bin(left, right) => {
                out.push_str(["AND", "OR", "XOR"][ops[*op_at]]);
                *op_at += 1;
                out.push('(');
                walk(left, ops, rgs, op_at, leaf_at, out);
                out.push(',');
                walk(right, ops, rgs, op_at, leaf_at, out);
                out.push(')');
            }
        }
    }
    let mut out = String::new();
    let mut op_at = 0;
    let mut leaf_at = 0;
    walk(tree, ops, rgs, &mut op_at, &mut leaf_at, &mut out);
    out
}

fn reference_enumeration(max_size: usize) -> Vec<String> {
    let mut out = Vec::new();
    for size in 1..=max_size {
        for shape in shapes_of(size) {
            let b = binaries(&shape);
            for ops in op_tuples(b) {
                for rgs in all_rgs(b + 1) {
                    out.push(render(&shape, &ops, &rgs));
                }
            }
        }
    }
    out
}

// ─── Exact leading ranks ───────────────────────────────────────────────────

#[test]
fn first_eight_ranks() {
    let engine = Engine::new(6).unwrap();
    let expected = [
        "A",
        "NOT(A)",
        "AND(A,A)",
        "AND(A,B)",
        "OR(A,A)",
        "OR(A,B)",
        "XOR(A,A)",
        "XOR(A,B)",
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(unrank(&engine, i as u64 + 1), *want, "rank {}", i + 1);
    }
}

#[test]
fn totals_for_small_bounds() {
    let expected: [u64; 7] = [1, 2, 9, 28, 155, 666, 4132];
    for (i, &want) in expected.iter().enumerate() {
        let engine = Engine::new(i + 1).unwrap();
        assert_eq!(engine.total(), BigNat::from(want), "total for M={}", i + 1);
    }
}

// ─── Bijectivity and grammar ───────────────────────────────────────────────

#[test]
fn outputs_are_distinct_and_well_formed() {
    let engine = Engine::new(6).unwrap();
    let all = collect_all(&engine);
    assert_eq!(all.len(), 666);

    let mut seen = HashSet::new();
    for expr in &all {
        assert!(!expr.is_empty());
        assert!(uses_grammar_alphabet(expr), "bad character in {}", expr);
        assert!(is_balanced(expr), "unbalanced parens in {}", expr);
        assert!(opens_follow_operators(expr), "stray paren in {}", expr);
        assert!(seen.insert(expr.clone()), "duplicate {}", expr);
    }
}

#[test]
fn layers_partition_by_size() {
    let engine = Engine::new(6).unwrap();
    let tables = engine.tables();
    for size in 1..=6 {
        let lo = tables.cumulative(size - 1).to_u64().unwrap() + 1;
        let hi = tables.cumulative(size).to_u64().unwrap();
        assert_eq!(
            hi - lo + 1,
            tables.shape_weight(size).to_u64().unwrap(),
            "layer {} width",
            size
        );
        for rank in lo..=hi {
            let expr = unrank(&engine, rank);
            assert_eq!(token_size(&expr), size, "size of #{} = {}", rank, expr);
        }
    }
}

#[test]
fn variables_form_contiguous_prefix() {
    let engine = Engine::new(6).unwrap();
    for expr in collect_all(&engine) {
        assert!(uses_prefix_variables(&expr), "non-canonical variables in {}", expr);
    }
}

// ─── Reference cross-check ─────────────────────────────────────────────────

#[test]
fn matches_reference_enumeration() {
    let engine = Engine::new(6).unwrap();
    let reference = reference_enumeration(6);
    assert_eq!(reference.len(), 666);
    assert_eq!(collect_all(&engine), reference);
}

// ─── Error paths ───────────────────────────────────────────────────────────

#[test]
fn rejects_out_of_range_ranks() {
    let engine = Engine::new(5).unwrap();
    let total = engine.total();

    assert!(matches!(
        engine.unrank(&BigNat::zero()),
        Err(EngineError::Bounds { .. })
    ));
    assert!(matches!(
        engine.unrank(&(&total + &BigNat::one())),
        Err(EngineError::Bounds { .. })
    ));
    assert_eq!(unrank(&engine, 1), "A");
    assert!(engine.unrank(&total).is_ok());
}

#[test]
fn rejects_unsupported_bounds() {
    assert!(matches!(Engine::new(0), Err(EngineError::Config { .. })));
    assert!(matches!(
        Engine::new(expr_rank::MAX_SIZE_LIMIT + 1),
        Err(EngineError::Config { .. })
    ));
}

// ─── Sampled checks at a large bound ───────────────────────────────────────

#[test]
fn sampled_ranks_at_large_bound() {
    let engine = Engine::new(32).unwrap();
    let total = engine.total();
    assert!(total.bit_length() > 64, "layer growth should pass 64 bits");

    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    for _ in 0..50 {
        let hi = BigNat::from(rng.gen::<u64>());
        let lo = BigNat::from(rng.gen::<u64>());
        let wide = &(&hi << 64) + &lo;
        let (_, below) = wide.divmod(&total).unwrap();
        let rank = &below + &BigNat::one();

        let expr = engine.unrank(&rank).unwrap();
        assert!(uses_grammar_alphabet(&expr), "bad character in {}", expr);
        assert!(is_balanced(&expr), "unbalanced parens in {}", expr);
        assert!(opens_follow_operators(&expr), "stray paren in {}", expr);
        assert!(uses_prefix_variables(&expr), "non-canonical variables in {}", expr);
        assert!(token_size(&expr) <= 32, "oversized output {}", expr);
    }
}
