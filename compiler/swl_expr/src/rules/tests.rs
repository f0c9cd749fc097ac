use super::*;
use pretty_assertions::assert_eq;
use swl_symtab::{SymbolFlags, SymbolKind};

fn expr(ty: ExprType) -> Expr {
    Expr::new(ty)
}

fn zero() -> Expr {
    Expr {
        ty: ExprType::INT,
        literal_zero: true,
        poisoned: false,
    }
}

fn nilable(base: ValueType) -> ExprType {
    ExprType::new(base, true)
}

fn term(cat: Category, kind: TokenKind) -> StackSymbol {
    StackSymbol::Terminal(Terminal {
        cat,
        token: Some(Token::dummy(kind)),
        handle: false,
    })
}

fn op(o: Operator) -> StackSymbol {
    term(Category::of(&TokenKind::Operator(o)), TokenKind::Operator(o))
}

fn e() -> StackSymbol {
    StackSymbol::Expr(expr(ExprType::INT))
}

fn message(rule: Rule) -> &'static str {
    match rule {
        Rule::NoRule(no) => no.message,
        other => panic!("expected no rule, got {other:?}"),
    }
}

// === Rule selection ===

#[test]
fn selects_operand() {
    let rule = select(&[term(Category::Operand, TokenKind::Int(4))]);
    assert!(matches!(rule, Rule::Operand(t) if t.kind == TokenKind::Int(4)));
}

#[test]
fn selects_binary_paren_and_not_nil() {
    assert!(matches!(
        select(&[e(), op(Operator::Star), e()]),
        Rule::Binary { op: Operator::Star, .. }
    ));
    assert!(matches!(
        select(&[op(Operator::LParen), e(), op(Operator::RParen)]),
        Rule::Paren(_)
    ));
    assert!(matches!(
        select(&[e(), op(Operator::Not)]),
        Rule::NotNil { .. }
    ));
}

#[test]
fn classifies_malformed_handles() {
    assert_eq!(
        message(select(&[op(Operator::LParen), op(Operator::RParen)])),
        "missing operand in parentheses"
    );
    assert_eq!(
        message(select(&[e(), op(Operator::Plus)])),
        "missing second operand"
    );
    assert_eq!(
        message(select(&[op(Operator::Minus), e()])),
        "missing first operand"
    );
    assert_eq!(message(select(&[op(Operator::Not)])), "unexpected terminal");
    assert_eq!(message(select(&[])), "unexpected terminal");
}

#[test]
fn no_rule_with_placeholder_is_poisoned() {
    let rule = select(&[StackSymbol::Expr(Expr::placeholder()), op(Operator::Plus)]);
    match rule {
        Rule::NoRule(no) => assert!(no.poisoned),
        other => panic!("unexpected {other:?}"),
    }
}

// === Operands ===

#[test]
fn literal_operands() {
    let scopes = ScopeStack::new();
    let checked = check_operand(&Token::dummy(TokenKind::Int(0)), &scopes).unwrap();
    assert_eq!(checked.expr.ty, ExprType::INT);
    assert!(checked.expr.literal_zero);
    assert_eq!(checked.code.as_slice(), [Instr::Push(Operand::Int(0))]);

    let checked = check_operand(&Token::dummy(TokenKind::Keyword(Keyword::Nil)), &scopes).unwrap();
    assert_eq!(checked.expr.ty, ExprType::NIL);
}

#[test]
fn identifier_operands() {
    let mut scopes = ScopeStack::new();
    scopes.push();
    let sym = scopes.insert("g").unwrap();
    sym.kind = SymbolKind::Double;
    sym.flags = SymbolFlags::INITIALIZED | SymbolFlags::NILABLE;
    let uid = sym.uid();
    scopes.push();
    scopes.insert("pending").unwrap().kind = SymbolKind::Integer;
    scopes.insert("f").unwrap().kind = SymbolKind::Function;
    scopes
        .search_mut("f")
        .unwrap()
        .flags
        .insert(SymbolFlags::INITIALIZED);

    let checked =
        check_operand(&Token::dummy(TokenKind::Identifier("g".into())), &scopes).unwrap();
    assert_eq!(checked.expr.ty, nilable(ValueType::Double));
    assert_eq!(
        checked.code.as_slice(),
        [Instr::Push(Operand::Var {
            name: "g".into(),
            uid,
            global: true,
        })]
    );

    let err = check_operand(&Token::dummy(TokenKind::Identifier("pending".into())), &scopes)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UndefinedVariable);

    let err = check_operand(&Token::dummy(TokenKind::Identifier("nope".into())), &scopes)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UndefinedVariable);

    let err =
        check_operand(&Token::dummy(TokenKind::Identifier("f".into())), &scopes).unwrap_err();
    assert_eq!(err.code, ErrorCode::Semantic);
}

// === Arithmetic ===

#[test]
fn int_arithmetic_stays_int() {
    let checked = check_binary(expr(ExprType::INT), Operator::Plus, expr(ExprType::INT)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::INT);
    assert_eq!(
        checked.code.as_slice(),
        [Instr::Arith { op: ArithOp::Add, on_ints: true }]
    );
}

#[test]
fn int_division_is_integer_division() {
    let checked =
        check_binary(expr(ExprType::INT), Operator::Slash, expr(ExprType::INT)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::INT);
    assert_eq!(
        checked.code.as_slice(),
        [Instr::Arith { op: ArithOp::DivInt, on_ints: true }]
    );
}

#[test]
fn mixed_operands_promote_the_int_side() {
    let checked =
        check_binary(expr(ExprType::DOUBLE), Operator::Star, expr(ExprType::INT)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::DOUBLE);
    assert_eq!(
        checked.code.as_slice(),
        [
            Instr::IntToFloatTop,
            Instr::Arith { op: ArithOp::Mul, on_ints: false }
        ]
    );

    let checked =
        check_binary(expr(ExprType::INT), Operator::Slash, expr(ExprType::DOUBLE)).unwrap();
    assert_eq!(
        checked.code.as_slice(),
        [
            Instr::IntToFloatSecond,
            Instr::Arith { op: ArithOp::DivFloat, on_ints: false }
        ]
    );
}

#[test]
fn literal_zero_divisor() {
    let err = check_binary(expr(ExprType::INT), Operator::Slash, zero()).unwrap_err();
    assert_eq!(err.code, ErrorCode::Semantic);
    assert_eq!(err.fallback.ty, ExprType::DOUBLE);
    assert!(check_binary(expr(ExprType::INT), Operator::Star, zero()).is_ok());
}

#[test]
fn string_concat_only_with_plus() {
    let checked =
        check_binary(expr(ExprType::STRING), Operator::Plus, expr(ExprType::STRING)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::STRING);
    assert_eq!(checked.code.as_slice(), [Instr::Concat]);

    let err = check_binary(expr(ExprType::STRING), Operator::Minus, expr(ExprType::STRING))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
    let err =
        check_binary(expr(ExprType::STRING), Operator::Plus, expr(ExprType::INT)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
}

#[test]
fn nilable_arithmetic_is_rejected() {
    let err = check_binary(
        expr(nilable(ValueType::Int)),
        Operator::Plus,
        expr(ExprType::INT),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
    let err = check_binary(expr(ExprType::NIL), Operator::Star, expr(ExprType::INT)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
}

#[test]
fn poisoned_operands_are_silent() {
    let checked =
        check_binary(Expr::placeholder(), Operator::Plus, expr(ExprType::STRING)).unwrap();
    assert!(checked.expr.poisoned);
    assert!(checked.code.is_empty());
}

// === Relational ===

#[test]
fn ordering_needs_same_plain_types() {
    let checked =
        check_binary(expr(ExprType::INT), Operator::Le, expr(ExprType::INT)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::BOOL);
    assert_eq!(
        checked.code.as_slice(),
        [Instr::Compare(CompareOp::LessEqual)]
    );

    for (l, r) in [
        (ExprType::INT, ExprType::DOUBLE),
        (nilable(ValueType::Int), ExprType::INT),
        (ExprType::BOOL, ExprType::BOOL),
    ] {
        let err = check_binary(expr(l), Operator::Lt, expr(r)).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompatibleTypes, "{l} < {r}");
    }
}

#[test]
fn equality_ignores_nilability_and_accepts_nil() {
    assert!(check_binary(
        expr(nilable(ValueType::String)),
        Operator::Eq,
        expr(ExprType::STRING)
    )
    .is_ok());
    assert!(check_binary(
        expr(nilable(ValueType::Int)),
        Operator::Ne,
        expr(ExprType::NIL)
    )
    .is_ok());
    let err =
        check_binary(expr(ExprType::INT), Operator::Eq, expr(ExprType::NIL)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
    let err =
        check_binary(expr(ExprType::INT), Operator::Eq, expr(ExprType::DOUBLE)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
}

#[test]
fn nil_coalesce_takes_right_type() {
    let checked = check_binary(
        expr(nilable(ValueType::Int)),
        Operator::NilCoalesce,
        expr(ExprType::INT),
    )
    .unwrap();
    assert_eq!(checked.expr.ty, ExprType::INT);
    assert_eq!(checked.code.as_slice(), [Instr::NilCoalesce]);

    let checked =
        check_binary(expr(ExprType::NIL), Operator::NilCoalesce, expr(ExprType::STRING)).unwrap();
    assert_eq!(checked.expr.ty, ExprType::STRING);

    let err =
        check_binary(expr(ExprType::INT), Operator::NilCoalesce, expr(ExprType::INT)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
    let err = check_binary(
        expr(nilable(ValueType::Int)),
        Operator::NilCoalesce,
        expr(ExprType::DOUBLE),
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
}

// === Unwrap ===

#[test]
fn force_unwrap() {
    let unwrapped = check_not_nil(expr(nilable(ValueType::Double))).unwrap();
    assert_eq!(unwrapped.ty, ExprType::DOUBLE);
    let err = check_not_nil(expr(ExprType::NIL)).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompatibleTypes);
}
