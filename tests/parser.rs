use rockstar::{
    ast::{BinaryOperator, Expr, Literal, Program, Statement},
    error::ParseError,
    interpreter::{lexer::lex, parser::parse},
    location::SourceLocation,
};

fn parse_src(src: &str) -> Program {
    let tokens = lex(src).unwrap_or_else(|e| panic!("Lexing failed for {src:?}: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Parsing failed for {src:?}: {e}"))
}

fn parse_error(src: &str) -> ParseError {
    let tokens = lex(src).unwrap_or_else(|e| panic!("Lexing failed for {src:?}: {e}"));
    match parse(&tokens) {
        Ok(program) => panic!("Parsing succeeded but was expected to fail: {program:?}"),
        Err(e) => e,
    }
}

fn printed(statement: &Statement) -> &Expr {
    match statement {
        Statement::Print { value, .. } => value,
        other => panic!("Expected a print statement, found {other:?}"),
    }
}

fn variable_name(expr: &Expr) -> &str {
    match expr {
        Expr::Variable { name, .. } => name,
        other => panic!("Expected a variable, found {other:?}"),
    }
}

fn operator(expr: &Expr) -> BinaryOperator {
    match expr {
        Expr::BinaryOp { op, .. } => *op,
        other => panic!("Expected a binary operation, found {other:?}"),
    }
}

#[test]
fn pronoun_resolves_to_last_variable() {
    let program = parse_src("My heart is 5\nWhisper it");
    assert_eq!(variable_name(printed(&program.statements[1])), "my heart");
}

#[test]
fn pronoun_follows_source_order() {
    let program = parse_src("Put 1 into my heart\nPut 2 into your soul\nSay it\nSay my heart\nSay it");
    assert_eq!(variable_name(printed(&program.statements[2])), "your soul");
    assert_eq!(variable_name(printed(&program.statements[4])), "my heart");
}

#[test]
fn pronoun_without_referent_is_an_error() {
    assert!(matches!(parse_error("Say it"),
                     ParseError::PronounWithoutReferent { .. }));
}

#[test]
fn variable_name_forms() {
    let program = parse_src("Doctor Feelgood is 5\nMy Heart is 6\nheart is 7");
    let names: Vec<_> = program.statements
                               .iter()
                               .map(|s| match s {
                                   Statement::Assignment { name, .. } => name.as_str(),
                                   other => panic!("Expected an assignment, found {other:?}"),
                               })
                               .collect();
    assert_eq!(names, vec!["doctor feelgood", "my heart", "heart"]);
}

#[test]
fn every_assignment_form_is_an_assignment() {
    let program = parse_src("Put 5 into my heart\nMy soul is 5\nJanie's wild\nRockstar says \
                             hello\nMy love thinks 5 plus 1");
    assert_eq!(program.statements.len(), 5);
    assert!(program.statements
                   .iter()
                   .all(|s| matches!(s, Statement::Assignment { .. })));
}

#[test]
fn increment_repetitions_add_up() {
    let program = parse_src("Build my counter up, up, up\nKnock my counter down down");

    assert!(matches!(&program.statements[0],
                     Statement::Increment { name, amount: 3, .. } if name == "my counter"));
    assert!(matches!(&program.statements[1],
                     Statement::Decrement { amount: 2, .. }));
}

#[test]
fn arithmetic_precedence() {
    let program = parse_src("Say 1 plus 2 times 3");

    match printed(&program.statements[0]) {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Add,
                         right,
                         .. } => {
            assert!(matches!(**left, Expr::Literal { value: Literal::Number(_), .. }));
            assert_eq!(operator(right), BinaryOperator::Mul);
        },
        other => panic!("Unexpected expression {other:?}"),
    }
}

#[test]
fn comparison_phrases() {
    let cases = [("Say 1 is higher than 2", BinaryOperator::Greater),
                 ("Say 1 is weaker than 2", BinaryOperator::Less),
                 ("Say 1 is as high as 2", BinaryOperator::GreaterEqual),
                 ("Say 1 is as small as 2", BinaryOperator::LessEqual),
                 ("Say 1 is 2", BinaryOperator::Equal),
                 ("Say 1 is not 2", BinaryOperator::NotEqual),
                 ("Say 1 ain't 2", BinaryOperator::NotEqual)];

    for (src, expected) in cases {
        let program = parse_src(src);
        assert_eq!(operator(printed(&program.statements[0])), expected, "{src}");
    }
}

#[test]
fn logical_operators_bind_loosest() {
    let program = parse_src("Say 1 is higher than 2 or 3 is lower than 4 and true");

    match printed(&program.statements[0]) {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Or,
                         right,
                         .. } => {
            assert_eq!(operator(left), BinaryOperator::Greater);
            assert_eq!(operator(right), BinaryOperator::And);
        },
        other => panic!("Unexpected expression {other:?}"),
    }
}

#[test]
fn call_arguments_are_atoms() {
    let program = parse_src("Say Midnight taking my world, Fire is nothing");

    match printed(&program.statements[0]) {
        Expr::BinaryOp { left,
                         op: BinaryOperator::Equal,
                         right,
                         .. } => {
            match &**left {
                Expr::FunctionCall { name, arguments, .. } => {
                    assert_eq!(name, "midnight");
                    assert_eq!(arguments.len(), 2);
                    assert_eq!(variable_name(&arguments[1]), "fire");
                },
                other => panic!("Expected a call, found {other:?}"),
            }
            assert!(matches!(**right, Expr::Literal { value: Literal::Null, .. }));
        },
        other => panic!("Unexpected expression {other:?}"),
    }
}

#[test]
fn function_declaration() {
    let program = parse_src("Midnight takes your heart and your soul\nGive back it\n\nSay 1");

    assert_eq!(program.statements.len(), 2);
    match &program.statements[0] {
        Statement::Function(def) => {
            assert_eq!(def.name, "midnight");
            assert_eq!(def.params, vec!["your heart", "your soul"]);
            // The function name does not become the pronoun's referent.
            match &def.body[0] {
                Statement::Return { value, .. } => assert_eq!(variable_name(value), "your soul"),
                other => panic!("Expected a return, found {other:?}"),
            }
        },
        other => panic!("Expected a function, found {other:?}"),
    }
}

#[test]
fn blank_line_closes_only_the_innermost_block() {
    let program = parse_src("While true\nIf true\nSay 1\n\nSay 2\n\nSay 3");

    assert_eq!(program.statements.len(), 2);
    match &program.statements[0] {
        Statement::While { body, .. } => {
            assert_eq!(body.len(), 2);
            assert!(matches!(&body[0], Statement::If { then_branch, .. } if then_branch.len() == 1));
            assert!(matches!(body[1], Statement::Print { .. }));
        },
        other => panic!("Expected a loop, found {other:?}"),
    }
    assert!(matches!(program.statements[1], Statement::Print { .. }));
}

#[test]
fn dedent_closes_the_block() {
    let program = parse_src("If nothing\n    Say 1\nSay 2");

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0],
                     Statement::If { then_branch, .. } if then_branch.len() == 1));
}

#[test]
fn dedent_can_close_several_blocks() {
    let program = parse_src("While true\n    If true\n        Say 1\nSay 2");

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0],
                     Statement::While { body, .. } if body.len() == 1));
}

#[test]
fn blank_line_and_dedent_together() {
    let program = parse_src("While true\n    If true\n        Say 1\n\n    Say 2\nSay 3");

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0],
                     Statement::While { body, .. } if body.len() == 2));
}

#[test]
fn indented_else_branch() {
    let program = parse_src("If nothing\n    Say 1\nElse\n    Say 2\nSay 3");

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0],
                     Statement::If { else_branch: Some(branch), .. } if branch.len() == 1));
}

#[test]
fn else_if_chains() {
    let program = parse_src("If 1 is 2\nSay 1\nElse If 1 is 1\nSay 2\nElse\nSay 3");

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::If { else_branch: Some(else_branch),
                        .. } => {
            assert_eq!(else_branch.len(), 1);
            assert!(matches!(&else_branch[0],
                             Statement::If { else_branch: Some(inner), .. } if inner.len() == 1));
        },
        other => panic!("Expected a conditional, found {other:?}"),
    }
}

#[test]
fn loops_and_exits() {
    let program = parse_src("Until my heart is 5\nBuild my heart up\nBreak it down\nTake it to \
                             the top\n");

    match &program.statements[0] {
        Statement::Until { body, .. } => {
            assert!(matches!(body[1], Statement::Break { .. }));
            assert!(matches!(body[2], Statement::Continue { .. }));
        },
        other => panic!("Expected a loop, found {other:?}"),
    }
}

#[test]
fn listen_forms() {
    let program = parse_src("Listen to your heart\nListen");

    assert!(matches!(&program.statements[0],
                     Statement::Listen { target: Some(name), .. } if name == "your heart"));
    assert!(matches!(program.statements[1], Statement::Listen { target: None, .. }));
}

#[test]
fn fallback_call_needs_a_known_function() {
    let program = parse_src("Echo takes my word\nSay my word\n\nEcho \"hi\"");
    assert!(matches!(&program.statements[1],
                     Statement::Expression { expr: Expr::FunctionCall { arguments, .. }, .. }
                     if arguments.len() == 1));

    assert!(matches!(parse_error("Ghost \"boo\""),
                     ParseError::UnknownFunction { name, .. } if name == "ghost"));
}

#[test]
fn unexpected_tokens() {
    match parse_error("Put 5 my heart") {
        ParseError::UnexpectedToken { expected, location, .. } => {
            assert_eq!(expected, "'into'");
            assert_eq!(location, SourceLocation::new(1, 6, 1, 8));
        },
        e => panic!("Unexpected error {e:?}"),
    }

    assert!(matches!(parse_error("Put 5 into"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("Say 5 into"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn statement_locations_cover_the_statement() {
    let program = parse_src("Put 5 into my heart");
    assert_eq!(program.statements[0].location(), SourceLocation::new(1, 0, 1, 19));
    assert_eq!(program.location, SourceLocation::new(1, 0, 1, 19));
}

#[test]
fn empty_program() {
    assert!(parse_src("").statements.is_empty());
    assert!(parse_src("\n\n(just a comment)\n").statements.is_empty());
}
