use gitignore_engine_rs::arena::Arena;
use gitignore_engine_rs::pattern::{
    compile_line, CompiledPattern, Element, PatternError, Segment,
};

fn compile(arena: &Arena, line: &str) -> Result<CompiledPattern, PatternError> {
    compile_line(arena, arena.alloc_bytes(line.as_bytes()))
}

#[test]
fn skips_empty_and_whitespace_lines() {
    let arena = Arena::new();
    for line in ["", "   ", "\t"] {
        let err = compile(&arena, line).expect_err("blank line should be skipped");
        assert_eq!(err, PatternError::EmptyLine);
    }
}

#[test]
fn skips_comment_lines() {
    let arena = Arena::new();
    let err = compile(&arena, "# build artifacts").expect_err("comment should be skipped");
    assert!(matches!(err, PatternError::CommentLine { .. }));
}

#[test]
fn escaped_hash_is_a_pattern_not_a_comment() {
    let arena = Arena::new();
    let pattern = compile(&arena, "\\#abc").expect("escaped hash should compile");
    assert!(pattern.is_literal());
    assert_eq!(pattern.literal_basename(), Some(b"#abc".as_slice()));
}

#[test]
fn skips_odd_trailing_backslash() {
    let arena = Arena::new();
    let err = compile(&arena, "foo\\").expect_err("unterminated escape should be skipped");
    assert!(matches!(err, PatternError::UnterminatedEscape { .. }));

    // an even run escapes itself and stays a pattern
    let pattern = compile(&arena, "foo\\\\").expect("self-escaped backslash should compile");
    assert_eq!(pattern.literal_basename(), Some(b"foo\\".as_slice()));
}

#[test]
fn strips_a_leading_bom() {
    let arena = Arena::new();
    let pattern = compile(&arena, "\u{feff}foo").expect("BOM line should compile");
    assert_eq!(pattern.literal_basename(), Some(b"foo".as_slice()));
}

#[test]
fn unescaped_trailing_spaces_are_stripped() {
    let arena = Arena::new();
    let pattern = compile(&arena, "bcd  ").expect("line should compile");
    assert_eq!(pattern.literal_basename(), Some(b"bcd".as_slice()));
}

#[test]
fn escaped_trailing_space_is_preserved() {
    let arena = Arena::new();
    let pattern = compile(&arena, "a\\ ").expect("line should compile");
    assert_eq!(pattern.literal_basename(), Some(b"a ".as_slice()));
}

#[test]
fn leading_bang_negates() {
    let arena = Arena::new();
    let pattern = compile(&arena, "!foo").expect("line should compile");
    assert!(pattern.is_negated());

    let pattern = compile(&arena, "\\!foo").expect("line should compile");
    assert!(!pattern.is_negated());
    assert_eq!(pattern.literal_basename(), Some(b"!foo".as_slice()));
}

#[test]
fn trailing_slash_marks_directory_only() {
    let arena = Arena::new();
    let pattern = compile(&arena, "build/").expect("line should compile");
    assert!(pattern.is_dir_only());
    assert!(!pattern.is_anchored());
}

#[test]
fn anchoring_rules() {
    let arena = Arena::new();

    let leading = compile(&arena, "/foo").expect("line should compile");
    assert!(leading.is_anchored());

    let internal = compile(&arena, "a/b").expect("line should compile");
    assert!(internal.is_anchored());

    let bare = compile(&arena, "foo").expect("line should compile");
    assert!(!bare.is_anchored());

    // a leading globstar keeps the pattern floating despite the slash
    let floating = compile(&arena, "**/foo").expect("line should compile");
    assert!(!floating.is_anchored());
}

#[test]
fn empty_body_after_flags_is_skipped() {
    let arena = Arena::new();
    for line in ["/", "!", "!/", "//"] {
        let err = compile(&arena, line).expect_err("bodyless line should be skipped");
        assert!(matches!(err, PatternError::EmptyBody { .. }), "line {line:?}");
    }
}

#[test]
fn globstar_must_stand_alone_between_slashes() {
    let arena = Arena::new();

    let pattern = compile(&arena, "a/**/b").expect("line should compile");
    let segments = pattern.segments();
    assert_eq!(segments.len(), 3);
    assert!(matches!(segments[1], Segment::Globstar));
    assert_eq!(pattern.min_depth(), 2);

    // inside a segment, consecutive stars collapse to one
    let pattern = compile(&arena, "a**b").expect("line should compile");
    match &pattern.segments()[0] {
        Segment::Normal(elements) => {
            assert_eq!(elements.len(), 3);
            assert!(matches!(elements[0], Element::Literal(_)));
            assert!(matches!(elements[1], Element::Star));
            assert!(matches!(elements[2], Element::Literal(_)));
        }
        other => panic!("expected normal segment, got {other:?}"),
    }
}

#[test]
fn unterminated_class_falls_back_to_literal_bracket() {
    let arena = Arena::new();
    let pattern = compile(&arena, "[abc").expect("line should compile");
    match &pattern.segments()[0] {
        Segment::Normal(elements) => {
            assert_eq!(elements.len(), 1);
            match &elements[0] {
                Element::Literal(run) => assert_eq!(run.as_slice(), b"[abc"),
                other => panic!("expected literal element, got {other:?}"),
            }
        }
        other => panic!("expected normal segment, got {other:?}"),
    }
    // the body still carries a '[', so the literal hint stays off
    assert!(!pattern.is_literal());
}

#[test]
fn inverted_range_is_dropped() {
    let arena = Arena::new();
    let pattern = compile(&arena, "[z-a]").expect("line should compile");
    match &pattern.segments()[0] {
        Segment::Normal(elements) => match &elements[0] {
            Element::Class(class) => {
                assert!(class.is_empty());
                assert!(!class.holds(b'm'));
            }
            other => panic!("expected class element, got {other:?}"),
        },
        other => panic!("expected normal segment, got {other:?}"),
    }
}

#[test]
fn min_depth_ignores_globstars() {
    let arena = Arena::new();
    assert_eq!(
        compile(&arena, "**/foo").expect("line should compile").min_depth(),
        1
    );
    assert_eq!(
        compile(&arena, "a/b/c").expect("line should compile").min_depth(),
        3
    );
    assert_eq!(
        compile(&arena, "a/**").expect("line should compile").min_depth(),
        1
    );
}

#[test]
fn raw_text_is_preserved_for_diagnostics() {
    let arena = Arena::new();
    let pattern = compile(&arena, "!foo/  ").expect("line should compile");
    assert_eq!(pattern.raw_text(), b"!foo/  ");
}
