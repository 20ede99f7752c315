use django2dart_compiler::{
    compile_model,
    error::ConvertError,
    transform,
    type_map::TargetType,
    TransformOptions,
};

fn field_list(dart: &str) -> Vec<&str> {
    dart.lines()
        .filter(|l| l.starts_with("    ") && !l.starts_with("        ") && l.ends_with(';'))
        .filter(|l| l.contains("? "))
        .map(str::trim)
        .collect()
}

#[test]
fn test_end_to_end_answer() {
    let input = "question = models.CharField(max_length=255)\nexpert = models.ForeignKey('Expert', null=True)\n";
    let dart = transform(input, "Answer", false).expect("transform failed");

    let expected = "\
class Answer {
    String? question;
    ExpertModel? expert;

    Answer({
        this.question,
        this.expert,
    });

    Answer.fromJson(Map<String, dynamic> json) :
        question = json['question'],
        expert = json['expert'];

    Map<String, dynamic> toJson() => {
        'question' : question,
        'expert' : expert.toString(),
    };
}
";
    assert_eq!(dart, expected);
}

#[test]
fn test_char_field_declaration() {
    let dart = transform(
        "name = models.CharField(verbose_name=\"Name\", max_length=255, blank=False)",
        "Person",
        false,
    )
    .unwrap();
    assert_eq!(field_list(&dart), vec!["String? name;"]);
    assert!(dart.contains("        'name' : name,\n"));
}

#[test]
fn test_foreign_key_declaration() {
    let dart = transform(
        "expert = models.ForeignKey('Expert', verbose_name='Expert', on_delete=models.SET_NULL, null=True, blank=True)",
        "Answer",
        false,
    )
    .unwrap();
    assert_eq!(field_list(&dart), vec!["ExpertModel? expert;"]);
}

#[test]
fn test_camel_case_keeps_json_keys() {
    let input = "is_expert_validated = models.BooleanField(default=False)\nscore = models.IntegerField(default=0)";
    let dart = transform(input, "Answer", true).unwrap();

    assert_eq!(field_list(&dart), vec!["bool? isExpertValidated;", "int? score;"]);
    assert!(dart.contains("        this.isExpertValidated,\n"));
    assert!(dart.contains("        isExpertValidated = json['is_expert_validated'],\n"));
    assert!(dart.contains("        score = json['score'];\n"));
    assert!(dart.contains("        'is_expert_validated' : isExpertValidated.toString(),\n"));
}

#[test]
fn test_integer_is_stringified() {
    let dart = transform("score = models.IntegerField(default=0, help_text=\"Score\")", "Answer", false).unwrap();
    assert!(dart.contains("        'score' : score.toString(),\n"));
    assert!(!dart.contains("'score' : score,"));
}

#[test]
fn test_multi_line_matches_single_line() {
    let single = "expert = models.ForeignKey('Expert', on_delete=models.SET_NULL, null=True)\nscore = models.IntegerField(default=0)";
    let multi = "expert = models.ForeignKey(\n    'Expert',\n    on_delete=models.SET_NULL,\n    null=True\n)\nscore = models.IntegerField(\n    default=0,\n)";
    let a = compile_model(single, &TransformOptions::new("Answer", false)).unwrap();
    let b = compile_model(multi, &TransformOptions::new("Answer", false)).unwrap();

    let summary = |c: &django2dart_compiler::compiler::Compilation| {
        c.class
            .fields
            .iter()
            .map(|f| (f.snake_name.clone(), f.target_type.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&a), summary(&b));
    assert_eq!(
        transform(single, "Answer", false).unwrap(),
        transform(multi, "Answer", false).unwrap()
    );
}

#[test]
fn test_blank_and_comment_lines_are_ignored() {
    let input = "
    # YOUR INPUT STRING IN THE FORMAT: VARIABLE_NAME = models.VARIABLE_TYPE(attributes).
    # question = models.CharField(verbose_name=\"Title of the question\", max_length=255)

question = models.CharField(max_length=255)

# a note about the next field
answer = models.TextField(blank=True)
";
    let compilation = compile_model(input, &TransformOptions::new("Answer", false)).unwrap();
    let names: Vec<_> = compilation.class.fields.iter().map(|f| f.snake_name.as_str()).collect();
    assert_eq!(names, ["question", "answer"]);
}

#[test]
fn test_transform_is_deterministic() {
    let input = "a = models.CharField()\nb = models.DateField()\nc = models.FloatField()";
    let first = transform(input, "Thing", true).unwrap();
    let second = transform(input, "Thing", true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_type_is_permissive() {
    let input = "payload = models.JSONField(default=dict)";
    let dart = transform(input, "Event", false).unwrap();
    assert_eq!(field_list(&dart), vec!["? payload;"]);

    let compilation = compile_model(input, &TransformOptions::new("Event", false)).unwrap();
    assert_eq!(compilation.class.fields[0].target_type, TargetType::Unresolved);
    assert_eq!(compilation.diagnostics.len(), 1);
}

#[test]
fn test_all_supported_types() {
    let input = "\
a = models.CharField()
b = models.TextField()
c = models.TimeField()
d = MultiSelectField(choices=X)
e = LowercaseEmailField()
f = models.BooleanField()
g = models.IntegerField()
h = models.SmallIntegerField()
i = models.PositiveSmallIntegerField()
j = models.FloatField()
k = models.DateField()
";
    let dart = transform(input, "All", false).unwrap();
    assert_eq!(
        field_list(&dart),
        vec![
            "String? a;", "String? b;", "String? c;", "String? d;", "String? e;",
            "bool? f;", "int? g;", "int? h;", "int? i;", "double? j;", "DateTime? k;",
        ]
    );
}

#[test]
fn test_missing_assignment_aborts() {
    let err = transform("a = models.CharField()\nmodels.CharField()\n", "Broken", false).unwrap_err();
    assert!(
        matches!(err, ConvertError::MissingAssignment { line: 2, .. }),
        "expected a MissingAssignment but got {:?}",
        err
    );
}

#[test]
fn test_unclosed_call_aborts() {
    let err = transform("a = models.CharField(max_length=3", "Broken", false).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedInput { .. }));
    assert!(err.to_string().starts_with("Malformed input at line 1"));
}
