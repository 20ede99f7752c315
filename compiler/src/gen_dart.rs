use crate::types::{FieldDeclaration, GeneratedClass};

const MEMBER: &str = "    ";
const ENTRY:  &str = "        ";

fn field_member(field: &FieldDeclaration) -> String {
    format!("{}{}? {};", MEMBER, field.target_type.dart_name(), field.output_name)
}

fn constructor_entry(field: &FieldDeclaration) -> String {
    format!("{}this.{},", ENTRY, field.output_name)
}

/// The JSON key is always the Django name, whatever the Dart member is called.
fn from_json_entry(field: &FieldDeclaration) -> String {
    format!("{}{} = json['{}'],", ENTRY, field.output_name, field.snake_name)
}

/// Non-string members are stringified so the map stays string-valued.
fn to_json_entry(field: &FieldDeclaration) -> String {
    if field.target_type.is_string() {
        format!("{}'{}' : {},", ENTRY, field.snake_name, field.output_name)
    } else {
        format!("{}'{}' : {}.toString(),", ENTRY, field.snake_name, field.output_name)
    }
}

/// Compiles a class into Dart source: nullable members, a named-parameter
/// constructor, a `fromJson` initializer list and a `toJson` map literal.
/// All four sections list the fields in declaration order.
pub fn compile_class_to_dart(class: &GeneratedClass) -> String {
    let name = &class.name;

    let members:       Vec<String> = class.fields.iter().map(field_member).collect();
    let constructor:   Vec<String> = class.fields.iter().map(constructor_entry).collect();
    let mut from_json: Vec<String> = class.fields.iter().map(from_json_entry).collect();
    let to_json:       Vec<String> = class.fields.iter().map(to_json_entry).collect();

    // The initializer list ends the constructor.
    if let Some(last) = from_json.last_mut() {
        last.pop();
        last.push(';');
    }

    let mut dart_code: Vec<String> = Vec::new();
    dart_code.push(format!("class {} {{", name));
    dart_code.extend(members);
    dart_code.push(String::new());

    if constructor.is_empty() {
        dart_code.push(format!("{}{}();", MEMBER, name));
    } else {
        dart_code.push(format!("{}{}({{", MEMBER, name));
        dart_code.extend(constructor);
        dart_code.push(format!("{}}});", MEMBER));
    }
    dart_code.push(String::new());

    if from_json.is_empty() {
        dart_code.push(format!("{}{}.fromJson(Map<String, dynamic> json);", MEMBER, name));
    } else {
        dart_code.push(format!("{}{}.fromJson(Map<String, dynamic> json) :", MEMBER, name));
        dart_code.extend(from_json);
    }
    dart_code.push(String::new());

    dart_code.push(format!("{}Map<String, dynamic> toJson() => {{", MEMBER));
    dart_code.extend(to_json);
    dart_code.push(format!("{}}};", MEMBER));
    dart_code.push("}".to_string());

    let mut out = dart_code.join("\n");
    out.push('\n');
    out
}
