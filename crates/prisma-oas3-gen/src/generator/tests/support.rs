use crate::{
  dmmf::{Datamodel, DatamodelEnum, EnumValue, Field, FieldKind, Model},
  generator::schema::{ObjectSchema, SchemaDocument, SchemaFragment},
};

pub(super) fn field(name: &str, kind: FieldKind, field_type: &str) -> Field {
  Field::builder().name(name).kind(kind).field_type(field_type).build()
}

pub(super) fn scalar(name: &str, field_type: &str) -> Field {
  field(name, FieldKind::Scalar, field_type)
}

pub(super) fn required(field: Field) -> Field {
  Field {
    is_required: true,
    ..field
  }
}

pub(super) fn list(field: Field) -> Field {
  Field { is_list: true, ..field }
}

pub(super) fn documented(field: Field, documentation: &str) -> Field {
  Field {
    documentation: Some(documentation.to_string()),
    ..field
  }
}

pub(super) fn model(name: &str, fields: Vec<Field>) -> Model {
  Model::builder().name(name).fields(fields).build()
}

pub(super) fn enum_def(name: &str, values: &[&str]) -> DatamodelEnum {
  DatamodelEnum::builder()
    .name(name)
    .values(values.iter().copied().map(EnumValue::new).collect())
    .build()
}

/// `User { id Int, email String, name String?, role Role }` and `enum Role { USER ADMIN }`.
pub(super) fn user_datamodel() -> Datamodel {
  Datamodel::builder()
    .models(vec![model(
      "User",
      vec![
        required(scalar("id", "Int")),
        required(scalar("email", "String")),
        scalar("name", "String"),
        required(field("role", FieldKind::Enum, "Role")),
      ],
    )])
    .enums(vec![enum_def("Role", &["USER", "ADMIN"])])
    .build()
}

pub(super) fn simple_datamodel() -> Datamodel {
  Datamodel::from_json(include_str!("../../../fixtures/simple.json")).unwrap()
}

pub(super) fn object_schema<'a>(document: &'a SchemaDocument, name: &str) -> &'a ObjectSchema {
  document
    .schema(name)
    .unwrap_or_else(|| panic!("expected inline schema {name}"))
}

pub(super) fn property<'a>(schema: &'a ObjectSchema, name: &str) -> &'a SchemaFragment {
  schema
    .properties
    .as_ref()
    .and_then(|properties| properties.get(name))
    .unwrap_or_else(|| panic!("expected property {name}"))
}

pub(super) fn inline(fragment: &SchemaFragment) -> &ObjectSchema {
  fragment.as_schema().expect("expected inline schema, found $ref")
}
