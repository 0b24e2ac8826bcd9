pub mod name;
pub mod schema;

pub use name::{
    build_fullname, is_correct_dotted_name, is_correct_name, resolve_name, resolve_schema_name,
    schema_fullname, split_fullname, verify_enum_symbol, verify_field_name, verify_schema,
    NameError, RESERVED_TYPE_NAMES,
};
pub use schema::{array, map, union, Field, Schema};
