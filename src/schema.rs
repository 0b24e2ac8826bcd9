use indexmap::IndexMap;

use crate::name::{verified_fullname, verify_enum_symbol, verify_field_name, NameError};

pub const ARRAY_NAME: &str = "array";
pub const MAP_NAME: &str = "map";
pub const UNION_NAME: &str = "union";

/// One Avro type description. Named kinds carry their raw `name` (possibly
/// dotted), an explicit `namespace` (possibly empty), and the canonical
/// `fullname`, which is empty until the type has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Record {
        name: String,
        namespace: String,
        fullname: String,
        fields: IndexMap<String, Field>,
    },
    Enum {
        name: String,
        namespace: String,
        fullname: String,
        symbols: Vec<String>,
    },
    Fixed {
        name: String,
        namespace: String,
        fullname: String,
        size: usize,
    },
    Array(Box<Schema>),
    Map(Box<Schema>),
    Union(Vec<Schema>),
}

impl Schema {
    /// Raw short name for named kinds, intrinsic token for everything else.
    pub fn name(&self) -> &str {
        match self {
            Schema::Null => "null",
            Schema::Boolean => "boolean",
            Schema::Int => "int",
            Schema::Long => "long",
            Schema::Float => "float",
            Schema::Double => "double",
            Schema::Bytes => "bytes",
            Schema::String => "string",
            Schema::Record { name, .. }
            | Schema::Enum { name, .. }
            | Schema::Fixed { name, .. } => name,
            Schema::Array(_) => ARRAY_NAME,
            Schema::Map(_) => MAP_NAME,
            Schema::Union(_) => UNION_NAME,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Schema::Record { namespace, .. }
            | Schema::Enum { namespace, .. }
            | Schema::Fixed { namespace, .. } => namespace,
            Schema::Null
            | Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::Bytes
            | Schema::String
            | Schema::Array(_)
            | Schema::Map(_)
            | Schema::Union(_) => "",
        }
    }

    /// Stored canonical fullname for named kinds. This is not recomputed:
    /// callers must have populated it through resolution before relying on it.
    pub fn fullname(&self) -> &str {
        match self {
            Schema::Record { fullname, .. }
            | Schema::Enum { fullname, .. }
            | Schema::Fixed { fullname, .. } => fullname,
            other => other.name(),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(
            self,
            Schema::Record { .. } | Schema::Enum { .. } | Schema::Fixed { .. }
        )
    }

    /// Builds a record whose fullname is resolved against `enclosing_ns`.
    /// Field names must each satisfy the single-segment grammar.
    pub fn record(
        name: &str,
        namespace: &str,
        enclosing_ns: &str,
        fields: Vec<Field>,
    ) -> Result<Schema, NameError> {
        let fullname = verified_fullname(name, namespace, enclosing_ns)?;

        let mut by_name = IndexMap::with_capacity(fields.len());
        for field in fields {
            verify_field_name(&field.name)?;
            if let Some(prev) = by_name.insert(field.name.clone(), field) {
                return Err(NameError::DuplicateName(prev.name));
            }
        }

        Ok(Schema::Record {
            name: name.to_string(),
            namespace: namespace.to_string(),
            fullname,
            fields: by_name,
        })
    }

    pub fn enum_(
        name: &str,
        namespace: &str,
        enclosing_ns: &str,
        symbols: Vec<String>,
    ) -> Result<Schema, NameError> {
        let fullname = verified_fullname(name, namespace, enclosing_ns)?;

        for (i, symbol) in symbols.iter().enumerate() {
            verify_enum_symbol(symbol)?;
            if symbols[..i].contains(symbol) {
                return Err(NameError::DuplicateName(symbol.clone()));
            }
        }

        Ok(Schema::Enum {
            name: name.to_string(),
            namespace: namespace.to_string(),
            fullname,
            symbols,
        })
    }

    pub fn fixed(
        name: &str,
        namespace: &str,
        enclosing_ns: &str,
        size: usize,
    ) -> Result<Schema, NameError> {
        let fullname = verified_fullname(name, namespace, enclosing_ns)?;

        Ok(Schema::Fixed {
            name: name.to_string(),
            namespace: namespace.to_string(),
            fullname,
            size,
        })
    }
}

pub fn array(items: Schema) -> Schema {
    Schema::Array(Box::new(items))
}

pub fn map(values: Schema) -> Schema {
    Schema::Map(Box::new(values))
}

pub fn union(branches: Vec<Schema>) -> Schema {
    Schema::Union(branches)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_accessors() {
        assert_eq!(Schema::Int.name(), "int");
        assert_eq!(Schema::Int.namespace(), "");
        assert_eq!(Schema::Int.fullname(), "int");
        assert_eq!(Schema::Bytes.fullname(), "bytes");
        assert!(!Schema::Int.is_named());
    }

    #[test]
    fn unnamed_accessors_are_fixed_tokens() {
        let arr = array(Schema::Long);
        assert_eq!(arr.name(), "array");
        assert_eq!(arr.namespace(), "");
        assert_eq!(arr.fullname(), "array");

        let m = map(Schema::String);
        assert_eq!(m.name(), "map");
        assert_eq!(m.fullname(), "map");

        let u = union(vec![Schema::Null, Schema::Int]);
        assert_eq!(u.name(), "union");
        assert_eq!(u.fullname(), "union");
        assert!(!u.is_named());
    }

    #[test]
    fn record_resolves_fullname_on_construction() {
        let rec = Schema::record(
            "tname",
            "name.space",
            "enc.losing",
            vec![Field::new("f1", Schema::Int)],
        )
        .unwrap();

        assert!(rec.is_named());
        assert_eq!(rec.name(), "tname");
        assert_eq!(rec.namespace(), "name.space");
        assert_eq!(rec.fullname(), "name.space.tname");
    }

    #[test]
    fn record_falls_back_to_enclosing_namespace() {
        let rec = Schema::record("tname", "", "enc.losing", vec![]).unwrap();
        assert_eq!(rec.fullname(), "enc.losing.tname");
    }

    #[test]
    fn record_rejects_bad_field_name() {
        let err = Schema::record("tname", "", "", vec![Field::new("1bad", Schema::Int)])
            .unwrap_err();
        assert_eq!(err, NameError::InvalidName("1bad".to_string()));
    }

    #[test]
    fn record_field_order_is_preserved() {
        let rec = Schema::record(
            "tname",
            "",
            "",
            vec![
                Field::new("zeta", Schema::Int),
                Field::new("alpha", Schema::String),
            ],
        )
        .unwrap();

        let Schema::Record { fields, .. } = rec else {
            panic!("expected a record")
        };
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(fields["alpha"].schema, Schema::String);
    }

    #[test]
    fn record_rejects_duplicate_field_name() {
        let err = Schema::record(
            "tname",
            "",
            "",
            vec![Field::new("f", Schema::Int), Field::new("f", Schema::String)],
        )
        .unwrap_err();
        assert_eq!(err, NameError::DuplicateName("f".to_string()));
    }

    #[test]
    fn enum_rejects_duplicate_symbol() {
        let err = Schema::enum_(
            "suit",
            "",
            "",
            vec!["SPADES".to_string(), "HEARTS".to_string(), "SPADES".to_string()],
        )
        .unwrap_err();
        assert_eq!(err, NameError::DuplicateName("SPADES".to_string()));
    }

    #[test]
    fn enum_rejects_dotted_symbol() {
        let err = Schema::enum_("color", "", "", vec!["a.b".to_string()]).unwrap_err();
        assert_eq!(err, NameError::InvalidName("a.b".to_string()));
    }

    #[test]
    fn fixed_with_self_qualified_name() {
        let fixed = Schema::fixed("name.space.md5", "ignored", "also.ignored", 16).unwrap();
        assert_eq!(fixed.fullname(), "name.space.md5");
    }
}
