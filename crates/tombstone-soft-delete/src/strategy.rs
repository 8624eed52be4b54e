use crate::{DeleteClause, QueryClause, UpdateClause};

use std::sync::Arc;
use tombstone_core::{
    schema::{Field, FieldHooks},
    stmt::{StatementModifier, Type, Value},
    Error, Result,
};

/// Soft-delete policy attached to a model's flag field.
///
/// The field must be boolean. When `companion` names another field of the
/// model, deletes also set that field: `true` for boolean fields, the current
/// time for timestamp fields, and null for anything else.
#[derive(Debug, Clone, Default)]
pub struct SoftDelete {
    companion: Option<String>,
}

impl SoftDelete {
    pub fn new() -> SoftDelete {
        SoftDelete::default()
    }

    /// Sets the field updated alongside the flag on delete.
    pub fn companion(mut self, field: impl Into<String>) -> SoftDelete {
        self.companion = Some(field.into());
        self
    }

    fn query_clause(&self, field: &Field) -> Result<QueryClause> {
        if !field.ty.is_bool() {
            return Err(Error::invalid_schema(format!(
                "soft-delete field `{}` must be a boolean, found {:?}",
                field.name, field.ty
            )));
        }

        Ok(QueryClause::new(field))
    }

    fn companion_field<'a>(&self, field: &Field, fields: &'a [Field]) -> Result<Option<&'a Field>> {
        let Some(name) = &self.companion else {
            return Ok(None);
        };

        let companion = fields
            .iter()
            .find(|f| f.name == *name)
            .ok_or_else(|| {
                Error::invalid_schema(format!(
                    "companion field `{name}` of soft-delete field `{}` does not exist",
                    field.name
                ))
            })?;

        if companion.column_name() == field.column_name() {
            return Err(Error::invalid_schema(format!(
                "soft-delete field `{}` cannot be its own companion",
                field.name
            )));
        }

        Ok(Some(companion))
    }
}

impl FieldHooks for SoftDelete {
    fn query_clauses(
        &self,
        field: &Field,
        _fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        Ok(vec![Arc::new(self.query_clause(field)?)])
    }

    fn update_clauses(
        &self,
        field: &Field,
        _fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        Ok(vec![Arc::new(UpdateClause::new(self.query_clause(field)?))])
    }

    fn delete_clauses(
        &self,
        field: &Field,
        fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        let mut clause = DeleteClause::new(field, self.query_clause(field)?);

        if let Some(companion) = self.companion_field(field, fields)? {
            clause = clause.companion(companion);
        }

        Ok(vec![Arc::new(clause)])
    }
}

/// Value a companion field is set to when its row is soft deleted.
pub(crate) fn companion_sentinel(ty: Type, now: impl FnOnce() -> Value) -> Value {
    match ty {
        Type::Bool => true.into(),
        Type::Timestamp => now(),
        _ => Value::Null,
    }
}
