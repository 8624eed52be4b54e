use super::Field;
use crate::{stmt::StatementModifier, Result};

use std::{fmt, sync::Arc};

/// Statement hooks attached to a field.
///
/// When a model is built, each field's hooks are asked for the modifiers to
/// run before query, update, and delete statements against the model. `field`
/// is the field carrying the hooks and `fields` every field of the model.
pub trait FieldHooks: fmt::Debug + Send + Sync {
    fn query_clauses(
        &self,
        field: &Field,
        fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        let _ = (field, fields);
        Ok(vec![])
    }

    fn update_clauses(
        &self,
        field: &Field,
        fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        let _ = (field, fields);
        Ok(vec![])
    }

    fn delete_clauses(
        &self,
        field: &Field,
        fields: &[Field],
    ) -> Result<Vec<Arc<dyn StatementModifier>>> {
        let _ = (field, fields);
        Ok(vec![])
    }
}
