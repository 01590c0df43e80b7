use super::{Entity, Schema};
use crate::{Config, Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
    config: &'a Config,
}

pub(super) fn verify(schema: &Schema, config: &Config) -> Result<()> {
    Verify { schema, config }.verify()
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for entity in self.schema.entities() {
            self.verify_mandatory_columns(entity)?;
            self.verify_reserved_names(entity)?;
        }

        for table in self.schema.tables.values() {
            self.verify_no_varchar(table)?;
        }

        Ok(())
    }

    fn verify_mandatory_columns(&self, entity: &Entity) -> Result<()> {
        for mandatory in &self.config.mandatory_columns {
            let Some(column) = entity.get(&mandatory.name) else {
                return Err(Error::invalid_schema(format!(
                    "{} `{}` is missing mandatory column `{}`",
                    entity.kind, entity.name, mandatory.name
                )));
            };

            if column.data_type != mandatory.data_type {
                return Err(Error::invalid_schema(format!(
                    "{} `{}` has column `{}` of type `{}`, expected `{}`",
                    entity.kind, entity.name, column.name, column.data_type, mandatory.data_type
                )));
            }

            if column.nullable != mandatory.nullable {
                return Err(Error::invalid_schema(format!(
                    "{} `{}` has column `{}` with nullable={}, expected nullable={}",
                    entity.kind, entity.name, column.name, column.nullable, mandatory.nullable
                )));
            }
        }

        Ok(())
    }

    fn verify_reserved_names(&self, entity: &Entity) -> Result<()> {
        for reserved in &self.config.reserved_names {
            if entity.contains(reserved) {
                return Err(Error::invalid_schema(format!(
                    "{} `{}` uses reserved field name `{}`",
                    entity.kind, entity.name, reserved
                )));
            }
        }

        Ok(())
    }

    fn verify_no_varchar(&self, table: &Entity) -> Result<()> {
        if let Some(column) = table.columns.values().find(|c| c.data_type == "varchar") {
            return Err(Error::invalid_schema(format!(
                "table `{}` has varchar column `{}`; use nvarchar",
                table.name, column.name
            )));
        }

        Ok(())
    }
}
