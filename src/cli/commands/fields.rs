use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::entity::EntityKind;
use crate::utils::table::Table;

/// Handle the `fields` command: list queryable entities with their REST
/// path and searchable fields.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Fields { entity } = cmd {
        let kinds: Vec<EntityKind> = match entity {
            Some(name) => {
                let kind = EntityKind::from_param(name)
                    .ok_or_else(|| AppError::UnknownEntity(name.clone()))?;
                vec![kind]
            }
            None => EntityKind::ALL.to_vec(),
        };

        let mut table = Table::new(&["Entity", "Path", "Searchable fields"]);
        for kind in kinds {
            table.add_row(vec![
                kind.as_param().to_string(),
                kind.api_path().to_string(),
                kind.searchable_fields().join(", "),
            ]);
        }

        println!("📋 Queryable entities:\n");
        print!("{}", table.render());
    }

    Ok(())
}
