use salary_scraper::{
    pipeline::build_rows, report::Table, Config, HeadHunter, JobSource, Result, SuperJob,
};

use crate::Target;

async fn build_table(source: &dyn JobSource, config: &Config) -> Result<Table> {
    log::info!(
        "Building {} table for {} languages",
        source.name(),
        config.languages.len()
    );
    let rows = build_rows(source, &config.languages, config.workers).await?;
    Ok(Table::new(source.name(), &rows))
}

/// Print one table per target, a failing board stops all following ones.
pub async fn print_tables(config: &Config, targets: &[Target]) -> Result<()> {
    for (i, target) in targets.iter().enumerate() {
        let source: Box<dyn JobSource> = match target {
            Target::Headhunter => Box::new(HeadHunter::new(config.headhunter.clone())?),
            Target::Superjob => Box::new(SuperJob::new(config.superjob.clone())?),
        };
        let table = build_table(source.as_ref(), config).await?;
        if i > 0 {
            println!();
        }
        println!("{}", table);
    }
    Ok(())
}
