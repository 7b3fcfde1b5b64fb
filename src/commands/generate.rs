//! Generate static files

use anyhow::Result;

use crate::content::ListOptions;
use crate::generator::Generator;
use crate::Folio;

/// Build the index and write every enabled output
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let published = folio.all_posts(ListOptions::default())?.len();
    let total = folio.all_posts(ListOptions::with_drafts())?.len();
    tracing::info!(
        "Loaded {} posts ({} drafts skipped)",
        published,
        total - published
    );

    let written = Generator::new(folio).generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
